// UI layer: the numbered menu loop, input prompts via `dialoguer` and all
// console output. Faults from storage and validation are reported here
// and the loop carries on.

use crate::config::Config;
use crate::error::{NameField, RegistrationError};
use crate::model::{validate_name, Registration, RegistrationStore};
use crate::report::Console;
use crate::storage;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 50;

/// A menu selection. Anything that is not one of the four menu numbers
/// becomes `NoSelection`, carrying the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    Show,
    Save,
    Exit,
    NoSelection(String),
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, RegistrationError> {
        match input {
            "1" => Ok(Command::Register),
            "2" => Ok(Command::Show),
            "3" => Ok(Command::Save),
            "4" => Ok(Command::Exit),
            other => Err(RegistrationError::InvalidSelection(other.to_string())),
        }
    }

    /// Parse `input`, reporting an invalid choice and mapping it to
    /// `NoSelection`.
    pub fn from_input<W: Write>(console: &mut Console<W>, input: &str) -> Command {
        Command::parse(input).unwrap_or_else(|err| {
            console.report_error("Please choose a valid option!", Some(&err));
            Command::NoSelection(input.to_string())
        })
    }
}

/// Main interactive loop. Loads the backing file once, then shows the menu
/// and dispatches choices until the user picks "4". Nothing is saved on
/// exit unless the user chose "3" beforehand.
pub fn main_menu(config: Config) -> Result<()> {
    let mut console = Console::stdout();
    let mut store = RegistrationStore::from(storage::load_or(
        &mut console,
        &config.file_name,
        Vec::new(),
    ));
    loop {
        render_menu(&mut console, config.menu)?;
        let command = read_menu_choice(&mut console)?;
        if dispatch(&mut console, &command, &mut store, &config)?.is_break() {
            break;
        }
    }
    writeln!(console, "Program complete. Have a nice day! :)")?;
    Ok(())
}

/// Run one menu command against the store.
pub fn dispatch<W: Write>(
    console: &mut Console<W>,
    command: &Command,
    store: &mut RegistrationStore,
    config: &Config,
) -> Result<ControlFlow<()>> {
    log::debug!("dispatching {:?}", command);
    match command {
        Command::Register => read_new_registration(console, store)?,
        Command::Show => render_registrations(console, store)?,
        Command::Save => {
            persist_registrations(console, &config.file_name, store);
        }
        Command::Exit => return Ok(ControlFlow::Break(())),
        Command::NoSelection(input) => {
            log::debug!("ignoring menu input {:?}", input);
        }
    }
    Ok(ControlFlow::Continue(()))
}

pub fn render_menu<W: Write>(out: &mut W, menu: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", menu)?;
    writeln!(out)
}

/// Prompt once for a menu number.
pub fn read_menu_choice<W: Write>(console: &mut Console<W>) -> Result<Command> {
    let choice: String = Input::new()
        .with_prompt("Please enter your menu selection")
        .allow_empty(true)
        .interact_text()?;
    Ok(Command::from_input(console, &choice))
}

/// Prompt for first name, last name and course. Each name is checked as
/// soon as it is entered; a bad name is reported and the store is left
/// alone.
pub fn read_new_registration<W: Write>(
    console: &mut Console<W>,
    store: &mut RegistrationStore,
) -> Result<()> {
    let first_name = prompt("Enter the student's first name")?;
    if !check_name(console, NameField::First, &first_name) {
        return Ok(());
    }
    let last_name = prompt("Enter the student's last name")?;
    if !check_name(console, NameField::Last, &last_name) {
        return Ok(());
    }
    let course_name = prompt("Please enter the name of the course")?;
    // Both names were checked as they came in.
    let registration = Registration {
        first_name,
        last_name,
        course_name,
    };
    add_registration(console, store, registration)?;
    Ok(())
}

/// Validate one name, reporting a rejection on `console`.
pub fn check_name<W: Write>(console: &mut Console<W>, field: NameField, value: &str) -> bool {
    match validate_name(field, value) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("rejected registration: {}", err);
            console.report_error(
                "Please make sure you have entered the correct information.",
                Some(&err),
            );
            false
        }
    }
}

/// Append a registration and print a confirmation.
pub fn add_registration<W: Write>(
    out: &mut W,
    store: &mut RegistrationStore,
    registration: Registration,
) -> io::Result<()> {
    log::info!("registered {:?}", registration);
    writeln!(out)?;
    writeln!(
        out,
        "You have registered {} {} for {}.",
        registration.first_name, registration.last_name, registration.course_name
    )?;
    store.push(registration);
    Ok(())
}

/// Print every registration between two separator lines.
pub fn render_registrations<W: Write>(out: &mut W, store: &RegistrationStore) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for registration in store.iter() {
        writeln!(out, "{}", registration)?;
    }
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Save the store to `path` and echo what was written. Returns whether the
/// save succeeded; failures are reported, not returned.
pub fn persist_registrations<W: Write>(
    console: &mut Console<W>,
    path: &Path,
    store: &RegistrationStore,
) -> bool {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Saving...");
    let result = storage::save(path, store.as_slice());
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            if let Err(e) = write_saved_confirmation(console, store) {
                log::error!("failed to print save confirmation: {}", e);
            }
            true
        }
        Err(err) => {
            let message = match err {
                RegistrationError::Serialize(_) => {
                    "Please make sure the data is a valid JSON format!"
                }
                _ => "Unspecified error. Please try again.",
            };
            log::warn!("save failed: {}", err);
            console.report_error(message, Some(&err));
            false
        }
    }
}

fn write_saved_confirmation<W: Write>(out: &mut W, store: &RegistrationStore) -> io::Result<()> {
    writeln!(out, "Here is the data you just saved!:")?;
    for registration in store.iter() {
        writeln!(out, "{}", registration)?;
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
