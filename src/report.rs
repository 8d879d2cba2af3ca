// Console output shared by `storage` and `ui`. Error reports are styled
// only when the console is a terminal, so piped output stays plain text.

use crate::error::RegistrationError;
use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;
use std::io::{self, Write};

/// Writer used for everything the program prints to the user.
pub struct Console<W: Write> {
    out: W,
    styled: bool,
}

impl Console<io::Stdout> {
    /// Standard output, styled when it is attached to a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_tty();
        Console { out, styled }
    }
}

impl<W: Write> Console<W> {
    /// Console that never emits escape codes.
    pub fn plain(out: W) -> Self {
        Console { out, styled: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `message` and, when given, the error's text, its explanation
    /// and its kind, one per line. A failed write is logged, not returned.
    pub fn report_error(&mut self, message: &str, error: Option<&RegistrationError>) {
        if let Err(e) = self.write_error(message, error) {
            log::error!("failed to print error report: {}", e);
        }
    }

    fn write_error(&mut self, message: &str, error: Option<&RegistrationError>) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", style(message).red())?;
        } else {
            writeln!(self.out, "{}", message)?;
        }
        if let Some(err) = error {
            writeln!(self.out, "{}", err)?;
            writeln!(self.out, "{}", err.explanation())?;
            writeln!(self.out, "{}", err.kind())?;
        }
        Ok(())
    }
}

impl<W: Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
