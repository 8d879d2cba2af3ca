// Entrypoint for the course registration CLI.
// - Keeps `main` small: init logging, build the default config and hand it
//   to the menu loop.
// - Always exits 0; a broken terminal is logged instead of surfacing as an
//   exit code.

use course_registration::{config::Config, ui::main_menu};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    // Blocks until the user picks "4" from the menu.
    if let Err(e) = main_menu(Config::default()) {
        log::error!("terminal input failed: {:#}", e);
    }
}
