// Program settings. There are no flags or environment variables: the
// binary always runs with `Config::default()`.

use std::path::PathBuf;

/// Fixed menu shown at the top of every loop iteration.
pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a student for a course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------
";

/// Backing file, relative to the working directory.
pub const FILE_NAME: &str = "Enrollments.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub file_name: PathBuf,
    pub menu: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_name: PathBuf::from(FILE_NAME),
            menu: MENU,
        }
    }
}
