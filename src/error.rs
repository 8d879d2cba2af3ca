// Error module: every fault the program can run into while loading,
// saving or collecting input. Callers in `ui` report these and carry on
// with the menu loop; nothing here is fatal.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which name field of a registration failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => f.write_str("first"),
            NameField::Last => f.write_str("last"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("no such file: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize registrations: {0}")]
    Serialize(serde_json::Error),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The {field} name should only contain letters, got {value:?}.")]
    InvalidName { field: NameField, value: String },
    #[error("Please choose a valid option! ({0:?} is not on the menu)")]
    InvalidSelection(String),
}

impl RegistrationError {
    /// Category name shown in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationError::FileNotFound(_) => "FileNotFound",
            RegistrationError::Read { .. } => "ReadError",
            RegistrationError::Parse { .. } => "ParseError",
            RegistrationError::Serialize(_) => "SerializeError",
            RegistrationError::Write { .. } => "WriteError",
            RegistrationError::InvalidName { .. } => "ValidationError",
            RegistrationError::InvalidSelection(_) => "SelectionError",
        }
    }

    /// Static explanation of the error category.
    pub fn explanation(&self) -> &'static str {
        match self {
            RegistrationError::FileNotFound(_) => "The requested file does not exist.",
            RegistrationError::Read { .. } => "The file exists but could not be read.",
            RegistrationError::Parse { .. } => {
                "The file contents are not a JSON array of registrations."
            }
            RegistrationError::Serialize(_) => "The data could not be converted to JSON.",
            RegistrationError::Write { .. } => "The file could not be written.",
            RegistrationError::InvalidName { .. } => {
                "Names must be non-empty and made of letters only."
            }
            RegistrationError::InvalidSelection(_) => "Menu choices are 1, 2, 3 or 4.",
        }
    }
}
