// Storage module: whole-file JSON load and save for the registration list.
// Every call opens, reads or rewrites and closes the file; there is no
// caching and no partial update.

use crate::error::RegistrationError;
use crate::model::Registration;
use crate::report::Console;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read `path` and parse it as a JSON array of registrations.
pub fn load(path: &Path) -> Result<Vec<Registration>, RegistrationError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            RegistrationError::FileNotFound(path.to_path_buf())
        } else {
            RegistrationError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let records: Vec<Registration> =
        serde_json::from_str(&raw).map_err(|source| RegistrationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} registrations from {}", records.len(), path.display());
    Ok(records)
}

/// Like [`load`], but a failure is reported on `console` and `fallback` is
/// handed back untouched.
pub fn load_or<W: Write>(
    console: &mut Console<W>,
    path: &Path,
    fallback: Vec<Registration>,
) -> Vec<Registration> {
    match load(path) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("load failed, keeping {} records: {}", fallback.len(), err);
            let message = match err {
                RegistrationError::FileNotFound(_) => {
                    "Please make sure the file you are trying to open exists!"
                }
                _ => "Unspecified error. Please try again.",
            };
            console.report_error(message, Some(&err));
            fallback
        }
    }
}

/// Overwrite `path` with `records` as pretty-printed JSON (2-space indent).
/// The write is not atomic: a failed write may leave a truncated file.
pub fn save(path: &Path, records: &[Registration]) -> Result<(), RegistrationError> {
    let json = serde_json::to_string_pretty(records).map_err(RegistrationError::Serialize)?;
    fs::write(path, json).map_err(|source| RegistrationError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved {} registrations to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> Vec<Registration> {
        vec![
            Registration::new("Ann", "Lee", "History").unwrap(),
            Registration::new("Bob", "Ray", "Python 100").unwrap(),
        ]
    }

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn save_uses_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        save(&path, &sample()[..1]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw,
            "[\n  {\n    \"FirstName\": \"Ann\",\n    \"LastName\": \"Lee\",\n    \"CourseName\": \"History\"\n  }\n]"
        );
    }

    #[test]
    fn save_overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        save(&path, &sample()).unwrap();
        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RegistrationError::FileNotFound(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        fs::write(&path, r#"[{"FirstName": "Ann"}]"#).unwrap();
        assert!(matches!(
            load(&path).unwrap_err(),
            RegistrationError::Parse { .. }
        ));
    }

    #[test]
    fn load_or_returns_fallback_on_failure() {
        let dir = tempdir().unwrap();
        let mut console = Console::plain(Vec::new());
        let missing = dir.path().join("missing.json");
        assert_eq!(load_or(&mut console, &missing, sample()), sample());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "").unwrap();
        assert!(load_or(&mut console, &broken, Vec::new()).is_empty());
    }

    #[test]
    fn load_or_reports_missing_file() {
        let dir = tempdir().unwrap();
        let mut console = Console::plain(Vec::new());
        load_or(&mut console, &dir.path().join("missing.json"), Vec::new());
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.starts_with("Please make sure the file you are trying to open exists!\n"));
        assert!(text.contains("missing.json"));
        assert!(text.trim_end().ends_with("FileNotFound"));
    }

    #[test]
    fn load_or_reports_parse_failure_as_unspecified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        fs::write(&path, "not json").unwrap();
        let mut console = Console::plain(Vec::new());
        load_or(&mut console, &path, Vec::new());
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.starts_with("Unspecified error. Please try again.\n"));
        assert!(text.trim_end().ends_with("ParseError"));
    }

    #[test]
    fn load_or_is_silent_on_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        save(&path, &sample()).unwrap();
        let mut console = Console::plain(Vec::new());
        assert_eq!(load_or(&mut console, &path, Vec::new()), sample());
        assert!(console.into_inner().is_empty());
    }

    #[test]
    fn write_to_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let err = save(dir.path(), &sample()).unwrap_err();
        assert!(matches!(err, RegistrationError::Write { .. }));
    }
}
