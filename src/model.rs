// Data model: a single registration record and the in-memory store the
// menu loop owns for the lifetime of the program.

use crate::error::{NameField, RegistrationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One student enrolled in one course. Field names on disk follow the
/// `Enrollments.json` layout (`FirstName`, `LastName`, `CourseName`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

impl Registration {
    /// Build a registration after validating both names. The course name
    /// is taken as-is.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_name(NameField::First, &first_name)?;
        validate_name(NameField::Last, &last_name)?;
        Ok(Registration {
            first_name,
            last_name,
            course_name: course_name.into(),
        })
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

/// A name is valid when it is non-empty and every character is alphabetic.
pub fn validate_name(field: NameField, value: &str) -> Result<(), RegistrationError> {
    if !value.is_empty() && value.chars().all(char::is_alphabetic) {
        Ok(())
    } else {
        Err(RegistrationError::InvalidName {
            field,
            value: value.to_string(),
        })
    }
}

/// Ordered, append-only collection of registrations. Duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationStore {
    records: Vec<Registration>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, registration: Registration) {
        self.records.push(registration);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Registration> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Registration] {
        &self.records
    }
}

impl From<Vec<Registration>> for RegistrationStore {
    fn from(records: Vec<Registration>) -> Self {
        RegistrationStore { records }
    }
}
