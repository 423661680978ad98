//! Validation errors raised locally, before any request leaves the process.
//!
//! The `Display` text of each variant is the message shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected by a form or selection check.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// Teacher or class selection left empty
    #[error("Please select both a teacher and a class.")]
    MissingSelection,

    /// Teacher selection is not an integer identifier
    #[error("Invalid teacher ID")]
    InvalidTeacherId {
        /// Raw selection value that failed to parse
        value: String,
    },

    /// Class selection is outside `Class 1`..`Class 10`
    #[error("Unknown class: {value}")]
    UnknownClass {
        /// Raw selection value
        value: String,
    },

    /// One or more of the six teacher fields is empty
    #[error("All fields are required: {}", missing.join(", "))]
    IncompleteForm {
        /// Names of the empty fields, in form order
        missing: Vec<String>,
    },

    /// Salary text is not a number
    #[error("Invalid salary: {value}")]
    InvalidSalary {
        /// Raw salary text
        value: String,
    },

    /// Save requested while no record is being edited
    #[error("No teacher is being edited")]
    NotEditing,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_selection_message() {
        assert_eq!(
            ValidationError::MissingSelection.to_string(),
            "Please select both a teacher and a class."
        );
    }

    #[test]
    fn test_incomplete_form_lists_fields() {
        let err = ValidationError::IncompleteForm {
            missing: vec!["email".to_string(), "salary".to_string()],
        };
        assert_eq!(err.to_string(), "All fields are required: email, salary");
    }

    #[test]
    fn test_error_serialization() {
        let err = ValidationError::InvalidTeacherId { value: "abc".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidTeacherId"));
        assert!(json.contains("abc"));

        let deserialized: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
