//! Core types and errors for the consistency checker.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during a check.
#[derive(Error, Debug)]
pub enum AuthlintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuthlintError>;

/// The credential field a side of the system expects or sends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldLabel {
    /// The side uses the `email` key.
    Email,
    /// The side uses the `username` key.
    Username,
    /// The relevant region was not found, or neither key appears in it.
    Unknown,
}

impl FieldLabel {
    /// Lowercase name as it appears in the output line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Email => "email",
            FieldLabel::Username => "username",
            FieldLabel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one consistency check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Field the backend login handler reads from the request body.
    pub backend_field: FieldLabel,
    /// Field the frontend sends in the login request payload.
    pub frontend_field: FieldLabel,
    /// Whether both sides resolved to the same label.
    pub consistent: bool,
}

impl CheckReport {
    /// Build a report from the two extracted labels.
    ///
    /// Consistency is plain label equality, so two `Unknown` sides are
    /// reported as consistent even though nothing was actually verified.
    pub fn new(backend_field: FieldLabel, frontend_field: FieldLabel) -> Self {
        Self {
            backend_field,
            frontend_field,
            consistent: backend_field == frontend_field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(FieldLabel::Email.to_string(), "email");
        assert_eq!(FieldLabel::Username.to_string(), "username");
        assert_eq!(FieldLabel::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_report_consistency() {
        assert!(CheckReport::new(FieldLabel::Email, FieldLabel::Email).consistent);
        assert!(!CheckReport::new(FieldLabel::Username, FieldLabel::Email).consistent);
        // Two unresolved sides still compare equal.
        assert!(CheckReport::new(FieldLabel::Unknown, FieldLabel::Unknown).consistent);
    }

    #[test]
    fn test_report_json_shape() {
        let report = CheckReport::new(FieldLabel::Username, FieldLabel::Email);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["backend_field"], "username");
        assert_eq!(json["frontend_field"], "email");
        assert_eq!(json["consistent"], false);
    }
}
