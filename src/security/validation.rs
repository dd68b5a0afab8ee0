//! Request Validation Module
//!
//! Validates chat input before it reaches a session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// Maximum session id length
pub const MAX_SESSION_ID_LENGTH: usize = 64;

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Field '{field}' must not be empty")]
    Empty { field: String },

    #[error("Field '{field}' is too long (max: {max}, got: {got})")]
    TooLong {
        field: String,
        max: usize,
        got: usize,
    },

    #[error("Field '{field}' contains invalid characters: {chars}")]
    InvalidCharacters { field: String, chars: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::Empty { field } => field.as_str(),
            Self::TooLong { field, .. } => field.as_str(),
            Self::InvalidCharacters { field, .. } => field.as_str(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Chat input validator
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    /// Maximum message length in characters
    max_message_length: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(2000)
    }
}

impl RequestValidator {
    pub fn new(max_message_length: usize) -> Self {
        Self { max_message_length }
    }

    /// Reject empty, whitespace-only and oversized messages
    pub fn validate_message(&self, text: &str) -> ValidationResult<()> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "message".to_string(),
            });
        }

        let got = text.chars().count();
        if got > self.max_message_length {
            return Err(ValidationError::TooLong {
                field: "message".to_string(),
                max: self.max_message_length,
                got,
            });
        }

        Ok(())
    }

    /// Session ids are 1-64 chars of `[A-Za-z0-9_-]`
    pub fn validate_session_id(&self, id: &str) -> ValidationResult<()> {
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: "session_id".to_string(),
            });
        }

        if id.len() > MAX_SESSION_ID_LENGTH {
            return Err(ValidationError::TooLong {
                field: "session_id".to_string(),
                max: MAX_SESSION_ID_LENGTH,
                got: id.len(),
            });
        }

        let invalid: String = id
            .chars()
            .filter(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            .collect();
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidCharacters {
                field: "session_id".to_string(),
                chars: invalid,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn test_blank_message_rejected(#[case] text: &str) {
        let err = RequestValidator::default().validate_message(text).unwrap_err();
        assert_eq!(err.field(), "message");
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn test_message_length_counts_chars() {
        let validator = RequestValidator::new(5);
        assert!(validator.validate_message("jambo").is_ok());
        assert!(validator.validate_message("🇰🇪🇰🇪").is_ok());
        assert_eq!(
            validator.validate_message("habari"),
            Err(ValidationError::TooLong {
                field: "message".to_string(),
                max: 5,
                got: 6
            })
        );
    }

    #[rstest]
    #[case("default", true)]
    #[case("user_42-web", true)]
    #[case("", false)]
    #[case("bad id", false)]
    #[case("../etc", false)]
    fn test_session_id(#[case] id: &str, #[case] ok: bool) {
        assert_eq!(RequestValidator::default().validate_session_id(id).is_ok(), ok);
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = ValidationError::Empty {
            field: "message".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
