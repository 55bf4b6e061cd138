//! Form translation error types.

use thiserror::Error;

/// Raised while translating form text into a write payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FormError {
    #[error("required field '{field}' is empty")]
    MissingField { field: &'static str },

    #[error("field '{field}' expects a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field '{field}' does not reference a known record")]
    InvalidReference { field: &'static str, value: String },

    #[error("unknown form field '{field}'")]
    UnknownField { field: String },
}

impl FormError {
    /// Creates missing field error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates invalid number error.
    #[must_use]
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Creates invalid reference error.
    #[must_use]
    pub fn invalid_reference(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidReference {
            field,
            value: value.into(),
        }
    }

    /// Returns the offending field key, if known.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidReference { field, .. } => *field,
            Self::UnknownField { field } => field.as_str(),
        }
    }
}
