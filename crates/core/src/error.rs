//! Domain error model.

use thiserror::Error;

/// Result type used at domain boundaries.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic failures raised where user input enters the domain.
///
/// The packing list itself never fails; these come from the layers that build
/// its inputs (forms, id parsing, criterion parsing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty description).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A number fell outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(field: &'static str, min: i64, max: i64, actual: i64) -> Self {
        Self::OutOfRange {
            field,
            min,
            max,
            actual,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_field_and_bounds() {
        let err = DomainError::out_of_range("quantity", 1, 20, 21);
        assert_eq!(err.to_string(), "quantity must be between 1 and 20, got 21");
    }
}
