//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction, wizard
//! commands, and contract checks, so the engine and player never have to
//! fall back to String or anyhow for domain failures.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An operation was invoked on a state that does not satisfy its precondition
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric field outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a wizard command would break an invariant:
    /// - A wing is selected without a core type
    /// - A goal slot index is out of bounds
    /// - An hour budget is not on a half-hour step
    ///
    /// # Example
    /// ```ignore
    /// if slot >= GOAL_SLOTS {
    ///     return Err(DomainError::validation(format!("goal slot {slot} does not exist")));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid state error (caller skipped a required check)
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(field: &'static str, min: f32, max: f32, value: f32) -> Self {
        Self::OutOfRange {
            field,
            min,
            max,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("wing requires a core type");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: wing requires a core type"
        );
    }

    #[test]
    fn test_invalid_state_error() {
        let err = DomainError::invalid_state("objectives step incomplete");
        assert!(matches!(err, DomainError::InvalidState(_)));
        assert!(err.to_string().contains("objectives"));
    }

    #[test]
    fn test_out_of_range_error() {
        let err = DomainError::out_of_range("weekday hours", 0.5, 5.0, 7.0);
        assert_eq!(
            err.to_string(),
            "weekday hours must be between 0.5 and 5, got 7"
        );
    }
}
