//! # Error Types
//!
//! Structured error types for codes_core. Every formula validates its inputs
//! when it is constructed, so these are the only failures a caller sees.
//!
//! ## Example
//!
//! ```rust
//! use codes_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(d: f64) -> CalcResult<()> {
//!     if d < 0.0 {
//!         return Err(CalcError::negative_value("d", d));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_depth(-1.0).unwrap_err().error_code(), "NEGATIVE_VALUE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for codes_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for formula construction.
///
/// Each variant names the offending input so callers can point the user at
/// the field that needs fixing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input must be zero or positive
    #[error("Invalid value for '{field}': {value}. Value must be non-negative")]
    NegativeValue { field: String, value: f64 },

    /// Input must be strictly positive
    #[error("Invalid value for '{field}': {value}. Value must be greater than zero")]
    LessOrEqualToZero { field: String, value: f64 },

    /// Angle exceeds 90 degrees
    #[error("Invalid value for '{field}': {value}. Value must be less than or equal to 90 degrees")]
    GreaterThan90 { field: String, value: f64 },

    /// Paired list inputs have different lengths
    #[error("Lists '{first}' ({first_len}) and '{second}' ({second_len}) must have the same length")]
    ListLengthMismatch {
        first: String,
        first_len: usize,
        second: String,
        second_len: usize,
    },

    /// An input value is invalid for a reason other than its sign
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A categorical input does not name a known option
    #[error("Unknown {kind}: '{value}'")]
    UnknownCategory { kind: String, value: String },

    /// A LaTeX template does not contain a symbol to substitute
    #[error("Symbol '{symbol}' not found in the template.")]
    SymbolNotFound { symbol: String },

    /// A LaTeX template contains a symbol more than once where one was expected
    #[error("Symbol '{symbol}' found multiple times in the template.")]
    SymbolNotUnique { symbol: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a NegativeValue error
    pub fn negative_value(field: impl Into<String>, value: f64) -> Self {
        CalcError::NegativeValue {
            field: field.into(),
            value,
        }
    }

    /// Create a LessOrEqualToZero error
    pub fn less_or_equal_to_zero(field: impl Into<String>, value: f64) -> Self {
        CalcError::LessOrEqualToZero {
            field: field.into(),
            value,
        }
    }

    /// Create a GreaterThan90 error
    pub fn greater_than_90(field: impl Into<String>, value: f64) -> Self {
        CalcError::GreaterThan90 {
            field: field.into(),
            value,
        }
    }

    /// Create a ListLengthMismatch error
    pub fn list_length_mismatch(
        first: impl Into<String>,
        first_len: usize,
        second: impl Into<String>,
        second_len: usize,
    ) -> Self {
        CalcError::ListLengthMismatch {
            first: first.into(),
            first_len,
            second: second.into(),
            second_len,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(kind: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownCategory {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Name of the input that caused the error, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::NegativeValue { field, .. }
            | CalcError::LessOrEqualToZero { field, .. }
            | CalcError::GreaterThan90 { field, .. }
            | CalcError::InvalidInput { field, .. } => Some(field),
            CalcError::ListLengthMismatch { first, .. } => Some(first),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NegativeValue { .. } => "NEGATIVE_VALUE",
            CalcError::LessOrEqualToZero { .. } => "LESS_OR_EQUAL_TO_ZERO",
            CalcError::GreaterThan90 { .. } => "GREATER_THAN_90",
            CalcError::ListLengthMismatch { .. } => "LIST_LENGTH_MISMATCH",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::SymbolNotFound { .. } => "SYMBOL_NOT_FOUND",
            CalcError::SymbolNotUnique { .. } => "SYMBOL_NOT_UNIQUE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::negative_value("d", -5.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NegativeValue\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::less_or_equal_to_zero("l", 0.0).error_code(), "LESS_OR_EQUAL_TO_ZERO");
        assert_eq!(CalcError::greater_than_90("alpha", 95.0).error_code(), "GREATER_THAN_90");
        assert_eq!(CalcError::unknown_category("cement class", "X").error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_symbol_messages() {
        let err = CalcError::SymbolNotFound { symbol: "C".to_string() };
        assert_eq!(err.to_string(), "Symbol 'C' not found in the template.");
        let err = CalcError::SymbolNotUnique { symbol: "A".to_string() };
        assert_eq!(err.to_string(), "Symbol 'A' found multiple times in the template.");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(CalcError::negative_value("c", -1.0).field(), Some("c"));
        assert_eq!(CalcError::list_length_mismatch("j", 2, "delta_sigma", 3).field(), Some("j"));
        assert_eq!(CalcError::SymbolNotFound { symbol: "x".into() }.field(), None);
    }
}
