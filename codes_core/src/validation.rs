//! # Input Validation
//!
//! Guard functions shared by every formula. Each takes a slice of named
//! inputs and fails on the first one that violates the precondition, in the
//! order given. Nothing is logged or mutated on success.
//!
//! ```rust
//! use codes_core::validation::ensure_non_negative;
//!
//! assert!(ensure_non_negative(&[("d", 500.0), ("c", 300.0)]).is_ok());
//! assert!(ensure_non_negative(&[("d", 500.0), ("c", -1.0)]).is_err());
//! ```

use tracing::trace;

use crate::errors::{CalcError, CalcResult};

/// Reject any input below zero.
pub fn ensure_non_negative(values: &[(&str, f64)]) -> CalcResult<()> {
    for &(field, value) in values {
        if value < 0.0 {
            trace!(field, value, "rejected negative input");
            return Err(CalcError::negative_value(field, value));
        }
    }
    Ok(())
}

/// Reject any input that is zero or below.
pub fn ensure_positive(values: &[(&str, f64)]) -> CalcResult<()> {
    for &(field, value) in values {
        if value <= 0.0 {
            trace!(field, value, "rejected non-positive input");
            return Err(CalcError::less_or_equal_to_zero(field, value));
        }
    }
    Ok(())
}

/// Reject any angle above 90 degrees.
pub fn ensure_at_most_90_degrees(values: &[(&str, f64)]) -> CalcResult<()> {
    for &(field, value) in values {
        if value > 90.0 {
            trace!(field, value, "rejected angle above 90 degrees");
            return Err(CalcError::greater_than_90(field, value));
        }
    }
    Ok(())
}

/// Reject paired list inputs whose lengths differ.
pub fn ensure_same_length(first: (&str, &[f64]), second: (&str, &[f64])) -> CalcResult<()> {
    if first.1.len() != second.1.len() {
        return Err(CalcError::list_length_mismatch(first.0, first.1.len(), second.0, second.1.len()));
    }
    Ok(())
}

/// Reject list inputs containing a value below zero.
///
/// The offending element is reported as `name[index]`.
pub fn ensure_non_negative_list(field: &str, values: &[f64]) -> CalcResult<()> {
    match values.iter().position(|v| *v < 0.0) {
        Some(index) => Err(CalcError::negative_value(format!("{field}[{index}]"), values[index])),
        None => Ok(()),
    }
}
