//! # Render Settings
//!
//! Caller-side configuration for LaTeX output. Every formula carries its own
//! default precision; a report can override it globally and choose whether
//! units are printed.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "decimals": 2,
//!   "with_units": true,
//!   "show_unit": true
//! }
//! ```
//!
//! Missing keys fall back to [`RenderSettings::default`].

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Options applied when a formula renders itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Number of decimals for every value, overriding the formula default
    pub decimals: Option<usize>,

    /// Prefer the substitution that shows units next to each value
    pub with_units: bool,

    /// Print the unit after the result
    pub show_unit: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            decimals: None,
            with_units: false,
            show_unit: true,
        }
    }
}

impl RenderSettings {
    /// Settings with a fixed number of decimals.
    pub fn with_decimals(decimals: usize) -> Self {
        RenderSettings {
            decimals: Some(decimals),
            ..Default::default()
        }
    }

    /// Parse settings from JSON.
    ///
    /// ```rust
    /// use codes_core::settings::RenderSettings;
    ///
    /// let settings = RenderSettings::from_json(r#"{"decimals": 1}"#).unwrap();
    /// assert_eq!(settings.decimals, Some(1));
    /// assert!(settings.show_unit);
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decimals to use for a formula whose own default is `default`.
    pub fn decimals_or(&self, default: usize) -> usize {
        self.decimals.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.decimals_or(3), 3);
        assert!(!settings.with_units);
        assert!(settings.show_unit);
    }

    #[test]
    fn test_override() {
        assert_eq!(RenderSettings::with_decimals(1).decimals_or(3), 1);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = RenderSettings::from_json(r#"{"with_units": true}"#).unwrap();
        assert!(settings.with_units);
        assert_eq!(settings.decimals, None);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RenderSettings::from_json("{decimals: two}").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
