//! # LaTeX Rendering
//!
//! Every formula renders itself as a [`LatexFormula`]: the symbolic equation,
//! the same equation with the inputs substituted, and the result. The helpers
//! below build the recurring pieces (fractions, min/max braces) and perform
//! symbol substitution on equation templates.
//!
//! ## Example
//!
//! ```rust
//! use codes_core::latex::LatexFormula;
//!
//! let formula = LatexFormula::new("E", "500", "mc^2", "5*10^2", "=");
//! assert_eq!(formula.complete(), "E = mc^2 = 5*10^2 = 500");
//! assert_eq!(formula.short(), "E = 500");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Operator placed between the parts of an algebraic formula.
pub const EQUALS: &str = "=";

/// Operator used by lookups and categorical sub-formulas.
pub const RIGHTARROW: &str = r"\rightarrow";

/// Operator used by checks, leading to the OK / Not OK verdict.
pub const TO: &str = r"\to";

/// Result text of a satisfied check.
pub const CHECK_OK: &str = "OK";

/// Result text of a failed check.
pub const CHECK_NOT_OK: &str = r"\text{Not OK}";

/// Three-part typeset rendering of one formula evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexFormula {
    /// Symbol of the computed quantity (e.g. `r_{cont,ext}`)
    pub return_symbol: String,
    /// Result, already formatted with the requested precision
    pub result: String,
    /// Symbolic equation
    pub equation: String,
    /// Equation with the input values substituted
    pub numeric_equation: String,
    /// Operator joining the parts (`=`, `\rightarrow`, `\to`)
    pub comparison_operator_label: String,
    /// Unit of the result, empty when dimensionless or not stated
    #[serde(default)]
    pub unit: String,
    /// Substituted equation with units next to every value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_equation_with_units: Option<String>,
}

impl LatexFormula {
    pub fn new(
        return_symbol: impl Into<String>,
        result: impl Into<String>,
        equation: impl Into<String>,
        numeric_equation: impl Into<String>,
        comparison_operator_label: impl Into<String>,
    ) -> Self {
        LatexFormula {
            return_symbol: return_symbol.into(),
            result: result.into(),
            equation: equation.into(),
            numeric_equation: numeric_equation.into(),
            comparison_operator_label: comparison_operator_label.into(),
            unit: String::new(),
            numeric_equation_with_units: None,
        }
    }

    /// Attach the unit of the result.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Attach a substituted equation that carries units.
    pub fn with_numeric_equation_with_units(mut self, numeric: impl Into<String>) -> Self {
        self.numeric_equation_with_units = Some(numeric.into());
        self
    }

    fn unit_suffix(&self) -> String {
        if self.unit.is_empty() {
            String::new()
        } else {
            format!(r" \ {}", self.unit)
        }
    }

    fn join(&self, numeric: &str) -> String {
        let separator = format!(" {} ", self.comparison_operator_label);
        let parts: Vec<&str> = [self.return_symbol.as_str(), &self.equation, numeric, &self.result]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        format!("{}{}", parts.join(&separator), self.unit_suffix())
    }

    /// `symbol op equation op numeric op result unit`
    ///
    /// Empty parts are left out together with their operator.
    pub fn complete(&self) -> String {
        self.join(&self.numeric_equation)
    }

    /// Like [`complete`](Self::complete) but with the unit-carrying substitution
    /// when one is available.
    pub fn complete_with_units(&self) -> String {
        match &self.numeric_equation_with_units {
            Some(numeric) => self.join(numeric),
            None => self.complete(),
        }
    }

    /// `symbol op result unit`
    pub fn short(&self) -> String {
        if self.return_symbol.is_empty() {
            return format!("{}{}", self.result, self.unit_suffix());
        }
        format!(
            "{} {} {}{}",
            self.return_symbol,
            self.comparison_operator_label,
            self.result,
            self.unit_suffix()
        )
    }
}

impl fmt::Display for LatexFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Substitute symbols in a LaTeX template, in order.
///
/// Every replacement applies to the output of the previous one. With
/// `unique_check` each symbol must occur exactly once in the template.
///
/// ```rust
/// use codes_core::latex::latex_replace_symbols;
///
/// let out = latex_replace_symbols(
///     r"\frac{k_{mod}}{\gamma_{R}}",
///     &[("k_{mod}", "0.9"), (r"\gamma_{R}", "1.2")],
///     false,
/// ).unwrap();
/// assert_eq!(out, r"\frac{0.9}{1.2}");
/// ```
pub fn latex_replace_symbols<S: AsRef<str>>(
    template: &str,
    replacements: &[(&str, S)],
    unique_check: bool,
) -> CalcResult<String> {
    if unique_check {
        for (symbol, _) in replacements {
            match template.matches(symbol).count() {
                0 => return Err(CalcError::SymbolNotFound { symbol: symbol.to_string() }),
                1 => {}
                _ => return Err(CalcError::SymbolNotUnique { symbol: symbol.to_string() }),
            }
        }
    }
    Ok(replace_symbols(template, replacements))
}

/// Infallible substitution used by the formulas themselves, whose templates
/// are fixed at compile time.
pub fn replace_symbols<S: AsRef<str>>(template: &str, replacements: &[(&str, S)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |acc, (symbol, value)| acc.replace(symbol, value.as_ref()))
}

/// `\frac{numerator}{denominator}`
pub fn latex_fraction(numerator: impl fmt::Display, denominator: impl fmt::Display) -> String {
    format!(r"\frac{{{numerator}}}{{{denominator}}}")
}

/// `\max \left\{a; b; ...\right\}`
pub fn latex_max_curly_brackets<S: AsRef<str>>(args: &[S]) -> String {
    curly_brackets(r"\max", args)
}

/// `\min \left\{a; b; ...\right\}`
pub fn latex_min_curly_brackets<S: AsRef<str>>(args: &[S]) -> String {
    curly_brackets(r"\min", args)
}

fn curly_brackets<S: AsRef<str>>(operator: &str, args: &[S]) -> String {
    let inner: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    format!(r"{operator} \left\{{{}\right\}}", inner.join("; "))
}

/// Format a value with a fixed number of decimals.
#[inline]
pub fn fmt_n(value: f64, n: usize) -> String {
    format!("{value:.n$}")
}

/// Verdict text for a check result.
#[inline]
pub fn check_verdict(passed: bool) -> &'static str {
    if passed {
        CHECK_OK
    } else {
        CHECK_NOT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> LatexFormula {
        LatexFormula::new("E", "500", "mc^2", "5*10^2", "=")
    }

    #[test]
    fn test_short() {
        assert_eq!(sample().short(), "E = 500");
    }

    #[test]
    fn test_complete() {
        assert_eq!(sample().complete(), "E = mc^2 = 5*10^2 = 500");
    }

    #[test]
    fn test_display_matches_complete() {
        assert_eq!(sample().to_string(), "E = mc^2 = 5*10^2 = 500");
    }

    #[test]
    fn test_unit_suffix() {
        let formula = sample().with_unit("J");
        assert_eq!(formula.short(), r"E = 500 \ J");
        assert_eq!(formula.complete(), r"E = mc^2 = 5*10^2 = 500 \ J");
    }

    #[test]
    fn test_empty_numeric_equation_is_skipped() {
        let formula = LatexFormula::new("s", "0.20", "", "", RIGHTARROW);
        assert_eq!(formula.complete(), r"s \rightarrow 0.20");
    }

    #[test]
    fn test_complete_with_units() {
        let formula = LatexFormula::new("F", "6", "m \\cdot a", "2 \\cdot 3", "=")
            .with_unit("N")
            .with_numeric_equation_with_units(r"2 \, kg \cdot 3 \, m/s^2");
        assert_eq!(formula.complete_with_units(), r"F = m \cdot a = 2 \, kg \cdot 3 \, m/s^2 = 6 \ N");
        assert_eq!(sample().complete_with_units(), sample().complete());
    }

    #[test]
    fn test_replace_symbols_success() {
        let cases = [(true, r"\frac{x}{y}"), (false, r"\frac{x}{y}")];
        for (unique, expected) in cases {
            let out = latex_replace_symbols(r"\frac{A}{B}", &[("A", "x"), ("B", "y")], unique).unwrap();
            assert_eq!(out, expected);
        }
        let out = latex_replace_symbols(
            r"\frac{k_{mod}}{\gamma_{R}}",
            &[("k_{mod}", "0.9"), (r"\gamma_{R}", "1.2")],
            false,
        )
        .unwrap();
        assert_eq!(out, r"\frac{0.9}{1.2}");
    }

    #[test]
    fn test_replace_symbols_errors() {
        let err = latex_replace_symbols(r"\frac{A}{B}", &[("C", "x")], true).unwrap_err();
        assert_eq!(err.to_string(), "Symbol 'C' not found in the template.");

        let err = latex_replace_symbols(r"\frac{A}{A}", &[("A", "x")], true).unwrap_err();
        assert_eq!(err.to_string(), "Symbol 'A' found multiple times in the template.");

        // Without the check a repeated symbol is replaced everywhere
        let out = latex_replace_symbols(r"\frac{A}{A}", &[("A", "x")], false).unwrap();
        assert_eq!(out, r"\frac{x}{x}");
    }

    #[test]
    fn test_fraction_and_brackets() {
        assert_eq!(latex_fraction("a", 2), r"\frac{a}{2}");
        assert_eq!(latex_max_curly_brackets(&["a", "b", "c"]), r"\max \left\{a; b; c\right\}");
        assert_eq!(latex_min_curly_brackets(&["1", "2"]), r"\min \left\{1; 2\right\}");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["return_symbol"], "E");
        assert!(json.get("numeric_equation_with_units").is_none());
    }
}
