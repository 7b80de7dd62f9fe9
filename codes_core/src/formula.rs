//! # Formula Contract
//!
//! Every clause in the catalog is a struct that validates its inputs in
//! `new`, evaluates the equation once, and keeps the result next to the
//! inputs. The struct then stands in for its result: it compares equal to,
//! orders against, formats like, and converts into the stored `f64` (or
//! `bool` for checks).
//!
//! ```rust
//! use codes_core::eurocode::en_1992_1_1_2004::ultimate_limit_state::ColumnHeadExternalContourRadius;
//! use codes_core::formula::Formula;
//!
//! let radius = ColumnHeadExternalContourRadius::new(500.0, 1000.0, 300.0).unwrap();
//! assert_eq!(radius, 2150.0);
//! assert_eq!(format!("{radius:.1}"), "2150.0");
//! assert_eq!(radius.latex().short(), r"r_{cont,ext} = 2150.000 \ mm");
//! ```

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::documents::SourceDocument;
use crate::latex::LatexFormula;
use crate::settings::RenderSettings;

/// What a formula produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputKind {
    /// A numeric quantity
    Numeric,
    /// A pass/fail verdict
    Check,
}

/// Result types a formula may produce.
pub trait FormulaOutput: Copy + fmt::Display + fmt::Debug {
    const KIND: OutputKind;
}

impl FormulaOutput for f64 {
    const KIND: OutputKind = OutputKind::Numeric;
}

impl FormulaOutput for bool {
    const KIND: OutputKind = OutputKind::Check;
}

/// One equation from one code edition.
pub trait Formula {
    /// `f64` for quantities, `bool` for checks
    type Output: FormulaOutput;

    /// Clause or equation identifier within the source document (e.g. "6.36")
    const LABEL: &'static str;

    /// Edition the equation is taken from
    const SOURCE_DOCUMENT: SourceDocument;

    /// Human-readable name of the computed quantity
    const NAME: &'static str;

    /// Decimals used by [`latex`](Self::latex)
    const DEFAULT_DECIMALS: usize = 3;

    /// The value computed at construction
    fn result(&self) -> Self::Output;

    /// Render with every value printed to `n` decimals.
    fn latex_with_decimals(&self, n: usize) -> LatexFormula;

    /// Render with the formula's default precision.
    fn latex(&self) -> LatexFormula {
        self.latex_with_decimals(Self::DEFAULT_DECIMALS)
    }

    /// Render according to report settings.
    fn latex_with(&self, settings: &RenderSettings) -> LatexFormula {
        let mut latex = self.latex_with_decimals(settings.decimals_or(Self::DEFAULT_DECIMALS));
        if !settings.show_unit {
            latex.unit.clear();
        }
        latex
    }

    /// Complete rendering according to report settings.
    fn render(&self, settings: &RenderSettings) -> String {
        let latex = self.latex_with(settings);
        if settings.with_units {
            latex.complete_with_units()
        } else {
            latex.complete()
        }
    }

    /// Citation of the clause, e.g. "EN 1992-1-1:2004 (6.36)"
    fn citation(&self) -> String {
        Self::SOURCE_DOCUMENT.citation(Self::LABEL)
    }

    /// Emit a trace event for a freshly evaluated formula and pass it through.
    fn traced(self) -> Self
    where
        Self: Sized,
    {
        trace!(
            label = Self::LABEL,
            document = Self::SOURCE_DOCUMENT.designation(),
            result = %self.result(),
            "evaluated formula"
        );
        self
    }
}

// ============================================================================
// Result Delegation (macros to reduce boilerplate)
// ============================================================================

/// Make a numeric formula behave as its `f64` result.
macro_rules! impl_scalar_formula {
    ($($type:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $type {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&$crate::formula::Formula::result(self), f)
                }
            }

            impl PartialEq<f64> for $type {
                fn eq(&self, other: &f64) -> bool {
                    $crate::formula::Formula::result(self) == *other
                }
            }

            impl PartialOrd<f64> for $type {
                fn partial_cmp(&self, other: &f64) -> Option<::std::cmp::Ordering> {
                    $crate::formula::Formula::result(self).partial_cmp(other)
                }
            }

            impl From<$type> for f64 {
                fn from(formula: $type) -> f64 {
                    $crate::formula::Formula::result(&formula)
                }
            }

            impl From<&$type> for f64 {
                fn from(formula: &$type) -> f64 {
                    $crate::formula::Formula::result(formula)
                }
            }
        )+
    };
}

/// Make a check formula behave as its `bool` verdict.
macro_rules! impl_check_formula {
    ($($type:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $type {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&$crate::formula::Formula::result(self), f)
                }
            }

            impl PartialEq<bool> for $type {
                fn eq(&self, other: &bool) -> bool {
                    $crate::formula::Formula::result(self) == *other
                }
            }

            impl From<$type> for bool {
                fn from(formula: $type) -> bool {
                    $crate::formula::Formula::result(&formula)
                }
            }

            impl From<&$type> for bool {
                fn from(formula: &$type) -> bool {
                    $crate::formula::Formula::result(formula)
                }
            }
        )+
    };
}

/// Implement [`Formula`] for a newtype around a formula that a later edition
/// carries over unchanged. Everything but the source document is delegated.
macro_rules! impl_reissued_formula {
    ($type:ty => $inner:ty, $doc:expr) => {
        impl $crate::formula::Formula for $type {
            type Output = <$inner as $crate::formula::Formula>::Output;
            const LABEL: &'static str = <$inner as $crate::formula::Formula>::LABEL;
            const SOURCE_DOCUMENT: $crate::documents::SourceDocument = $doc;
            const NAME: &'static str = <$inner as $crate::formula::Formula>::NAME;
            const DEFAULT_DECIMALS: usize = <$inner as $crate::formula::Formula>::DEFAULT_DECIMALS;

            fn result(&self) -> Self::Output {
                $crate::formula::Formula::result(&self.0)
            }

            fn latex_with_decimals(&self, n: usize) -> $crate::latex::LatexFormula {
                $crate::formula::Formula::latex_with_decimals(&self.0, n)
            }
        }
    };
}

pub(crate) use impl_check_formula;
pub(crate) use impl_reissued_formula;
pub(crate) use impl_scalar_formula;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcResult;
    use crate::latex::{check_verdict, fmt_n, TO};
    use crate::validation::ensure_non_negative;

    #[derive(Debug, Clone, Serialize)]
    struct Doubling {
        x: f64,
        result: f64,
    }

    impl Doubling {
        fn new(x: f64) -> CalcResult<Self> {
            ensure_non_negative(&[("x", x)])?;
            Ok(Doubling { x, result: 2.0 * x }.traced())
        }
    }

    impl Formula for Doubling {
        type Output = f64;
        const LABEL: &'static str = "0.1";
        const SOURCE_DOCUMENT: SourceDocument = SourceDocument::Cur228;
        const NAME: &'static str = "Doubling";

        fn result(&self) -> f64 {
            self.result
        }

        fn latex_with_decimals(&self, n: usize) -> LatexFormula {
            LatexFormula::new("y", fmt_n(self.result, n), r"2 \cdot x", format!(r"2 \cdot {}", fmt_n(self.x, n)), "=")
                .with_unit("mm")
                .with_numeric_equation_with_units(format!(r"2 \cdot {} \ mm", fmt_n(self.x, n)))
        }
    }

    impl_scalar_formula!(Doubling);

    #[derive(Debug, Clone, Serialize)]
    struct Positive {
        x: f64,
        result: bool,
    }

    impl Formula for Positive {
        type Output = bool;
        const LABEL: &'static str = "0.2";
        const SOURCE_DOCUMENT: SourceDocument = SourceDocument::Cur228;
        const NAME: &'static str = "Positive";

        fn result(&self) -> bool {
            self.result
        }

        fn latex_with_decimals(&self, n: usize) -> LatexFormula {
            LatexFormula::new("CHECK", check_verdict(self.result), "x > 0", format!("{} > 0", fmt_n(self.x, n)), TO)
        }
    }

    impl_check_formula!(Positive);

    #[test]
    fn test_scalar_delegation() {
        let y = Doubling::new(2.5).unwrap();
        assert_eq!(y, 5.0);
        assert!(y > 4.0);
        assert_eq!(y.to_string(), "5");
        assert_eq!(format!("{y:.2}"), "5.00");
        let value: f64 = y.into();
        assert_eq!(value, 5.0);
    }

    #[test]
    fn test_validation_runs_at_construction() {
        assert!(Doubling::new(-1.0).is_err());
    }

    #[test]
    fn test_check_delegation() {
        let check = Positive { x: 1.0, result: true };
        assert_eq!(check, true);
        assert_eq!(check.to_string(), "true");
        assert_eq!(check.latex().complete(), r"CHECK \to x > 0 \to 1.000 > 0 \to OK");
        assert!(bool::from(&check));
    }

    #[test]
    fn test_render_settings() {
        let y = Doubling::new(2.5).unwrap();
        assert_eq!(y.render(&RenderSettings::default()), r"y = 2 \cdot x = 2 \cdot 2.500 = 5.000 \ mm");

        let settings = RenderSettings {
            decimals: Some(1),
            with_units: true,
            show_unit: false,
        };
        assert_eq!(y.render(&settings), r"y = 2 \cdot x = 2 \cdot 2.5 \ mm = 5.0");
    }

    #[test]
    fn test_citation_and_kind() {
        let y = Doubling::new(1.0).unwrap();
        assert_eq!(y.citation(), "CUR 228 (0.1)");
        assert_eq!(<<Doubling as Formula>::Output as FormulaOutput>::KIND, OutputKind::Numeric);
        assert_eq!(<<Positive as Formula>::Output as FormulaOutput>::KIND, OutputKind::Check);
    }
}
