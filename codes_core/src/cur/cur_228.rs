//! # CUR 228: Design of Laterally Loaded Piles
//!
//! Modulus of horizontal subgrade reaction after Ménard, chapter 2.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS};
use crate::units::{Dimensionless, KnPerM3, Kpa, M};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::Cur228;

/// Reference radius R_0 separating formulas 2.21 and 2.22 (m)
pub const REFERENCE_RADIUS: M = 0.3;

/// Modulus of horizontal subgrade reaction for piles with a radius below
/// R_0 = 0.3 m.
///
/// # Formula
/// k_h = E_p / (2·R) · 18 / (4 · 2.65^α + 3α)
#[derive(Debug, Clone, Serialize)]
pub struct ModulusHorizontalSubgrade {
    r: M,
    e_p: Kpa,
    alpha: Dimensionless,
    result: KnPerM3,
}

impl ModulusHorizontalSubgrade {
    /// # Arguments
    /// * `r` - Pile radius, below [`REFERENCE_RADIUS`] (m)
    /// * `e_p` - Pressuremeter modulus (kPa)
    /// * `alpha` - Rheological soil factor
    pub fn new(r: M, e_p: Kpa, alpha: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("e_p", e_p)])?;
        ensure_positive(&[("r", r), ("alpha", alpha)])?;
        if r >= REFERENCE_RADIUS {
            return Err(CalcError::invalid_input(
                "r",
                r.to_string(),
                "radius is 0.3 m or larger, use formula 2.21 instead",
            ));
        }
        let result = e_p / 2.0 / r / ((4.0 * 2.65_f64.powf(alpha) + 3.0 * alpha) / 18.0);
        Ok(Self { r, e_p, alpha, result }.traced())
    }
}

impl Formula for ModulusHorizontalSubgrade {
    type Output = f64;
    const LABEL: &'static str = "2.22";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Modulus of horizontal subgrade reaction";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let alpha = fmt_n(self.alpha, n);
        LatexFormula::new(
            "k_{h}",
            fmt_n(self.result, n),
            r"\frac{E_{p}}{2 \cdot R} \cdot \frac{18}{4 \cdot 2.65^{\alpha} + 3 \alpha}",
            format!(
                r"\frac{{{}}}{{2 \cdot {}}} \cdot \frac{{18}}{{4 \cdot 2.65^{{{alpha}}} + 3 \cdot {alpha}}}",
                fmt_n(self.e_p, n),
                fmt_n(self.r, n)
            ),
            EQUALS,
        )
        .with_unit("kN/m^3")
    }
}

impl_scalar_formula!(ModulusHorizontalSubgrade);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modulus_horizontal_subgrade() {
        let k_h = ModulusHorizontalSubgrade::new(0.2, 10_000.0, 0.5).unwrap();
        assert!((k_h.result() - 56_169.058712).abs() < 1e-5);
        assert_eq!(
            k_h.latex().complete(),
            r"k_{h} = \frac{E_{p}}{2 \cdot R} \cdot \frac{18}{4 \cdot 2.65^{\alpha} + 3 \alpha} = \frac{10000.00}{2 \cdot 0.20} \cdot \frac{18}{4 \cdot 2.65^{0.50} + 3 \cdot 0.50} = 56169.06 \ kN/m^3"
        );
    }

    #[test]
    fn test_radius_limit() {
        assert_eq!(ModulusHorizontalSubgrade::new(0.3, 10_000.0, 0.5).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(ModulusHorizontalSubgrade::new(0.0, 10_000.0, 0.5).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
        assert_eq!(ModulusHorizontalSubgrade::new(0.2, -1.0, 0.5).unwrap_err().error_code(), "NEGATIVE_VALUE");
    }
}
