//! # Chapter 7: Serviceability Limit States
//!
//! Crack control coefficients of EN 1992-1-1:2004 section 7.3.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, replace_symbols, LatexFormula, EQUALS};
use crate::units::{Dimensionless, Kn, Mm, Mm2, Mpa, KN_TO_N};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

/// Coefficient k_c for flanges of tubular cross-sections and T-sections, formula 7.3.
///
/// # Formula
/// k_c = max(0.9 · F_cr / (A_ct · f_ct,eff); 0.5)
#[derive(Debug, Clone, Serialize)]
pub struct CoefficientKcFlanges {
    f_cr: Kn,
    a_ct: Mm2,
    f_ct_eff: Mpa,
    result: Dimensionless,
}

impl CoefficientKcFlanges {
    /// # Arguments
    /// * `f_cr` - Tensile force in the flange just before cracking; only its magnitude is used (kN)
    /// * `a_ct` - Area of concrete within the tension zone (mm²)
    /// * `f_ct_eff` - Mean tensile strength when the first cracks are expected (MPa)
    pub fn new(f_cr: Kn, a_ct: Mm2, f_ct_eff: Mpa) -> CalcResult<Self> {
        ensure_positive(&[("a_ct", a_ct), ("f_ct_eff", f_ct_eff)])?;
        let result = (0.9 * (f_cr.abs() * KN_TO_N / (a_ct * f_ct_eff))).max(0.5);
        Ok(Self { f_cr, a_ct, f_ct_eff, result }.traced())
    }
}

impl Formula for CoefficientKcFlanges {
    type Output = f64;
    const LABEL: &'static str = "7.3";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient k_c for flanges";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "k_c",
            fmt_n(self.result, n),
            r"\max\left(0.9 \cdot \frac{F_{cr}}{A_{ct} \cdot f_{ct,eff}}, 0.5\right)",
            format!(
                r"\max\left(0.9 \cdot \frac{{{}}}{{{} \cdot {}}}, 0.5\right)",
                fmt_n(self.f_cr, n),
                fmt_n(self.a_ct, n),
                fmt_n(self.f_ct_eff, n)
            ),
            EQUALS,
        )
        .with_unit("-")
    }
}

/// Adjusted ratio of bond strength ξ_1 of prestressing and reinforcing steel, formula 7.5.
///
/// When only prestressing steel controls cracking, ξ_1 = √ξ instead.
///
/// # Formula
/// ξ_1 = √(ξ · ⌀_s / ⌀_p)
#[derive(Debug, Clone, Serialize)]
pub struct AdjustedBondStrengthRatio {
    xi: Dimensionless,
    diam_s: Mm,
    diam_p: Mm,
    result: Dimensionless,
}

impl AdjustedBondStrengthRatio {
    /// # Arguments
    /// * `xi` - Ratio of bond strength of prestressing and reinforcing steel, table 6.2
    /// * `diam_s` - Largest bar diameter of reinforcing steel (mm)
    /// * `diam_p` - Equivalent diameter of the tendon (mm)
    pub fn new(xi: Dimensionless, diam_s: Mm, diam_p: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("xi", xi), ("diam_s", diam_s)])?;
        ensure_positive(&[("diam_p", diam_p)])?;
        let result = (xi * (diam_s / diam_p)).sqrt();
        Ok(Self { xi, diam_s, diam_p, result }.traced())
    }
}

impl Formula for AdjustedBondStrengthRatio {
    type Output = f64;
    const LABEL: &'static str = "7.5";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Adjusted ratio of bond strength";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\sqrt{\xi \cdot \left( \frac{⌀_s}{⌀_p} \right)}";
        let numeric = replace_symbols(
            equation,
            &[
                (r"\xi", fmt_n(self.xi, n)),
                ("⌀_s", fmt_n(self.diam_s, n)),
                ("⌀_p", fmt_n(self.diam_p, n)),
            ],
        );
        LatexFormula::new(r"\xi_1", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("-")
    }
}

impl_scalar_formula!(CoefficientKcFlanges, AdjustedBondStrengthRatio);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coefficient_kc_flanges() {
        let kc = CoefficientKcFlanges::new(300.0, 100000.0, 2.9).unwrap();
        assert!((kc.result() - 0.931034).abs() < 1e-6);
        assert_eq!(
            kc.latex().complete(),
            r"k_c = \max\left(0.9 \cdot \frac{F_{cr}}{A_{ct} \cdot f_{ct,eff}}, 0.5\right) = \max\left(0.9 \cdot \frac{300.000}{100000.000 \cdot 2.900}, 0.5\right) = 0.931 \ -"
        );
    }

    #[test]
    fn test_coefficient_kc_lower_bound_and_sign() {
        assert_eq!(CoefficientKcFlanges::new(150.0, 100000.0, 2.9).unwrap(), 0.5);
        let compression = CoefficientKcFlanges::new(-300.0, 100000.0, 2.9).unwrap();
        let tension = CoefficientKcFlanges::new(300.0, 100000.0, 2.9).unwrap();
        assert_eq!(compression.result(), tension.result());
        assert!(CoefficientKcFlanges::new(300.0, 0.0, 2.9).is_err());
        assert!(CoefficientKcFlanges::new(300.0, 100000.0, -2.9).is_err());
    }

    #[test]
    fn test_adjusted_bond_strength_ratio() {
        let xi_1 = AdjustedBondStrengthRatio::new(0.6, 16.0, 12.0).unwrap();
        assert!((xi_1.result() - 0.894427).abs() < 1e-6);
        assert_eq!(
            xi_1.latex_with_decimals(2).complete(),
            r"\xi_1 = \sqrt{\xi \cdot \left( \frac{⌀_s}{⌀_p} \right)} = \sqrt{0.60 \cdot \left( \frac{16.00}{12.00} \right)} = 0.89 \ -"
        );
        assert!(AdjustedBondStrengthRatio::new(0.6, 16.0, 0.0).is_err());
        assert_eq!(AdjustedBondStrengthRatio::new(-0.6, 16.0, 12.0).unwrap_err().field(), Some("xi"));
    }
}
