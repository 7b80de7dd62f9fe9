//! # Chapter 9: Detailing of Members and Particular Rules
//!
//! Beam, slab, column and footing detailing rules of NEN-EN 1992-1-1+C2:2011.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::eurocode::en_1992_1_1_2004::detailing_specific_rules as en_2004;
use crate::formula::{impl_reissued_formula, impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS};
use crate::units::{cot_deg, Deg, Kn, Mm, Mm2, Mpa};
use crate::validation::{ensure_at_most_90_degrees, ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

/// Minimum longitudinal tension reinforcement of beams (9.1N).
#[derive(Debug, Clone, Serialize)]
pub struct MinimumTensileReinforcementBeam(en_2004::MinimumTensileReinforcementBeam);

impl MinimumTensileReinforcementBeam {
    /// # Arguments
    /// * `f_ctm` - Mean axial tensile strength of concrete (MPa)
    /// * `f_yk` - Characteristic yield strength of reinforcement (MPa)
    /// * `b_t` - Mean width of the tension zone (mm)
    /// * `d` - Effective depth (mm)
    pub fn new(f_ctm: Mpa, f_yk: Mpa, b_t: Mm, d: Mm) -> CalcResult<Self> {
        Ok(Self(en_2004::MinimumTensileReinforcementBeam::new(f_ctm, f_yk, b_t, d)?))
    }
}

impl_reissued_formula!(MinimumTensileReinforcementBeam => en_2004::MinimumTensileReinforcementBeam, DOC);

/// Maximum longitudinal spacing of successive series of links in slabs,
/// art. 9.3.2(4).
///
/// # Formula
/// s_max = 0.75 · d · (1 + cot α)
#[derive(Debug, Clone, Serialize)]
pub struct MaximumSpacingSeriesOfLinks {
    d: Mm,
    alpha: Deg,
    result: Mm,
}

impl MaximumSpacingSeriesOfLinks {
    /// # Arguments
    /// * `d` - Effective depth of the slab (mm)
    /// * `alpha` - Inclination of the shear reinforcement (degrees)
    pub fn new(d: Mm, alpha: Deg) -> CalcResult<Self> {
        ensure_non_negative(&[("d", d)])?;
        ensure_positive(&[("alpha", alpha)])?;
        ensure_at_most_90_degrees(&[("alpha", alpha)])?;
        Ok(Self { d, alpha, result: 0.75 * d * (1.0 + cot_deg(alpha)) }.traced())
    }
}

impl Formula for MaximumSpacingSeriesOfLinks {
    type Output = f64;
    const LABEL: &'static str = "9.9";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Maximum spacing between series of links";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "s_{max}",
            fmt_n(self.result, n),
            r"0.75 \cdot d \cdot \left( 1 + cot(\alpha) \right)",
            format!(r"0.75 \cdot {} \cdot \left( 1 + cot({}) \right)", fmt_n(self.d, n), fmt_n(self.alpha, n)),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Minimum longitudinal reinforcement of columns (9.12N).
#[derive(Debug, Clone, Serialize)]
pub struct MinimumLongitudinalReinforcementColumn(en_2004::MinimumLongitudinalReinforcementColumn);

impl MinimumLongitudinalReinforcementColumn {
    /// # Arguments
    /// * `n_ed` - Design axial compression force (kN)
    /// * `f_yd` - Design yield strength of the reinforcement (MPa)
    /// * `a_c` - Area of the concrete cross-section (mm²)
    pub fn new(n_ed: Kn, f_yd: Mpa, a_c: Mm2) -> CalcResult<Self> {
        Ok(Self(en_2004::MinimumLongitudinalReinforcementColumn::new(n_ed, f_yd, a_c)?))
    }
}

impl_reissued_formula!(
    MinimumLongitudinalReinforcementColumn => en_2004::MinimumLongitudinalReinforcementColumn,
    DOC
);

/// Tensile force to be anchored in a footing (9.13).
#[derive(Debug, Clone, Serialize)]
pub struct FootingAnchorageForce(en_2004::FootingAnchorageForce);

impl FootingAnchorageForce {
    pub fn new(r: Kn, z_e: Mm, z_i: Mm) -> CalcResult<Self> {
        Ok(Self(en_2004::FootingAnchorageForce::new(r, z_e, z_i)?))
    }
}

impl_reissued_formula!(FootingAnchorageForce => en_2004::FootingAnchorageForce, DOC);

impl_scalar_formula!(
    MinimumTensileReinforcementBeam,
    MaximumSpacingSeriesOfLinks,
    MinimumLongitudinalReinforcementColumn,
    FootingAnchorageForce,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimum_tensile_reinforcement_beam() {
        let a_s_min = MinimumTensileReinforcementBeam::new(2.0, 355.0, 50.0, 150.0).unwrap();
        assert!((a_s_min.result() - 780.0 / 71.0).abs() < 1e-9);
        assert_eq!(
            a_s_min.latex().complete(),
            r"A_{s,min} = \max \left\{0.26 \cdot \frac{f_{ctm}}{f_{yk}} \cdot b_t \cdot d; 0.0013 \cdot b_t \cdot d\right\} = \max \left\{0.26 \cdot \frac{2.00}{355.00} \cdot 50.00 \cdot 150.00; 0.0013 \cdot 50.00 \cdot 150.00\right\} = 10.99"
        );
        assert_eq!(a_s_min.latex().short(), r"A_{s,min} = 10.99");
        assert_eq!(a_s_min.latex().to_string(), a_s_min.latex().complete());
        assert_eq!(a_s_min.citation(), "NEN-EN 1992-1-1+C2:2011 (9.1N)");

        let lower_bound = MinimumTensileReinforcementBeam::new(2.0, 540.0, 50.0, 150.0).unwrap();
        assert!((lower_bound.result() - 9.75).abs() < 1e-9);

        for (args, field) in [
            ([-2.0, 355.0, 50.0, 150.0], "f_ctm"),
            ([2.0, -355.0, 50.0, 150.0], "f_yk"),
            ([2.0, 355.0, -50.0, 150.0], "b_t"),
            ([2.0, 355.0, 50.0, -150.0], "d"),
        ] {
            let err = MinimumTensileReinforcementBeam::new(args[0], args[1], args[2], args[3]).unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_maximum_spacing_series_of_links() {
        let s_max = MaximumSpacingSeriesOfLinks::new(300.0, 45.0).unwrap();
        assert!((s_max.result() - 450.0).abs() < 1e-9);
        assert_eq!(
            s_max.latex().complete(),
            r"s_{max} = 0.75 \cdot d \cdot \left( 1 + cot(\alpha) \right) = 0.75 \cdot 300.00 \cdot \left( 1 + cot(45.00) \right) = 450.00 \ mm"
        );
        assert!((MaximumSpacingSeriesOfLinks::new(300.0, 90.0).unwrap().result() - 225.0).abs() < 1e-9);
        assert_eq!(MaximumSpacingSeriesOfLinks::new(300.0, 0.0).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
        assert_eq!(MaximumSpacingSeriesOfLinks::new(300.0, 95.0).unwrap_err().error_code(), "GREATER_THAN_90");
    }

    #[test]
    fn test_reissued_column_and_footing_rules() {
        let a_s_min = MinimumLongitudinalReinforcementColumn::new(500.0, 435.0, 160000.0).unwrap();
        assert!((a_s_min.result() - 320.0).abs() < 1e-9);
        assert_eq!(a_s_min.citation(), "NEN-EN 1992-1-1+C2:2011 (9.12N)");

        let f_s = FootingAnchorageForce::new(500.0, 300.0, 600.0).unwrap();
        assert_eq!(f_s, 250.0);
        assert_eq!(f_s.latex().short(), r"F_s = 250.00 \ kN");
        assert!(FootingAnchorageForce::new(500.0, 300.0, 0.0).is_err());
    }
}
