//! # Chapter 5: Structural Analysis
//!
//! Geometric imperfections of NEN-EN 1992-1-1+C2:2011 section 5.2.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::eurocode::en_1992_1_1_2004::structural_analysis as en_2004;
use crate::formula::{impl_reissued_formula, impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS};
use crate::units::{Dimensionless, Kn, M};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

/// Eccentricity e_i of isolated members due to imperfections, art. 5.2(7).
///
/// # Formula
/// e_i = θ_i · l_0 / 2
#[derive(Debug, Clone, Serialize)]
pub struct Eccentricity {
    theta_i: Dimensionless,
    l_0: M,
    result: M,
}

impl Eccentricity {
    /// # Arguments
    /// * `theta_i` - Inclination θ_i, see formula 5.1
    /// * `l_0` - Effective length of the member (m)
    pub fn new(theta_i: Dimensionless, l_0: M) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_i", theta_i)])?;
        ensure_positive(&[("l_0", l_0)])?;
        Ok(Self { theta_i, l_0, result: theta_i * l_0 / 2.0 }.traced())
    }
}

impl Formula for Eccentricity {
    type Output = f64;
    const LABEL: &'static str = "5.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Eccentricity of isolated members";
    const DEFAULT_DECIMALS: usize = 4;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "e_i",
            fmt_n(self.result, n),
            r"\theta_i \cdot l_0 / 2",
            format!(r"{} \cdot {} / 2", fmt_n(self.theta_i, n), fmt_n(self.l_0, n)),
            EQUALS,
        )
        .with_unit("m")
    }
}

/// Transverse force for unbraced members (5.3a).
#[derive(Debug, Clone, Serialize)]
pub struct TransverseForceUnbracedMembers(en_2004::TransverseForceUnbracedMembers);

impl TransverseForceUnbracedMembers {
    pub fn new(theta_i: Dimensionless, n_axial_force: Kn) -> CalcResult<Self> {
        Ok(Self(en_2004::TransverseForceUnbracedMembers::new(theta_i, n_axial_force)?))
    }
}

impl_reissued_formula!(TransverseForceUnbracedMembers => en_2004::TransverseForceUnbracedMembers, DOC);

impl_scalar_formula!(Eccentricity, TransverseForceUnbracedMembers);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eccentricity() {
        let e_i = Eccentricity::new(0.0036, 6.0).unwrap();
        assert!((e_i.result() - 0.0108).abs() < 1e-12);
        assert_eq!(
            e_i.latex().complete(),
            r"e_i = \theta_i \cdot l_0 / 2 = 0.0036 \cdot 6.0000 / 2 = 0.0108 \ m"
        );
        assert_eq!(Eccentricity::new(0.0036, 0.0).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
        assert_eq!(Eccentricity::new(-0.0036, 6.0).unwrap_err().error_code(), "NEGATIVE_VALUE");
    }

    #[test]
    fn test_transverse_force_unbraced_members() {
        let h_i = TransverseForceUnbracedMembers::new(0.0036, 1000.0).unwrap();
        assert!((h_i.result() - 3.6).abs() < 1e-9);
        assert_eq!(h_i.citation(), "NEN-EN 1992-1-1+C2:2011 (5.3a)");
        assert_eq!(h_i.latex().short(), r"H_{i} = 3.600 \ kN");
    }
}
