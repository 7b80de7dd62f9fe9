//! # Chapter 7: Serviceability Limit States
//!
//! Crack width and deflection relations of NEN-EN 1992-1-1+C2:2011
//! sections 7.3 and 7.4.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, replace_symbols, LatexFormula, EQUALS};
use crate::units::{Dimensionless, Mm2, Mpa};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

// =============================================================================
// CRACK CONTROL (7.10)
// =============================================================================

/// Effective reinforcement ratio ρ_p,eff including bonded tendons, art. 7.3.4(2).
///
/// # Formula
/// ρ_p,eff = (A_s + ξ_1 · A'_p) / A_c,eff
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveReinforcementRatio {
    a_s: Mm2,
    xi_1: Dimensionless,
    a_p_prime: Mm2,
    a_c_eff: Mm2,
    result: Dimensionless,
}

impl EffectiveReinforcementRatio {
    /// # Arguments
    /// * `a_s` - Area of reinforcing steel (mm²)
    /// * `xi_1` - Adjusted ratio of bond strength, formula 7.5
    /// * `a_p_prime` - Area of pre- or post-tensioned tendons within A_c,eff (mm²)
    /// * `a_c_eff` - Effective area of concrete in tension (mm²)
    pub fn new(a_s: Mm2, xi_1: Dimensionless, a_p_prime: Mm2, a_c_eff: Mm2) -> CalcResult<Self> {
        ensure_non_negative(&[("a_s", a_s), ("xi_1", xi_1), ("a_p_prime", a_p_prime)])?;
        ensure_positive(&[("a_c_eff", a_c_eff)])?;
        let result = (a_s + xi_1 * a_p_prime) / a_c_eff;
        Ok(Self { a_s, xi_1, a_p_prime, a_c_eff, result }.traced())
    }
}

impl Formula for EffectiveReinforcementRatio {
    type Output = f64;
    const LABEL: &'static str = "7.10";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effective reinforcement ratio";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{A_s + \xi_1 \cdot A'_p}{A_{c,eff}}";
        let numeric = replace_symbols(
            equation,
            &[
                ("A_s", fmt_n(self.a_s, n)),
                (r"\xi_1", fmt_n(self.xi_1, n)),
                ("A'_p", fmt_n(self.a_p_prime, n)),
                ("A_{c,eff}", fmt_n(self.a_c_eff, n)),
            ],
        );
        LatexFormula::new(r"\rho_{p,eff}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("-")
    }
}

// =============================================================================
// DEFLECTION CONTROL (7.17, 7.18, 7.20)
// =============================================================================

/// Multiplication factor 310 / σ_s for the limiting span to depth ratio,
/// art. 7.4.2(2).
///
/// # Formula
/// 310 / σ_s = 500 / (f_yk · A_s,req / A_s,prov)
#[derive(Debug, Clone, Serialize)]
pub struct SlendernessMultiplicationFactor {
    f_yk: Mpa,
    a_s_req: Mm2,
    a_s_prov: Mm2,
    result: Dimensionless,
}

impl SlendernessMultiplicationFactor {
    /// # Arguments
    /// * `f_yk` - Characteristic yield strength of the reinforcement (MPa)
    /// * `a_s_req` - Area of steel required at this section for ULS (mm²)
    /// * `a_s_prov` - Area of steel provided at this section (mm²)
    pub fn new(f_yk: Mpa, a_s_req: Mm2, a_s_prov: Mm2) -> CalcResult<Self> {
        ensure_positive(&[("f_yk", f_yk), ("a_s_req", a_s_req), ("a_s_prov", a_s_prov)])?;
        let result = 500.0 / (f_yk * a_s_req / a_s_prov);
        Ok(Self { f_yk, a_s_req, a_s_prov, result }.traced())
    }
}

impl Formula for SlendernessMultiplicationFactor {
    type Output = f64;
    const LABEL: &'static str = "7.17";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Multiplication factor for the limiting span to depth ratio";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{500}{f_{yk} \cdot \frac{A_{s,req}}{A_{s,prov}}}";
        let numeric = replace_symbols(
            equation,
            &[
                ("f_{yk}", fmt_n(self.f_yk, n)),
                ("A_{s,req}", fmt_n(self.a_s_req, n)),
                ("A_{s,prov}", fmt_n(self.a_s_prov, n)),
            ],
        );
        LatexFormula::new(r"\frac{310}{\sigma_s}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("-")
    }
}

/// Deformation parameter α interpolated between the uncracked and the fully
/// cracked condition, art. 7.4.3(3).
///
/// # Formula
/// α = ζ · α_II + (1 - ζ) · α_I
#[derive(Debug, Clone, Serialize)]
pub struct DeformationParameter {
    zeta: Dimensionless,
    alpha_i: f64,
    alpha_ii: f64,
    result: f64,
}

impl DeformationParameter {
    /// # Arguments
    /// * `zeta` - Distribution coefficient for tension stiffening, formula 7.19
    /// * `alpha_i` - Parameter for the uncracked condition
    /// * `alpha_ii` - Parameter for the fully cracked condition
    pub fn new(zeta: Dimensionless, alpha_i: f64, alpha_ii: f64) -> CalcResult<Self> {
        ensure_non_negative(&[("zeta", zeta), ("alpha_i", alpha_i), ("alpha_ii", alpha_ii)])?;
        let result = zeta * alpha_ii + (1.0 - zeta) * alpha_i;
        Ok(Self { zeta, alpha_i, alpha_ii, result }.traced())
    }
}

impl Formula for DeformationParameter {
    type Output = f64;
    const LABEL: &'static str = "7.18";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Deformation parameter";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\zeta \cdot \alpha_{II} + (1 - \zeta) \cdot \alpha_{I}";
        let numeric = replace_symbols(
            equation,
            &[
                (r"\zeta", fmt_n(self.zeta, n)),
                (r"\alpha_{II}", fmt_n(self.alpha_ii, n)),
                (r"\alpha_{I}", fmt_n(self.alpha_i, n)),
            ],
        );
        LatexFormula::new(r"\alpha", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("-")
    }
}

/// Effective modulus of elasticity of concrete including creep, art. 7.4.3(5).
///
/// # Formula
/// E_c,eff = E_cm / (1 + φ(∞, t_0))
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveModulusCreep {
    e_cm: Mpa,
    phi_inf_t0: Dimensionless,
    result: Mpa,
}

impl EffectiveModulusCreep {
    pub fn new(e_cm: Mpa, phi_inf_t0: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("e_cm", e_cm), ("phi_inf_t0", phi_inf_t0)])?;
        Ok(Self { e_cm, phi_inf_t0, result: e_cm / (1.0 + phi_inf_t0) }.traced())
    }
}

impl Formula for EffectiveModulusCreep {
    type Output = f64;
    const LABEL: &'static str = "7.20";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effective modulus of elasticity including creep";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{E_{cm}}{1 + \phi(\infty , t_0)}";
        let numeric = replace_symbols(
            equation,
            &[("E_{cm}", fmt_n(self.e_cm, n)), (r"\phi(\infty , t_0)", fmt_n(self.phi_inf_t0, n))],
        );
        LatexFormula::new("E_{c,eff}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("MPa")
    }
}

impl_scalar_formula!(
    EffectiveReinforcementRatio,
    SlendernessMultiplicationFactor,
    DeformationParameter,
    EffectiveModulusCreep,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_effective_reinforcement_ratio() {
        let rho = EffectiveReinforcementRatio::new(500.0, 0.5, 200.0, 40000.0).unwrap();
        assert!((rho.result() - 0.015).abs() < 1e-12);
        assert_eq!(
            rho.latex().complete(),
            r"\rho_{p,eff} = \frac{A_s + \xi_1 \cdot A'_p}{A_{c,eff}} = \frac{500.000 + 0.500 \cdot 200.000}{40000.000} = 0.015 \ -"
        );
        assert_eq!(
            EffectiveReinforcementRatio::new(500.0, 0.5, 200.0, 0.0).unwrap_err().error_code(),
            "LESS_OR_EQUAL_TO_ZERO"
        );
    }

    #[test]
    fn test_slenderness_multiplication_factor() {
        let factor = SlendernessMultiplicationFactor::new(500.0, 800.0, 1000.0).unwrap();
        assert!((factor.result() - 1.25).abs() < 1e-12);
        assert_eq!(
            factor.latex_with_decimals(2).complete(),
            r"\frac{310}{\sigma_s} = \frac{500}{f_{yk} \cdot \frac{A_{s,req}}{A_{s,prov}}} = \frac{500}{500.00 \cdot \frac{800.00}{1000.00}} = 1.25 \ -"
        );
        assert!(SlendernessMultiplicationFactor::new(500.0, 0.0, 1000.0).is_err());
    }

    #[test]
    fn test_deformation_parameter() {
        let alpha = DeformationParameter::new(0.4, 1.5, 2.5).unwrap();
        assert!((alpha.result() - 1.9).abs() < 1e-12);
        assert_eq!(
            alpha.latex().complete(),
            r"\alpha = \zeta \cdot \alpha_{II} + (1 - \zeta) \cdot \alpha_{I} = 0.400 \cdot 2.500 + (1 - 0.400) \cdot 1.500 = 1.900 \ -"
        );
        assert!(DeformationParameter::new(-0.4, 1.5, 2.5).is_err());
    }

    #[test]
    fn test_effective_modulus_creep() {
        let e_eff = EffectiveModulusCreep::new(33000.0, 2.0).unwrap();
        assert_eq!(e_eff, 11000.0);
        assert_eq!(
            e_eff.latex().complete(),
            r"E_{c,eff} = \frac{E_{cm}}{1 + \phi(\infty , t_0)} = \frac{33000.000}{1 + 2.000} = 11000.000 \ MPa"
        );
    }

    #[test]
    fn test_effective_modulus_creep_rejects_negative_inputs() {
        for (e_cm, phi_inf_t0, field) in [(-33000.0, 2.0, "e_cm"), (33000.0, -2.0, "phi_inf_t0")] {
            let err = EffectiveModulusCreep::new(e_cm, phi_inf_t0).unwrap_err();
            assert_eq!((err.field(), err.error_code()), (Some(field), "NEGATIVE_VALUE"));
        }
    }
}
