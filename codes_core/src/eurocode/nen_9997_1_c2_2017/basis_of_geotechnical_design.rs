//! # Chapter 2: Basis of Geotechnical Design
//!
//! Representative values of actions, design values of ground properties and
//! the equilibrium check for uplift and loss of static equilibrium.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_check_formula, impl_scalar_formula, Formula};
use crate::latex::{check_verdict, fmt_n, latex_fraction, LatexFormula, EQUALS, TO};
use crate::units::{Dimensionless, Kn};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::Nen9997_1C2_2017;

/// Relative tolerance under which the destabilising and stabilising effects
/// count as equal.
const EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// Representative value of an action, art. 2.4.6.1(2).
///
/// # Formula
/// F_rep = ψ · F_k
#[derive(Debug, Clone, Serialize)]
pub struct RepresentativeValue {
    psi: Dimensionless,
    f_k: Kn,
    result: Kn,
}

impl RepresentativeValue {
    /// # Arguments
    /// * `psi` - Factor converting the characteristic value to the representative value
    /// * `f_k` - Characteristic value of the action (kN)
    pub fn new(psi: Dimensionless, f_k: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("psi", psi)])?;
        Ok(Self { psi, f_k, result: psi * f_k }.traced())
    }
}

impl Formula for RepresentativeValue {
    type Output = f64;
    const LABEL: &'static str = "2.1b";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Representative value of an action";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_{rep}",
            fmt_n(self.result, n),
            r"\psi \cdot F_{k}",
            format!(r"{} \cdot {}", fmt_n(self.psi, n), fmt_n(self.f_k, n)),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Design value of a geotechnical parameter, art. 2.4.6.2(1).
///
/// # Formula
/// X_d = X_k / γ_M
#[derive(Debug, Clone, Serialize)]
pub struct DesignValueGeotechnicalParameter {
    x_k: f64,
    gamma_m: Dimensionless,
    result: f64,
}

impl DesignValueGeotechnicalParameter {
    /// # Arguments
    /// * `x_k` - Characteristic value of the parameter, in its own unit
    /// * `gamma_m` - Partial factor for the soil parameter
    pub fn new(x_k: f64, gamma_m: Dimensionless) -> CalcResult<Self> {
        ensure_positive(&[("gamma_m", gamma_m)])?;
        Ok(Self { x_k, gamma_m, result: x_k / gamma_m }.traced())
    }
}

impl Formula for DesignValueGeotechnicalParameter {
    type Output = f64;
    const LABEL: &'static str = "2.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design value of a geotechnical parameter";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "X_d",
            fmt_n(self.result, n),
            r"\frac{X_{k}}{\gamma_M}",
            latex_fraction(fmt_n(self.x_k, n), fmt_n(self.gamma_m, n)),
            EQUALS,
        )
    }
}

/// Verification of static equilibrium (EQU), art. 2.4.7.2(1).
///
/// Effects that are equal within a relative tolerance pass.
///
/// # Formula
/// E_dst;d ≤ E_stb;d + T_d
#[derive(Debug, Clone, Serialize)]
pub struct StaticEquilibriumCheck {
    e_dst_d: Kn,
    e_stb_d: Kn,
    t_d: Kn,
    result: bool,
}

impl StaticEquilibriumCheck {
    /// # Arguments
    /// * `e_dst_d` - Design value of the destabilising action effect (kN)
    /// * `e_stb_d` - Design value of the stabilising action effect (kN)
    /// * `t_d` - Design value of the total shearing resistance (kN)
    pub fn new(e_dst_d: Kn, e_stb_d: Kn, t_d: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("e_dst_d", e_dst_d), ("e_stb_d", e_stb_d)])?;
        let resisting = e_stb_d + t_d;
        let tolerance = EQUILIBRIUM_TOLERANCE * e_dst_d.abs().max(resisting.abs());
        let result = e_dst_d < resisting || (e_dst_d - resisting).abs() <= tolerance;
        Ok(Self { e_dst_d, e_stb_d, t_d, result }.traced())
    }
}

impl Formula for StaticEquilibriumCheck {
    type Output = bool;
    const LABEL: &'static str = "2.4";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Verification of static equilibrium";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let e_dst = fmt_n(self.e_dst_d, n);
        LatexFormula::new(
            "",
            check_verdict(self.result),
            r"E_{dst;d} \leq E_{stb;d} + T_d",
            format!(
                r"{e_dst} \leq {} + {} \to {e_dst} \leq {}",
                fmt_n(self.e_stb_d, n),
                fmt_n(self.t_d, n),
                fmt_n(self.e_stb_d + self.t_d, n)
            ),
            TO,
        )
    }
}

impl_scalar_formula!(RepresentativeValue, DesignValueGeotechnicalParameter);
impl_check_formula!(StaticEquilibriumCheck);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_representative_value() {
        let f_rep = RepresentativeValue::new(1.2, 100.0).unwrap();
        assert!((f_rep.result() - 120.0).abs() < 1e-9);
        assert_eq!(f_rep.latex().complete(), r"F_{rep} = \psi \cdot F_{k} = 1.200 \cdot 100.000 = 120.000 \ kN");
        assert_eq!(f_rep.citation(), "NEN 9997-1+C2:2017 (2.1b)");

        let err = RepresentativeValue::new(-1.0, 100.0).unwrap_err();
        assert_eq!((err.field(), err.error_code()), (Some("psi"), "NEGATIVE_VALUE"));
    }

    #[test]
    fn test_design_value_geotechnical_parameter() {
        let x_d = DesignValueGeotechnicalParameter::new(30.0, 1.25).unwrap();
        assert_eq!(x_d, 24.0);
        assert_eq!(x_d.latex().complete(), r"X_d = \frac{X_{k}}{\gamma_M} = \frac{30.000}{1.250} = 24.000");
        assert_eq!(
            DesignValueGeotechnicalParameter::new(30.0, 0.0).unwrap_err().error_code(),
            "LESS_OR_EQUAL_TO_ZERO"
        );
    }

    #[test]
    fn test_static_equilibrium_check() {
        let check = StaticEquilibriumCheck::new(100.0, 80.0, 30.0).unwrap();
        assert_eq!(check, true);
        assert_eq!(
            check.latex().complete(),
            r"E_{dst;d} \leq E_{stb;d} + T_d \to 100.00 \leq 80.00 + 30.00 \to 100.00 \leq 110.00 \to OK"
        );
        assert_eq!(check.latex().short(), "OK");
    }

    #[test]
    fn test_static_equilibrium_check_boundary_and_failure() {
        // 0.6 + 0.3 rounds to just below 0.9
        assert_eq!(StaticEquilibriumCheck::new(0.9, 0.6, 0.3).unwrap(), true);
        let failing = StaticEquilibriumCheck::new(120.0, 80.0, 30.0).unwrap();
        assert_eq!(failing, false);
        assert_eq!(failing.latex().result, r"\text{Not OK}");
        assert!(StaticEquilibriumCheck::new(-1.0, 80.0, 30.0).is_err());
    }
}
