//! # Chapter 6: Ultimate Limit States
//!
//! Bending, shear and torsion of cross-sections per NEN-EN 1993-1-1+C2+A1:2016.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_check_formula, impl_scalar_formula, Formula};
use crate::latex::{check_verdict, fmt_n, replace_symbols, LatexFormula, EQUALS, TO};
use crate::units::{Dimensionless, Mm3, Mpa, Nmm, N};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1993_1_1C2A1_2016;

/// Design bending resistance of class 1 and 2 cross-sections, art. 6.2.5(2).
///
/// # Formula
/// M_c,Rd = W_pl · f_y / γ_M0
#[derive(Debug, Clone, Serialize)]
pub struct BendingResistanceClass1And2 {
    w_pl: Mm3,
    f_y: Mpa,
    gamma_m0: Dimensionless,
    result: Nmm,
}

impl BendingResistanceClass1And2 {
    /// # Arguments
    /// * `w_pl` - Plastic section modulus (mm³)
    /// * `f_y` - Yield strength (MPa)
    /// * `gamma_m0` - Partial factor for resistance of cross-sections
    pub fn new(w_pl: Mm3, f_y: Mpa, gamma_m0: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("w_pl", w_pl), ("f_y", f_y)])?;
        ensure_positive(&[("gamma_m0", gamma_m0)])?;
        Ok(Self { w_pl, f_y, gamma_m0, result: w_pl * f_y / gamma_m0 }.traced())
    }
}

impl Formula for BendingResistanceClass1And2 {
    type Output = f64;
    const LABEL: &'static str = "6.13";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design bending resistance of class 1 and 2 cross-sections";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{W_{pl} \cdot f_y}{\gamma_{M0}}";
        let numeric = replace_symbols(
            equation,
            &[
                ("W_{pl}", fmt_n(self.w_pl, n)),
                ("f_y", fmt_n(self.f_y, n)),
                (r"\gamma_{M0}", fmt_n(self.gamma_m0, n)),
            ],
        );
        LatexFormula::new("M_{c,Rd}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("Nmm")
    }
}

/// Design shear force against the design shear resistance, art. 6.2.6(1).
///
/// # Formula
/// V_Ed / V_c,Rd ≤ 1.0
#[derive(Debug, Clone, Serialize)]
pub struct ShearForceCheck {
    v_ed: N,
    v_c_rd: N,
    result: bool,
}

impl ShearForceCheck {
    pub fn new(v_ed: N, v_c_rd: N) -> CalcResult<Self> {
        ensure_positive(&[("v_c_rd", v_c_rd)])?;
        ensure_non_negative(&[("v_ed", v_ed)])?;
        Ok(Self { v_ed, v_c_rd, result: v_ed / v_c_rd <= 1.0 }.traced())
    }

    /// V_Ed / V_c,Rd
    pub fn unity_check(&self) -> Dimensionless {
        self.v_ed / self.v_c_rd
    }
}

impl Formula for ShearForceCheck {
    type Output = bool;
    const LABEL: &'static str = "6.17";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design shear force check";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\left( \frac{V_{Ed}}{V_{c,Rd}} \leq 1.0 \right)";
        let numeric =
            replace_symbols(equation, &[("V_{Ed}", fmt_n(self.v_ed, n)), ("V_{c,Rd}", fmt_n(self.v_c_rd, n))]);
        LatexFormula::new("CHECK", check_verdict(self.result), equation, numeric, TO)
    }
}

/// Total torsional moment, art. 6.2.7(2).
///
/// # Formula
/// T_Ed = T_t,Ed + T_w,Ed
#[derive(Debug, Clone, Serialize)]
pub struct TotalTorsionalMoment {
    t_t_ed: Nmm,
    t_w_ed: Nmm,
    result: Nmm,
}

impl TotalTorsionalMoment {
    /// # Arguments
    /// * `t_t_ed` - Internal St. Venant torsion (Nmm)
    /// * `t_w_ed` - Internal warping torsion (Nmm)
    pub fn new(t_t_ed: Nmm, t_w_ed: Nmm) -> CalcResult<Self> {
        ensure_non_negative(&[("t_t_ed", t_t_ed), ("t_w_ed", t_w_ed)])?;
        Ok(Self { t_t_ed, t_w_ed, result: t_t_ed + t_w_ed }.traced())
    }
}

impl Formula for TotalTorsionalMoment {
    type Output = f64;
    const LABEL: &'static str = "6.24";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Total torsional moment";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = "T_{t,Ed} + T_{w,Ed}";
        let numeric =
            replace_symbols(equation, &[("T_{t,Ed}", fmt_n(self.t_t_ed, n)), ("T_{w,Ed}", fmt_n(self.t_w_ed, n))]);
        LatexFormula::new("T_{Ed}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("Nmm")
    }
}

/// Bending resistance about the z-z axis reduced for axial force, for
/// I- and H-sections with n > a, art. 6.2.9.1(5).
///
/// # Formula
/// M_N,z,Rd = min(M_pl,z,Rd · (1 - n) / (1 - 0.5·a_f); M_pl,z,Rd)
#[derive(Debug, Clone, Serialize)]
pub struct ReducedBendingResistanceZ {
    m_pl_z_rd: Nmm,
    n: Dimensionless,
    a_f: Dimensionless,
    result: Nmm,
}

impl ReducedBendingResistanceZ {
    /// # Arguments
    /// * `m_pl_z_rd` - Plastic bending resistance about the z-z axis (Nmm)
    /// * `n` - Axial force ratio N_Ed / N_pl,Rd
    /// * `a_f` - Flange area ratio
    pub fn new(m_pl_z_rd: Nmm, n: Dimensionless, a_f: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("m_pl_z_rd", m_pl_z_rd), ("n", n), ("a_f", a_f)])?;
        let denominator = 1.0 - 0.5 * a_f;
        ensure_positive(&[("1 - 0.5 a_f", denominator)])?;
        let result = (m_pl_z_rd * (1.0 - n) / denominator).min(m_pl_z_rd);
        Ok(Self { m_pl_z_rd, n, a_f, result }.traced())
    }
}

impl Formula for ReducedBendingResistanceZ {
    type Output = f64;
    const LABEL: &'static str = "6.40";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Reduced bending resistance about the z-z axis";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\min \left( M_{pl,z,Rd} \cdot \frac{1 - n}{1 - 0.5 \cdot a_f}, M_{pl,z,Rd} \right)";
        let substitute = |moment: String| {
            replace_symbols(
                equation,
                &[
                    ("M_{pl,z,Rd}", moment),
                    (" n", format!(" {}", fmt_n(self.n, n))),
                    ("a_f", fmt_n(self.a_f, n)),
                ],
            )
        };
        let numeric = substitute(fmt_n(self.m_pl_z_rd, n));
        let with_units = substitute(format!(r"{} \ Nmm", fmt_n(self.m_pl_z_rd, n)));
        LatexFormula::new("M_{N,z,Rd}", fmt_n(self.result, n), equation, numeric, EQUALS)
            .with_unit("Nmm")
            .with_numeric_equation_with_units(with_units)
    }
}

impl_scalar_formula!(BendingResistanceClass1And2, TotalTorsionalMoment, ReducedBendingResistanceZ);
impl_check_formula!(ShearForceCheck);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bending_resistance_class_1_and_2() {
        let m_c_rd = BendingResistanceClass1And2::new(1_000_000.0, 355.0, 1.0).unwrap();
        assert_eq!(m_c_rd, 355_000_000.0);
        assert_eq!(
            m_c_rd.latex_with_decimals(0).complete(),
            r"M_{c,Rd} = \frac{W_{pl} \cdot f_y}{\gamma_{M0}} = \frac{1000000 \cdot 355}{1} = 355000000 \ Nmm"
        );
        assert_eq!(BendingResistanceClass1And2::new(-1.0, 355.0, 1.0).unwrap_err().error_code(), "NEGATIVE_VALUE");
    }

    #[test]
    fn test_shear_force_check() {
        let check = ShearForceCheck::new(80_000.0, 100_000.0).unwrap();
        assert_eq!(check, true);
        assert!((check.unity_check() - 0.8).abs() < 1e-12);
        assert_eq!(
            check.latex_with_decimals(1).complete(),
            r"CHECK \to \left( \frac{V_{Ed}}{V_{c,Rd}} \leq 1.0 \right) \to \left( \frac{80000.0}{100000.0} \leq 1.0 \right) \to OK"
        );

        let failing = ShearForceCheck::new(120_000.0, 100_000.0).unwrap();
        assert_eq!(failing, false);
        assert_eq!(failing.latex().result, r"\text{Not OK}");
        assert!(ShearForceCheck::new(1.0, 0.0).is_err());
    }

    #[test]
    fn test_total_torsional_moment() {
        let t_ed = TotalTorsionalMoment::new(1_500_000.0, 500_000.0).unwrap();
        assert_eq!(t_ed, 2_000_000.0);
        assert_eq!(t_ed.latex().short(), r"T_{Ed} = 2000000.000 \ Nmm");
        assert!(TotalTorsionalMoment::new(1.0, -1.0).is_err());
    }

    #[test]
    fn test_reduced_bending_resistance_z() {
        let m = ReducedBendingResistanceZ::new(200_000_000.0, 0.3, 0.4).unwrap();
        assert!((m.result() - 175_000_000.0).abs() < 1e-3);
        assert_eq!(
            m.latex_with_decimals(1).complete(),
            r"M_{N,z,Rd} = \min \left( M_{pl,z,Rd} \cdot \frac{1 - n}{1 - 0.5 \cdot a_f}, M_{pl,z,Rd} \right) = \min \left( 200000000.0 \cdot \frac{1 - 0.3}{1 - 0.5 \cdot 0.4}, 200000000.0 \right) = 175000000.0 \ Nmm"
        );
        assert_eq!(
            m.latex_with_decimals(1).complete_with_units(),
            r"M_{N,z,Rd} = \min \left( M_{pl,z,Rd} \cdot \frac{1 - n}{1 - 0.5 \cdot a_f}, M_{pl,z,Rd} \right) = \min \left( 200000000.0 \ Nmm \cdot \frac{1 - 0.3}{1 - 0.5 \cdot 0.4}, 200000000.0 \ Nmm \right) = 175000000.0 \ Nmm"
        );

        let capped = ReducedBendingResistanceZ::new(200_000_000.0, 0.05, 0.4).unwrap();
        assert_eq!(capped, 200_000_000.0);
        assert_eq!(ReducedBendingResistanceZ::new(1.0, 0.3, 2.0).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
    }
}
