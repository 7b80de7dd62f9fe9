//! # Chapter 6: Ultimate Limit States
//!
//! Cross-section resistances of EN 1993-1-1:2005 section 6.2.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, replace_symbols, LatexFormula, EQUALS};
use crate::units::{Dimensionless, Kn, Knm, Mm3, Mpa, Nmm, N};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1993_1_1_2005;

/// Linear summation of utilization ratios, art. 6.2.1(7).
///
/// A conservative approximation for all cross-section classes.
///
/// # Formula
/// UC = N_Ed / N_Rd + M_y,Ed / M_y,Rd + M_z,Ed / M_z,Rd
#[derive(Debug, Clone, Serialize)]
pub struct UtilizationRatio {
    n_ed: Kn,
    n_rd: Kn,
    m_y_ed: Knm,
    m_y_rd: Knm,
    m_z_ed: Knm,
    m_z_rd: Knm,
    result: Dimensionless,
}

impl UtilizationRatio {
    pub fn new(n_ed: Kn, n_rd: Kn, m_y_ed: Knm, m_y_rd: Knm, m_z_ed: Knm, m_z_rd: Knm) -> CalcResult<Self> {
        ensure_positive(&[("n_rd", n_rd), ("m_y_rd", m_y_rd), ("m_z_rd", m_z_rd)])?;
        ensure_non_negative(&[("n_ed", n_ed), ("m_y_ed", m_y_ed), ("m_z_ed", m_z_ed)])?;
        let result = n_ed / n_rd + m_y_ed / m_y_rd + m_z_ed / m_z_rd;
        Ok(Self { n_ed, n_rd, m_y_ed, m_y_rd, m_z_ed, m_z_rd, result }.traced())
    }
}

impl Formula for UtilizationRatio {
    type Output = f64;
    const LABEL: &'static str = "6.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Utilization ratio";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "UC",
            fmt_n(self.result, n),
            r"\frac{N_{Ed}}{N_{Rd}} + \frac{M_{y,Ed}}{M_{y,Rd}} + \frac{M_{z,Ed}}{M_{z,Rd}}",
            format!(
                r"\frac{{{}}}{{{}}} + \frac{{{}}}{{{}}} + \frac{{{}}}{{{}}}",
                fmt_n(self.n_ed, n),
                fmt_n(self.n_rd, n),
                fmt_n(self.m_y_ed, n),
                fmt_n(self.m_y_rd, n),
                fmt_n(self.m_z_ed, n),
                fmt_n(self.m_z_rd, n)
            ),
            EQUALS,
        )
    }
}

/// Design bending resistance of class 4 cross-sections, art. 6.2.5(2).
///
/// # Formula
/// M_c,Rd = W_eff,min · f_y / γ_M0
#[derive(Debug, Clone, Serialize)]
pub struct BendingResistanceClass4 {
    w_eff_min: Mm3,
    f_y: Mpa,
    gamma_m0: Dimensionless,
    result: Nmm,
}

impl BendingResistanceClass4 {
    /// # Arguments
    /// * `w_eff_min` - Minimum effective section modulus (mm³)
    /// * `f_y` - Yield strength (MPa)
    /// * `gamma_m0` - Partial factor for resistance of cross-sections
    pub fn new(w_eff_min: Mm3, f_y: Mpa, gamma_m0: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("w_eff_min", w_eff_min), ("f_y", f_y)])?;
        ensure_positive(&[("gamma_m0", gamma_m0)])?;
        Ok(Self { w_eff_min, f_y, gamma_m0, result: w_eff_min * f_y / gamma_m0 }.traced())
    }
}

impl Formula for BendingResistanceClass4 {
    type Output = f64;
    const LABEL: &'static str = "6.15";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design bending resistance of class 4 cross-sections";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{W_{eff,min} \cdot f_y}{\gamma_{M0}}";
        let numeric = replace_symbols(
            equation,
            &[
                ("W_{eff,min}", fmt_n(self.w_eff_min, n)),
                ("f_y", fmt_n(self.f_y, n)),
                (r"\gamma_{M0}", fmt_n(self.gamma_m0, n)),
            ],
        );
        LatexFormula::new("M_{c,Rd}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("Nmm")
    }
}

/// Plastic shear resistance of structural hollow sections reduced for
/// St. Venant torsion, art. 6.2.7(9).
///
/// # Formula
/// V_pl,T,Rd = (1 - τ_t,Ed / ((f_y / √3) / γ_M0)) · V_pl,Rd
#[derive(Debug, Clone, Serialize)]
pub struct ShearResistanceHollowSectionTorsion {
    tau_t_ed: Mpa,
    f_y: Mpa,
    gamma_m0: Dimensionless,
    v_pl_rd: N,
    result: N,
}

impl ShearResistanceHollowSectionTorsion {
    /// # Arguments
    /// * `tau_t_ed` - Shear stress due to St. Venant torsion (MPa)
    /// * `f_y` - Yield strength (MPa)
    /// * `gamma_m0` - Partial factor for resistance of cross-sections
    /// * `v_pl_rd` - Plastic shear resistance, art. 6.2.6 (N)
    pub fn new(tau_t_ed: Mpa, f_y: Mpa, gamma_m0: Dimensionless, v_pl_rd: N) -> CalcResult<Self> {
        ensure_non_negative(&[("tau_t_ed", tau_t_ed), ("v_pl_rd", v_pl_rd)])?;
        ensure_positive(&[("gamma_m0", gamma_m0), ("f_y", f_y)])?;
        let result = (1.0 - tau_t_ed / (f_y / 3.0_f64.sqrt() / gamma_m0)) * v_pl_rd;
        Ok(Self { tau_t_ed, f_y, gamma_m0, v_pl_rd, result }.traced())
    }
}

impl Formula for ShearResistanceHollowSectionTorsion {
    type Output = f64;
    const LABEL: &'static str = "6.28";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Plastic shear resistance of hollow sections with torsion";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation =
            r"\left (1 - \frac{\tau_{t,Ed}}{\left( f_y / \sqrt{3} \right) / \gamma_{M0}} \right) \cdot V_{pl,Rd}";
        let numeric = replace_symbols(
            equation,
            &[
                (r"\tau_{t,Ed}", fmt_n(self.tau_t_ed, n)),
                ("f_y", fmt_n(self.f_y, n)),
                (r"\gamma_{M0}", fmt_n(self.gamma_m0, n)),
                ("V_{pl,Rd}", fmt_n(self.v_pl_rd, n)),
            ],
        );
        LatexFormula::new("V_{pl,T,Rd}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("N")
    }
}

impl_scalar_formula!(UtilizationRatio, BendingResistanceClass4, ShearResistanceHollowSectionTorsion);
