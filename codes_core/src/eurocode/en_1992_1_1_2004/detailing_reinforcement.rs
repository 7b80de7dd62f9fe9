//! # Chapter 8: Detailing of Reinforcement and Prestressing Tendons
//!
//! Bending, bond, anchorage and transmission rules of EN 1992-1-1:2004.
//!
//! ## Conventions
//!
//! - Bar forces are given in kN, stresses in MPa, lengths in mm
//! - Lookups that depend on a category take a typed enum; text input is
//!   parsed with the enum's `from_str_flexible`

use serde::{Deserialize, Serialize};

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, latex_max_curly_brackets, LatexFormula, EQUALS, RIGHTARROW};
use crate::units::{Dimensionless, Kn, Mm, Mm2, Mpa, KN_TO_N, N_TO_KN};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

// =============================================================================
// MANDREL DIAMETER (8.3)
// =============================================================================

/// Minimum mandrel diameter Ø_m,min to avoid concrete failure inside a bend, formula 8.1.
///
/// # Formula
/// Ø_m,min = F_bt · (1 / a_b + 1 / (2 · Ø)) / f_cd
#[derive(Debug, Clone, Serialize)]
pub struct MinimumMandrelDiameter {
    f_bt: Kn,
    a_b: Mm,
    diameter: Mm,
    f_cd: Mpa,
    result: Mm,
}

impl MinimumMandrelDiameter {
    /// # Arguments
    /// * `f_bt` - Tensile force from ultimate loads at the start of the bend (kN)
    /// * `a_b` - Half the centre-to-centre distance between bars perpendicular to the plane of the bend;
    ///   for a bar adjacent to the face, the cover plus Ø/2 (mm)
    /// * `diameter` - Bar diameter (mm)
    /// * `f_cd` - Design compressive strength, at most that of C55/67 (MPa)
    pub fn new(f_bt: Kn, a_b: Mm, diameter: Mm, f_cd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("f_bt", f_bt)])?;
        ensure_positive(&[("a_b", a_b), ("diameter", diameter), ("f_cd", f_cd)])?;
        let result = f_bt * KN_TO_N * (1.0 / a_b + 1.0 / (2.0 * diameter)) / f_cd;
        Ok(Self { f_bt, a_b, diameter, f_cd, result }.traced())
    }
}

impl Formula for MinimumMandrelDiameter {
    type Output = f64;
    const LABEL: &'static str = "8.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum mandrel diameter";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "Ø_{m,min}",
            fmt_n(self.result, n),
            r"\frac{F_{bt} \left( \frac{1}{a_b} + \frac{1}{2 \cdot Ø} \right) }{f_{cd}}",
            format!(
                r"\frac{{{} \cdot 1000 \cdot \left( \frac{{1}}{{{}}} + \frac{{1}}{{2 \cdot {}}} \right)}}{{{}}}",
                fmt_n(self.f_bt, n),
                fmt_n(self.a_b, n),
                fmt_n(self.diameter, n),
                fmt_n(self.f_cd, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

// =============================================================================
// ULTIMATE BOND STRESS (8.4.2)
// =============================================================================

/// Bond conditions during concreting, figure 8.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondCondition {
    Good,
    Other,
}

impl BondCondition {
    /// Parse "good" or "other", ignoring case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(BondCondition::Good),
            "other" | "poor" => Ok(BondCondition::Other),
            _ => Err(CalcError::unknown_category("bond condition", s)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BondCondition::Good => "good",
            BondCondition::Other => "other",
        }
    }
}

/// Design value of the ultimate bond stress for ribbed bars, formula 8.2.
///
/// # Formula
/// f_bd = 2.25 · η_1 · η_2 · f_ctd
#[derive(Debug, Clone, Serialize)]
pub struct UltimateBondStress {
    eta_1: Dimensionless,
    eta_2: Dimensionless,
    f_ctd: Mpa,
    result: Mpa,
}

impl UltimateBondStress {
    /// # Arguments
    /// * `eta_1` - See [`BondConditionCoefficient`]
    /// * `eta_2` - See [`BarDiameterCoefficient`]
    /// * `f_ctd` - Design tensile strength of concrete, art. 3.1.6(2) (MPa)
    pub fn new(eta_1: Dimensionless, eta_2: Dimensionless, f_ctd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("eta_1", eta_1), ("eta_2", eta_2), ("f_ctd", f_ctd)])?;
        Ok(Self { eta_1, eta_2, f_ctd, result: 2.25 * eta_1 * eta_2 * f_ctd }.traced())
    }
}

impl Formula for UltimateBondStress {
    type Output = f64;
    const LABEL: &'static str = "8.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design value of the ultimate bond stress";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "f_{bd}",
            fmt_n(self.result, n),
            r"2.25 \cdot \eta_1 \cdot \eta_2 \cdot f_{ctd}",
            format!(
                r"2.25 \cdot {} \cdot {} \cdot {}",
                fmt_n(self.eta_1, n),
                fmt_n(self.eta_2, n),
                fmt_n(self.f_ctd, n)
            ),
            EQUALS,
        )
        .with_unit("MPa")
    }
}

/// Coefficient η_1 for the quality of the bond condition, art. 8.4.2(2).
#[derive(Debug, Clone, Serialize)]
pub struct BondConditionCoefficient {
    bond_condition: BondCondition,
    result: Dimensionless,
}

impl BondConditionCoefficient {
    pub fn new(bond_condition: BondCondition) -> CalcResult<Self> {
        let result = match bond_condition {
            BondCondition::Good => 1.0,
            BondCondition::Other => 0.7,
        };
        Ok(Self { bond_condition, result }.traced())
    }
}

impl Formula for BondConditionCoefficient {
    type Output = f64;
    const LABEL: &'static str = "8.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient for the quality of the bond condition";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\eta_1",
            fmt_n(self.result, n),
            r"bond\;condition",
            self.bond_condition.display_name(),
            RIGHTARROW,
        )
    }
}

/// Coefficient η_2 for the bar diameter, art. 8.4.2(2).
///
/// # Formula
/// - 1.0 for Ø ≤ 32 mm
/// - (132 - Ø) / 100 for Ø > 32 mm
#[derive(Debug, Clone, Serialize)]
pub struct BarDiameterCoefficient {
    diameter: Mm,
    result: Dimensionless,
}

impl BarDiameterCoefficient {
    pub fn new(diameter: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("diameter", diameter)])?;
        let result = if diameter <= 32.0 { 1.0 } else { (132.0 - diameter) / 100.0 };
        Ok(Self { diameter, result }.traced())
    }
}

impl Formula for BarDiameterCoefficient {
    type Output = f64;
    const LABEL: &'static str = "8.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient for the bar diameter";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let numeric = if self.diameter <= 32.0 {
            fmt_n(1.0, n)
        } else {
            format!("(132 - {}) / 100", fmt_n(self.diameter, n))
        };
        LatexFormula::new(
            r"\eta_2",
            fmt_n(self.result, n),
            r"\begin{matrix} 1.0 & \text{for }Ø ≤ 32 \\ (132 - Ø) / 100 & \text{for }Ø > 32 \end{matrix}",
            numeric,
            EQUALS,
        )
    }
}

// =============================================================================
// ANCHORAGE (8.4.4, 8.6)
// =============================================================================

/// Minimum anchorage length in compression, formula 8.7.
///
/// # Formula
/// l_b,min = max{0.6 · l_b,rqd; 10 · Ø; 100 mm}
#[derive(Debug, Clone, Serialize)]
pub struct MinimumCompressionAnchorage {
    l_b_rqd: Mm,
    diameter: Mm,
    result: Mm,
}

impl MinimumCompressionAnchorage {
    /// # Arguments
    /// * `l_b_rqd` - Basic required anchorage length, formula 8.3 (mm)
    /// * `diameter` - Bar diameter (mm)
    pub fn new(l_b_rqd: Mm, diameter: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("l_b_rqd", l_b_rqd), ("diameter", diameter)])?;
        let result = (0.6 * l_b_rqd).max(10.0 * diameter).max(100.0);
        Ok(Self { l_b_rqd, diameter, result }.traced())
    }
}

impl Formula for MinimumCompressionAnchorage {
    type Output = f64;
    const LABEL: &'static str = "8.7";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum anchorage length in compression";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{b,min}",
            fmt_n(self.result, n),
            latex_max_curly_brackets(&[r"0.6 \cdot l_{b,rqd}", r"10 \cdot Ø", r"100 \ \text{mm}"]),
            latex_max_curly_brackets(&[
                format!(r"0.6 \cdot {}", fmt_n(self.l_b_rqd, n)),
                format!(r"10 \cdot {}", fmt_n(self.diameter, n)),
                "100".to_string(),
            ]),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Anchorage capacity F_btd of a welded transverse bar on the inside of the main bar, formula 8.8N.
///
/// # Formula
/// F_btd = min(l_td · Ø_t · σ_td; F_wd)
#[derive(Debug, Clone, Serialize)]
pub struct WeldedTransverseBarCapacity {
    l_td: Mm,
    diameter_t: Mm,
    sigma_td: Mpa,
    f_wd: Kn,
    result: Kn,
}

impl WeldedTransverseBarCapacity {
    /// # Arguments
    /// * `l_td` - Design length of the transverse bar, see [`TransverseBarDesignLength`] (mm)
    /// * `diameter_t` - Diameter of the transverse bar (mm)
    /// * `sigma_td` - Concrete stress, see [`TransverseBarConcreteStress`] (MPa)
    /// * `f_wd` - Design shear strength of the weld (kN)
    pub fn new(l_td: Mm, diameter_t: Mm, sigma_td: Mpa, f_wd: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("l_td", l_td), ("diameter_t", diameter_t), ("sigma_td", sigma_td), ("f_wd", f_wd)])?;
        let result = (l_td * diameter_t * sigma_td * N_TO_KN).min(f_wd);
        Ok(Self { l_td, diameter_t, sigma_td, f_wd, result }.traced())
    }
}

impl Formula for WeldedTransverseBarCapacity {
    type Output = f64;
    const LABEL: &'static str = "8.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Anchorage capacity of a welded transverse bar";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_{btd}",
            fmt_n(self.result, n),
            r"\min\left( l_{td} \cdot Ø_t \cdot \sigma_{td}, F_{wd} \right)",
            format!(
                r"\min\left( {} \cdot {} \cdot {} / 1000, {} \right)",
                fmt_n(self.l_td, n),
                fmt_n(self.diameter_t, n),
                fmt_n(self.sigma_td, n),
                fmt_n(self.f_wd, n)
            ),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Design length l_td of the transverse bar, art. 8.6(2).
///
/// # Formula
/// l_td = min(1.16 · Ø_t · (f_yd / σ_td)^0.5; l_t)
#[derive(Debug, Clone, Serialize)]
pub struct TransverseBarDesignLength {
    diameter_t: Mm,
    f_yd: Mpa,
    sigma_td: Mpa,
    l_t: Mm,
    result: Mm,
}

impl TransverseBarDesignLength {
    /// # Arguments
    /// * `diameter_t` - Diameter of the transverse bar (mm)
    /// * `f_yd` - Design yield strength of the bar (MPa)
    /// * `sigma_td` - Concrete stress (MPa)
    /// * `l_t` - Length of the transverse bar, at most the spacing of the anchored bars (mm)
    pub fn new(diameter_t: Mm, f_yd: Mpa, sigma_td: Mpa, l_t: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("diameter_t", diameter_t), ("f_yd", f_yd), ("l_t", l_t)])?;
        ensure_positive(&[("sigma_td", sigma_td)])?;
        let result = (1.16 * diameter_t * (f_yd / sigma_td).sqrt()).min(l_t);
        Ok(Self { diameter_t, f_yd, sigma_td, l_t, result }.traced())
    }
}

impl Formula for TransverseBarDesignLength {
    type Output = f64;
    const LABEL: &'static str = "8.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design length of the transverse bar";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{td}",
            fmt_n(self.result, n),
            r"\min\left(l_t, 1.16 \cdot Ø_t \cdot ({\frac{f_{yd}}{\sigma_{td}}})^{0.5} \right)",
            format!(
                r"\min\left({}, 1.16 \cdot {} \cdot ({{\frac{{{}}}{{{}}}}})^{{0.5}} \right)",
                fmt_n(self.l_t, n),
                fmt_n(self.diameter_t, n),
                fmt_n(self.f_yd, n),
                fmt_n(self.sigma_td, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Concrete stress σ_td around a welded transverse bar, art. 8.6(2).
///
/// # Formula
/// σ_td = min((f_ctd + σ_cm) / y; 3 · f_cd)
#[derive(Debug, Clone, Serialize)]
pub struct TransverseBarConcreteStress {
    f_ctd: Mpa,
    sigma_cm: Mpa,
    y: Dimensionless,
    f_cd: Mpa,
    result: Mpa,
}

impl TransverseBarConcreteStress {
    /// # Arguments
    /// * `f_ctd` - Design tensile strength of concrete (MPa)
    /// * `sigma_cm` - Mean compression perpendicular to both bars (MPa)
    /// * `y` - See [`TransverseBarFunctionY`]
    /// * `f_cd` - Design compressive strength of concrete (MPa)
    pub fn new(f_ctd: Mpa, sigma_cm: Mpa, y: Dimensionless, f_cd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("f_ctd", f_ctd), ("sigma_cm", sigma_cm), ("f_cd", f_cd)])?;
        ensure_positive(&[("y", y)])?;
        let result = ((f_ctd + sigma_cm) / y).min(3.0 * f_cd);
        Ok(Self { f_ctd, sigma_cm, y, f_cd, result }.traced())
    }
}

impl Formula for TransverseBarConcreteStress {
    type Output = f64;
    const LABEL: &'static str = "8.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Concrete stress at a welded transverse bar";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\sigma_{td}",
            fmt_n(self.result, n),
            r"\min\left( 3 \cdot f_{cd}, \frac{f_{ctd} + \sigma_{cm}}{y} \right)",
            format!(
                r"\min\left(3 \cdot {}, \frac{{{} + {}}}{{{}}} \right)",
                fmt_n(self.f_cd, n),
                fmt_n(self.f_ctd, n),
                fmt_n(self.sigma_cm, n),
                fmt_n(self.y, n)
            ),
            EQUALS,
        )
        .with_unit("MPa")
    }
}

/// Auxiliary function y for the concrete stress at a transverse bar, art. 8.6(2).
///
/// # Formula
/// y = 0.015 + 0.14 · e^(-0.18 · x)
#[derive(Debug, Clone, Serialize)]
pub struct TransverseBarFunctionY {
    x: Dimensionless,
    result: Dimensionless,
}

impl TransverseBarFunctionY {
    /// * `x` - Geometry function, see [`TransverseBarFunctionX`]
    pub fn new(x: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("x", x)])?;
        Ok(Self { x, result: 0.015 + 0.14 * (-0.18 * x).exp() }.traced())
    }
}

impl Formula for TransverseBarFunctionY {
    type Output = f64;
    const LABEL: &'static str = "8.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Function y for welded transverse bars";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "y",
            fmt_n(self.result, n),
            r"0.015 + 0.14 \cdot e^{-0.18 \cdot x}",
            format!(r"0.015 + 0.14 \cdot e^{{-0.18 \cdot {}}}", fmt_n(self.x, n)),
            EQUALS,
        )
    }
}

/// Geometry function x for the concrete stress at a transverse bar, art. 8.6(2).
///
/// # Formula
/// x = 2 · c / Ø_t + 1
#[derive(Debug, Clone, Serialize)]
pub struct TransverseBarFunctionX {
    cover: Mm,
    diameter_t: Mm,
    result: Dimensionless,
}

impl TransverseBarFunctionX {
    /// # Arguments
    /// * `cover` - Concrete cover perpendicular to both bars (mm)
    /// * `diameter_t` - Diameter of the transverse bar (mm)
    pub fn new(cover: Mm, diameter_t: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("cover", cover)])?;
        ensure_positive(&[("diameter_t", diameter_t)])?;
        Ok(Self { cover, diameter_t, result: 2.0 * (cover / diameter_t) + 1.0 }.traced())
    }
}

impl Formula for TransverseBarFunctionX {
    type Output = f64;
    const LABEL: &'static str = "8.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Function x for welded transverse bars";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "x",
            fmt_n(self.result, n),
            r"2 \cdot \frac{c}{Ø_t} + 1",
            format!(r"2 \cdot \frac{{{}}}{{{}}} + 1", fmt_n(self.cover, n), fmt_n(self.diameter_t, n)),
            EQUALS,
        )
    }
}

/// Anchorage capacity of a welded cross bar for bar diameters below 12 mm, formula 8.9.
///
/// # Formula
/// F_btd = min(F_wd; 16 · A_s · f_cd · Ø_t / Ø_l)
#[derive(Debug, Clone, Serialize)]
pub struct WeldedCrossBarCapacitySmallDiameter {
    f_wd: Kn,
    diameter_t: Mm,
    diameter_l: Mm,
    a_s: Mm2,
    f_cd: Mpa,
    result: Kn,
}

impl WeldedCrossBarCapacitySmallDiameter {
    /// # Arguments
    /// * `f_wd` - Design shear strength of the weld (kN)
    /// * `diameter_t` - Diameter of the transverse bar, at most 12 mm
    /// * `diameter_l` - Diameter of the anchored bar, at most 12 mm
    /// * `a_s` - Cross-section of the anchored bar (mm²)
    /// * `f_cd` - Design compressive strength of concrete (MPa)
    pub fn new(f_wd: Kn, diameter_t: Mm, diameter_l: Mm, a_s: Mm2, f_cd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("f_wd", f_wd), ("diameter_t", diameter_t), ("a_s", a_s), ("f_cd", f_cd)])?;
        ensure_positive(&[("diameter_l", diameter_l)])?;
        let result = f_wd.min(N_TO_KN * 16.0 * a_s * f_cd * (diameter_t / diameter_l));
        Ok(Self { f_wd, diameter_t, diameter_l, a_s, f_cd, result }.traced())
    }
}

impl Formula for WeldedCrossBarCapacitySmallDiameter {
    type Output = f64;
    const LABEL: &'static str = "8.9";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Anchorage capacity of a welded cross bar for small diameters";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_{btd}",
            fmt_n(self.result, n),
            r"\min \left( F_{wd}, 16 \cdot A_s \cdot f_{cd} \cdot \frac{Ø_t}{Ø_l} \right)",
            format!(
                r"\min \left( {}, 16 \cdot {} \cdot {} \cdot \frac{{{}}}{{{}}} / 1000 \right)",
                fmt_n(self.f_wd, n),
                fmt_n(self.a_s, n),
                fmt_n(self.f_cd, n),
                fmt_n(self.diameter_t, n),
                fmt_n(self.diameter_l, n)
            ),
            EQUALS,
        )
        .with_unit("kN")
    }
}

// =============================================================================
// LARGE DIAMETER BARS AND BUNDLES (8.8, 8.9)
// =============================================================================

/// Additional shear reinforcement A_sh parallel to the tension face for large bars, formula 8.12.
///
/// # Formula
/// A_sh = 0.25 · A_s · n_1
#[derive(Debug, Clone, Serialize)]
pub struct AdditionalShearReinforcementParallel {
    a_s: Mm2,
    n_1: u32,
    result: Mm2,
}

impl AdditionalShearReinforcementParallel {
    /// # Arguments
    /// * `a_s` - Cross-sectional area of one anchored bar (mm²)
    /// * `n_1` - Number of layers with bars anchored at the same point
    pub fn new(a_s: Mm2, n_1: u32) -> CalcResult<Self> {
        ensure_non_negative(&[("a_s", a_s)])?;
        Ok(Self { a_s, n_1, result: 0.25 * a_s * f64::from(n_1) }.traced())
    }
}

impl Formula for AdditionalShearReinforcementParallel {
    type Output = f64;
    const LABEL: &'static str = "8.12";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Additional shear reinforcement parallel to the tension face";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "A_{sh}",
            fmt_n(self.result, n),
            r"0.25 \cdot A_s \cdot n_1",
            format!(r"0.25 \cdot {} \cdot {}", fmt_n(self.a_s, n), self.n_1),
            EQUALS,
        )
        .with_unit("mm^2")
    }
}

/// Additional shear reinforcement A_sv perpendicular to the tension face for large bars, formula 8.13.
///
/// # Formula
/// A_sv = 0.25 · A_s · n_2
#[derive(Debug, Clone, Serialize)]
pub struct AdditionalShearReinforcementPerpendicular {
    a_s: Mm2,
    n_2: u32,
    result: Mm2,
}

impl AdditionalShearReinforcementPerpendicular {
    /// # Arguments
    /// * `a_s` - Cross-sectional area of one anchored bar (mm²)
    /// * `n_2` - Number of bars anchored in each layer
    pub fn new(a_s: Mm2, n_2: u32) -> CalcResult<Self> {
        ensure_non_negative(&[("a_s", a_s)])?;
        Ok(Self { a_s, n_2, result: 0.25 * a_s * f64::from(n_2) }.traced())
    }
}

impl Formula for AdditionalShearReinforcementPerpendicular {
    type Output = f64;
    const LABEL: &'static str = "8.13";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Additional shear reinforcement perpendicular to the tension face";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "A_{sv}",
            fmt_n(self.result, n),
            r"0.25 \cdot A_s \cdot n_2",
            format!(r"0.25 \cdot {} \cdot {}", fmt_n(self.a_s, n), self.n_2),
            EQUALS,
        )
        .with_unit("mm^2")
    }
}

/// Upper limit of the equivalent diameter of a bundle, art. 8.9.1(2).
pub const MAX_BUNDLE_DIAMETER: Mm = 55.0;

/// Equivalent diameter Ø_n of bundled bars of equal size, formula 8.14.
///
/// # Formula
/// Ø_n = min(Ø · √n_b; 55 mm)
#[derive(Debug, Clone, Serialize)]
pub struct BundledBarEquivalentDiameter {
    diameter: Mm,
    n_b: u32,
    result: Mm,
}

impl BundledBarEquivalentDiameter {
    /// # Arguments
    /// * `diameter` - Diameter of the bars (mm)
    /// * `n_b` - Number of bars in the bundle
    pub fn new(diameter: Mm, n_b: u32) -> CalcResult<Self> {
        ensure_non_negative(&[("diameter", diameter)])?;
        let result = (diameter * f64::from(n_b).sqrt()).min(MAX_BUNDLE_DIAMETER);
        Ok(Self { diameter, n_b, result }.traced())
    }
}

impl Formula for BundledBarEquivalentDiameter {
    type Output = f64;
    const LABEL: &'static str = "8.14";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Equivalent diameter of bundled bars";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "Ø_n",
            fmt_n(self.result, n),
            r"\min \left(55 \ \text{mm}, Ø \cdot \sqrt{n_b} \right)",
            format!(
                r"\min \left(55 \ \text{{mm}}, {} \cdot \sqrt{{{}}} \right)",
                fmt_n(self.diameter, n),
                self.n_b
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

// =============================================================================
// PRETENSIONED TENDONS (8.10.2)
// =============================================================================

/// How the prestress is transferred at release, art. 8.10.2.2(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseType {
    Gradual,
    Sudden,
}

impl ReleaseType {
    /// Parse "gradual" or "sudden", ignoring case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradual" => Ok(ReleaseType::Gradual),
            "sudden" => Ok(ReleaseType::Sudden),
            _ => Err(CalcError::unknown_category("release type", s)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReleaseType::Gradual => "gradual",
            ReleaseType::Sudden => "sudden",
        }
    }
}

/// Cross-section type of a pretensioned tendon, art. 8.10.2.2(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TendonType {
    /// Indented or crimped wires of circular section
    Circular,
    /// 3- and 7-wire strands
    Strand,
}

impl TendonType {
    /// Parse "circular" or "3_7_wire_strands" (also "strand"), ignoring case
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(TendonType::Circular),
            "strand" | "strands" | "3_7_wire_strands" => Ok(TendonType::Strand),
            _ => Err(CalcError::unknown_category("tendon type", s)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TendonType::Circular => "circular",
            TendonType::Strand => "3 and 7 wire strands",
        }
    }
}

/// Basic value of the transmission length l_pt, formula 8.16.
///
/// # Formula
/// l_pt = α_1 · α_2 · Ø · σ_pm0 / f_bpt
#[derive(Debug, Clone, Serialize)]
pub struct BasicTransmissionLength {
    alpha_1: Dimensionless,
    alpha_2: Dimensionless,
    diameter: Mm,
    sigma_pm0: Mpa,
    f_bpt: Mpa,
    result: Mm,
}

impl BasicTransmissionLength {
    /// # Arguments
    /// * `alpha_1` - See [`ReleaseTypeCoefficient`]
    /// * `alpha_2` - See [`TendonTypeCoefficient`]
    /// * `diameter` - Nominal diameter of the tendon (mm)
    /// * `sigma_pm0` - Tendon stress just after release (MPa)
    /// * `f_bpt` - Bond stress for the transfer of prestress, formula 8.15 (MPa)
    pub fn new(alpha_1: Dimensionless, alpha_2: Dimensionless, diameter: Mm, sigma_pm0: Mpa, f_bpt: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("alpha_1", alpha_1), ("alpha_2", alpha_2), ("diameter", diameter), ("sigma_pm0", sigma_pm0)])?;
        ensure_positive(&[("f_bpt", f_bpt)])?;
        let result = alpha_1 * alpha_2 * diameter * sigma_pm0 / f_bpt;
        Ok(Self { alpha_1, alpha_2, diameter, sigma_pm0, f_bpt, result }.traced())
    }
}

impl Formula for BasicTransmissionLength {
    type Output = f64;
    const LABEL: &'static str = "8.16";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Basic transmission length";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{pt}",
            fmt_n(self.result, n),
            r"\alpha_1 \cdot \alpha_2 \cdot Ø \cdot \frac{\sigma_{pm0}}{f_{bpt}}",
            format!(
                r"{} \cdot {} \cdot {} \cdot \frac{{{}}}{{{}}}",
                fmt_n(self.alpha_1, n),
                fmt_n(self.alpha_2, n),
                fmt_n(self.diameter, n),
                fmt_n(self.sigma_pm0, n),
                fmt_n(self.f_bpt, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Coefficient α_1 for the type of release, art. 8.10.2.2(2).
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseTypeCoefficient {
    release_type: ReleaseType,
    result: Dimensionless,
}

impl ReleaseTypeCoefficient {
    pub fn new(release_type: ReleaseType) -> CalcResult<Self> {
        let result = match release_type {
            ReleaseType::Gradual => 1.0,
            ReleaseType::Sudden => 1.25,
        };
        Ok(Self { release_type, result }.traced())
    }
}

impl Formula for ReleaseTypeCoefficient {
    type Output = f64;
    const LABEL: &'static str = "8.16";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient for the type of release";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\alpha_1",
            fmt_n(self.result, n),
            r"release\;type",
            self.release_type.display_name(),
            RIGHTARROW,
        )
    }
}

/// Coefficient α_2 for the type of tendon, art. 8.10.2.2(2).
#[derive(Debug, Clone, Serialize)]
pub struct TendonTypeCoefficient {
    tendon_type: TendonType,
    result: Dimensionless,
}

impl TendonTypeCoefficient {
    pub fn new(tendon_type: TendonType) -> CalcResult<Self> {
        let result = match tendon_type {
            TendonType::Circular => 0.25,
            TendonType::Strand => 0.19,
        };
        Ok(Self { tendon_type, result }.traced())
    }
}

impl Formula for TendonTypeCoefficient {
    type Output = f64;
    const LABEL: &'static str = "8.16";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient for the type of tendon";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\alpha_2",
            fmt_n(self.result, n),
            r"type\;of\;wire",
            self.tendon_type.display_name().replace(' ', r"\;"),
            RIGHTARROW,
        )
    }
}

/// Bond strength f_bpd for anchorage in the ultimate limit state, formula 8.20.
///
/// # Formula
/// f_bpd = η_p2 · η_1 · f_ctd
#[derive(Debug, Clone, Serialize)]
pub struct AnchorageBondStrength {
    eta_p2: Dimensionless,
    eta_1: Dimensionless,
    f_ctd: Mpa,
    result: Mpa,
}

impl AnchorageBondStrength {
    /// # Arguments
    /// * `eta_p2` - Coefficient for the type of tendon and bond at anchorage
    /// * `eta_1` - See [`BondConditionCoefficient`]
    /// * `f_ctd` - Design tensile strength of concrete (MPa)
    pub fn new(eta_p2: Dimensionless, eta_1: Dimensionless, f_ctd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("eta_p2", eta_p2), ("eta_1", eta_1), ("f_ctd", f_ctd)])?;
        Ok(Self { eta_p2, eta_1, f_ctd, result: eta_p2 * eta_1 * f_ctd }.traced())
    }
}

impl Formula for AnchorageBondStrength {
    type Output = f64;
    const LABEL: &'static str = "8.20";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Bond strength for anchorage in the ultimate limit state";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "f_{bpd}",
            fmt_n(self.result, n),
            r"\eta_{p2} \cdot \eta_{1} \cdot f_{ctd}",
            format!(
                r"{} \cdot {} \cdot {}",
                fmt_n(self.eta_p2, n),
                fmt_n(self.eta_1, n),
                fmt_n(self.f_ctd, n)
            ),
            EQUALS,
        )
        .with_unit("MPa")
    }
}

/// Total anchorage length l_bpd of a tendon with stress σ_pd, formula 8.21.
///
/// # Formula
/// l_bpd = l_pt2 + α_2 · Ø · (σ_pd - σ_pm∞) / f_bpd
#[derive(Debug, Clone, Serialize)]
pub struct TendonAnchorageLength {
    l_pt2: Mm,
    alpha_2: Dimensionless,
    diameter: Mm,
    sigma_pd: Mpa,
    sigma_pm_inf: Mpa,
    f_bpd: Mpa,
    result: Mm,
}

impl TendonAnchorageLength {
    /// # Arguments
    /// * `l_pt2` - Upper design value of the transmission length, formula 8.18 (mm)
    /// * `alpha_2` - See [`TendonTypeCoefficient`]
    /// * `diameter` - Nominal diameter of the tendon (mm)
    /// * `sigma_pd` - Tendon stress for the force in the cracked section (MPa)
    /// * `sigma_pm_inf` - Prestress after all losses (MPa)
    /// * `f_bpd` - See [`AnchorageBondStrength`] (MPa)
    pub fn new(
        l_pt2: Mm,
        alpha_2: Dimensionless,
        diameter: Mm,
        sigma_pd: Mpa,
        sigma_pm_inf: Mpa,
        f_bpd: Mpa,
    ) -> CalcResult<Self> {
        ensure_non_negative(&[
            ("l_pt2", l_pt2),
            ("alpha_2", alpha_2),
            ("diameter", diameter),
            ("sigma_pd", sigma_pd),
            ("sigma_pm_inf", sigma_pm_inf),
        ])?;
        ensure_positive(&[("f_bpd", f_bpd)])?;
        let result = l_pt2 + alpha_2 * diameter * (sigma_pd - sigma_pm_inf) / f_bpd;
        Ok(Self { l_pt2, alpha_2, diameter, sigma_pd, sigma_pm_inf, f_bpd, result }.traced())
    }
}

impl Formula for TendonAnchorageLength {
    type Output = f64;
    const LABEL: &'static str = "8.21";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Anchorage length of pretensioned tendons";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{bpd}",
            fmt_n(self.result, n),
            r"l_{pt2} + \alpha_{2} \cdot Ø \cdot \frac{\sigma_{pd} - \sigma_{pm\infty}}{f_{bpd}}",
            format!(
                r"{} + {} \cdot {} \cdot \frac{{{} - {}}}{{{}}}",
                fmt_n(self.l_pt2, n),
                fmt_n(self.alpha_2, n),
                fmt_n(self.diameter, n),
                fmt_n(self.sigma_pd, n),
                fmt_n(self.sigma_pm_inf, n),
                fmt_n(self.f_bpd, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

impl_scalar_formula!(
    MinimumMandrelDiameter,
    UltimateBondStress,
    BondConditionCoefficient,
    BarDiameterCoefficient,
    MinimumCompressionAnchorage,
    WeldedTransverseBarCapacity,
    TransverseBarDesignLength,
    TransverseBarConcreteStress,
    TransverseBarFunctionY,
    TransverseBarFunctionX,
    WeldedCrossBarCapacitySmallDiameter,
    AdditionalShearReinforcementParallel,
    AdditionalShearReinforcementPerpendicular,
    BundledBarEquivalentDiameter,
    BasicTransmissionLength,
    ReleaseTypeCoefficient,
    TendonTypeCoefficient,
    AnchorageBondStrength,
    TendonAnchorageLength,
);
