//! # Chapter 5: Structural Analysis
//!
//! Geometric imperfections, effective spans and flange widths, second order
//! effects and elastic prestress losses.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::formula::{impl_check_formula, impl_scalar_formula, Formula};
use crate::latex::{check_verdict, fmt_n, latex_min_curly_brackets, LatexFormula, EQUALS, RIGHTARROW, TO};
use crate::units::{Dimensionless, Kn, Knm, Mm, Mm2, Mm4, Mpa, M, M_TO_MM, N, N_TO_KN};
use crate::validation::{ensure_non_negative, ensure_non_negative_list, ensure_positive, ensure_same_length};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

// =============================================================================
// IMPERFECTIONS (5.1 - 5.6)
// =============================================================================

/// Initial inclination imperfection θ_i, formula 5.1.
///
/// # Formula
/// θ_i = θ_0 · α_h · α_m
#[derive(Debug, Clone, Serialize)]
pub struct InitialInclinationImperfection {
    theta_0: Dimensionless,
    alpha_h: Dimensionless,
    alpha_m: Dimensionless,
    result: Dimensionless,
}

impl InitialInclinationImperfection {
    /// # Arguments
    /// * `theta_0` - Basic value θ_0 (recommended 1/200)
    /// * `alpha_h` - Reduction factor for length or height, see [`ReductionFactorLengthOrHeight`]
    /// * `alpha_m` - Reduction factor for number of members, see [`ReductionFactorNumberOfMembers`]
    pub fn new(theta_0: Dimensionless, alpha_h: Dimensionless, alpha_m: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_0", theta_0), ("alpha_h", alpha_h), ("alpha_m", alpha_m)])?;
        Ok(Self { theta_0, alpha_h, alpha_m, result: theta_0 * alpha_h * alpha_m }.traced())
    }
}

impl Formula for InitialInclinationImperfection {
    type Output = f64;
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Initial inclination imperfection";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        // θ_i is of the order 1/200, fewer decimals would print zero
        LatexFormula::new(
            r"\theta_i",
            fmt_n(self.result, n.max(4)),
            r"\theta_0 \cdot \alpha_h \cdot \alpha_m",
            format!(
                r"{} \cdot {} \cdot {}",
                fmt_n(self.theta_0, n),
                fmt_n(self.alpha_h, n),
                fmt_n(self.alpha_m, n)
            ),
            EQUALS,
        )
    }
}

/// Reduction factor α_h for length or height, formula 5.1.
///
/// # Formula
/// α_h = 2 / √l, with 2/3 ≤ α_h ≤ 1
#[derive(Debug, Clone, Serialize)]
pub struct ReductionFactorLengthOrHeight {
    length: M,
    result: Dimensionless,
}

impl ReductionFactorLengthOrHeight {
    /// * `length` - Length or height l in m, see art. 5.2(6)
    pub fn new(length: M) -> CalcResult<Self> {
        ensure_positive(&[("length", length)])?;
        let result = (2.0 / length.sqrt()).clamp(2.0 / 3.0, 1.0);
        Ok(Self { length, result }.traced())
    }
}

impl Formula for ReductionFactorLengthOrHeight {
    type Output = f64;
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Reduction factor for length or height";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\alpha_h",
            fmt_n(self.result, n),
            r"\min( \max(2 / \sqrt{l}; 2/3); 1)",
            format!(r"\min( \max(2 / \sqrt{{{}}}; 2/3); 1)", fmt_n(self.length, n)),
            EQUALS,
        )
    }
}

/// Reduction factor α_m for the number of members, formula 5.1.
///
/// # Formula
/// α_m = √(0.5 · (1 + 1/m))
#[derive(Debug, Clone, Serialize)]
pub struct ReductionFactorNumberOfMembers {
    members: u32,
    result: Dimensionless,
}

impl ReductionFactorNumberOfMembers {
    /// * `members` - Number of vertical members contributing to the total effect
    pub fn new(members: u32) -> CalcResult<Self> {
        if members == 0 {
            return Err(CalcError::less_or_equal_to_zero("members", 0.0));
        }
        let result = (0.5 * (1.0 + 1.0 / f64::from(members))).sqrt();
        Ok(Self { members, result }.traced())
    }
}

impl Formula for ReductionFactorNumberOfMembers {
    type Output = f64;
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Reduction factor for number of members";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\alpha_m",
            fmt_n(self.result, n),
            r"\sqrt{0.5 \cdot ( 1 + 1 / m)}",
            format!(r"\sqrt{{0.5 \cdot ( 1 + 1 / {})}}", self.members),
            EQUALS,
        )
    }
}

/// Transverse force H_i for unbraced members, formula 5.3a.
///
/// # Formula
/// H_i = θ_i · N
#[derive(Debug, Clone, Serialize)]
pub struct TransverseForceUnbracedMembers {
    theta_i: Dimensionless,
    n_axial_force: Kn,
    result: Kn,
}

impl TransverseForceUnbracedMembers {
    pub fn new(theta_i: Dimensionless, n_axial_force: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_i", theta_i), ("n_axial_force", n_axial_force)])?;
        Ok(Self { theta_i, n_axial_force, result: theta_i * n_axial_force }.traced())
    }
}

impl Formula for TransverseForceUnbracedMembers {
    type Output = f64;
    const LABEL: &'static str = "5.3a";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Transverse force for unbraced members";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "H_{i}",
            fmt_n(self.result, n),
            r"\theta_{i} \cdot N",
            format!(r"{} \cdot {}", fmt_n(self.theta_i, n), fmt_n(self.n_axial_force, n)),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Transverse force H_i for braced members, formula 5.3b.
///
/// # Formula
/// H_i = 2 · θ_i · N
#[derive(Debug, Clone, Serialize)]
pub struct TransverseForceBracedMembers {
    theta_i: Dimensionless,
    n_axial_force: Kn,
    result: Kn,
}

impl TransverseForceBracedMembers {
    pub fn new(theta_i: Dimensionless, n_axial_force: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_i", theta_i), ("n_axial_force", n_axial_force)])?;
        Ok(Self { theta_i, n_axial_force, result: 2.0 * theta_i * n_axial_force }.traced())
    }
}

impl Formula for TransverseForceBracedMembers {
    type Output = f64;
    const LABEL: &'static str = "5.3b";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Transverse force for braced members";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "H_{i}",
            fmt_n(self.result, n),
            r"2 \cdot \theta_{i} \cdot N",
            format!(r"2 \cdot {} \cdot {}", fmt_n(self.theta_i, n), fmt_n(self.n_axial_force, n)),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Effect of the inclination on bracing systems, formula 5.4.
///
/// # Formula
/// H_i = θ_i · (N_b - N_a)
#[derive(Debug, Clone, Serialize)]
pub struct TransverseForceBracingSystem {
    theta_i: Dimensionless,
    n_a: Kn,
    n_b: Kn,
    result: Kn,
}

impl TransverseForceBracingSystem {
    pub fn new(theta_i: Dimensionless, n_a: Kn, n_b: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_i", theta_i), ("n_a", n_a), ("n_b", n_b)])?;
        Ok(Self { theta_i, n_a, n_b, result: theta_i * (n_b - n_a) }.traced())
    }
}

impl Formula for TransverseForceBracingSystem {
    type Output = f64;
    const LABEL: &'static str = "5.4";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effect of the inclination on bracing systems";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "H_{i}",
            fmt_n(self.result, n),
            r"\theta_{i} \cdot (N_{b} - N_{a})",
            format!(
                r"{} \cdot ({} - {})",
                fmt_n(self.theta_i, n),
                fmt_n(self.n_b, n),
                fmt_n(self.n_a, n)
            ),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Effect of the inclination on a roof diaphragm, formula 5.6.
///
/// # Formula
/// H_i = θ_i · N_a
#[derive(Debug, Clone, Serialize)]
pub struct TransverseForceRoofDiaphragm {
    theta_i: Dimensionless,
    n_a: Kn,
    result: Kn,
}

impl TransverseForceRoofDiaphragm {
    pub fn new(theta_i: Dimensionless, n_a: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("theta_i", theta_i), ("n_a", n_a)])?;
        Ok(Self { theta_i, n_a, result: theta_i * n_a }.traced())
    }
}

impl Formula for TransverseForceRoofDiaphragm {
    type Output = f64;
    const LABEL: &'static str = "5.6";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effect of the inclination on a roof diaphragm";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "H_{i}",
            fmt_n(self.result, n),
            r"\theta_{i} \cdot N_{a}",
            format!(r"{} \cdot {}", fmt_n(self.theta_i, n), fmt_n(self.n_a, n)),
            EQUALS,
        )
        .with_unit("kN")
    }
}

// =============================================================================
// GEOMETRY (5.7, 5.8)
// =============================================================================

/// Effective width of the i-th flange b_eff,i, formulas 5.7a and 5.7b.
///
/// # Formula
/// b_eff,i = min(0.2 · b_i + 0.1 · l_0; 0.2 · l_0; b_i)
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveFlangeWidth {
    b_i: M,
    l_0: M,
    result: M,
}

impl EffectiveFlangeWidth {
    /// # Arguments
    /// * `b_i` - Available width of the i-th flange (m)
    /// * `l_0` - Distance between points of zero moment, figure 5.2 (m)
    pub fn new(b_i: M, l_0: M) -> CalcResult<Self> {
        ensure_non_negative(&[("b_i", b_i), ("l_0", l_0)])?;
        let result = (0.2 * b_i + 0.1 * l_0).min(0.2 * l_0).min(b_i);
        Ok(Self { b_i, l_0, result }.traced())
    }
}

impl Formula for EffectiveFlangeWidth {
    type Output = f64;
    const LABEL: &'static str = "5.7a, 5.7b";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effective flange width";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let b_i = fmt_n(self.b_i, n);
        let l_0 = fmt_n(self.l_0, n);
        LatexFormula::new(
            "b_{eff,i}",
            fmt_n(self.result, n),
            latex_min_curly_brackets(&[r"0.2 \cdot b_{i} + 0.1 \cdot l_{0}", r"0.2 \cdot l_{0}", "b_{i}"]),
            latex_min_curly_brackets(&[
                format!(r"0.2 \cdot {b_i} + 0.1 \cdot {l_0}"),
                format!(r"0.2 \cdot {l_0}"),
                b_i,
            ]),
            EQUALS,
        )
        .with_unit("m")
    }
}

/// Effective span l_eff of beams and slabs, formula 5.8.
///
/// # Formula
/// l_eff = l_n + a_1 + a_2
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSpan {
    l_n: M,
    a_1: M,
    a_2: M,
    result: M,
}

impl EffectiveSpan {
    /// # Arguments
    /// * `l_n` - Clear distance between the faces of the supports (m)
    /// * `a_1`, `a_2` - Support allowances at each end of the span, figure 5.4 (m)
    pub fn new(l_n: M, a_1: M, a_2: M) -> CalcResult<Self> {
        ensure_non_negative(&[("l_n", l_n), ("a_1", a_1), ("a_2", a_2)])?;
        Ok(Self { l_n, a_1, a_2, result: l_n + a_1 + a_2 }.traced())
    }
}

impl Formula for EffectiveSpan {
    type Output = f64;
    const LABEL: &'static str = "5.8";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effective span of beams and slabs";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{eff}",
            fmt_n(self.result, n),
            "l_{n} + a_{1} + a_{2}",
            format!("{} + {} + {}", fmt_n(self.l_n, n), fmt_n(self.a_1, n), fmt_n(self.a_2, n)),
            EQUALS,
        )
        .with_unit("m")
    }
}

// =============================================================================
// SECOND ORDER EFFECTS (5.18 - 5.39)
// =============================================================================

/// Criterion for ignoring global second order effects in buildings, formula 5.18.
///
/// # Formula
/// F_V,Ed ≤ k_1 · n_s / (n_s + 1.6) · Σ E_cd · I_c / L²
#[derive(Debug, Clone, Serialize)]
pub struct GeneralSecondOrderEffectsCheck {
    f_v_ed: Kn,
    k_1: Dimensionless,
    n_s: Dimensionless,
    length: M,
    e_cd: Mpa,
    i_c: Mm4,
    right_hand_side: Kn,
    result: bool,
}

impl GeneralSecondOrderEffectsCheck {
    /// # Arguments
    /// * `f_v_ed` - Total vertical load on braced and bracing members (kN)
    /// * `k_1` - National parameter, recommended 0.31
    /// * `n_s` - Number of storeys
    /// * `length` - Height of the building above the level of moment restraint (m)
    /// * `e_cd` - Design modulus of elasticity of concrete (MPa)
    /// * `i_c` - Second moment of area of the bracing members, uncracked (mm⁴)
    pub fn new(f_v_ed: Kn, k_1: Dimensionless, n_s: Dimensionless, length: M, e_cd: Mpa, i_c: Mm4) -> CalcResult<Self> {
        ensure_non_negative(&[("f_v_ed", f_v_ed), ("k_1", k_1), ("n_s", n_s), ("e_cd", e_cd), ("i_c", i_c)])?;
        ensure_positive(&[("length", length)])?;
        let length_mm = length * M_TO_MM;
        let right_hand_side = k_1 * (n_s / (n_s + 1.6)) * (e_cd * i_c / (length_mm * length_mm)) * N_TO_KN;
        let result = f_v_ed <= right_hand_side;
        Ok(Self { f_v_ed, k_1, n_s, length, e_cd, i_c, right_hand_side, result }.traced())
    }

    pub fn left_hand_side(&self) -> Kn {
        self.f_v_ed
    }

    pub fn right_hand_side(&self) -> Kn {
        self.right_hand_side
    }

    /// Unity check F_V,Ed / limit
    pub fn ratio(&self) -> Dimensionless {
        self.f_v_ed / self.right_hand_side
    }
}

impl Formula for GeneralSecondOrderEffectsCheck {
    type Output = bool;
    const LABEL: &'static str = "5.18";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Criterion for global second order effects in buildings";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "CHECK",
            check_verdict(self.result),
            r"F_{V,Ed} \leq k_1 \cdot \frac{n_s}{n_s + 1.6} \cdot \frac{\sum E_{cd} \cdot I_c}{L^2}",
            format!(
                r"{} \leq {} \cdot \frac{{{}}}{{{} + 1.6}} \cdot \frac{{\sum {} \cdot {}}}{{{}^2}}",
                fmt_n(self.f_v_ed, n),
                fmt_n(self.k_1, n),
                fmt_n(self.n_s, n),
                fmt_n(self.n_s, n),
                fmt_n(self.e_cd, n),
                fmt_n(self.i_c, n),
                fmt_n(self.length * M_TO_MM, n)
            ),
            RIGHTARROW,
        )
    }
}

/// Nominal stiffness EI of slender compression members, formula 5.21.
///
/// # Formula
/// EI = K_c · E_cd · I_c + K_s · E_s · I_s
#[derive(Debug, Clone, Serialize)]
pub struct NominalStiffness {
    k_c: Dimensionless,
    e_cd: Mpa,
    i_c: Mm4,
    k_s: Dimensionless,
    e_s: Mpa,
    i_s: Mm4,
    result: f64,
}

impl NominalStiffness {
    /// # Arguments
    /// * `k_c` - Factor for effects of cracking and creep, see [`FactorKc`]
    /// * `e_cd` - Design modulus of elasticity of concrete (MPa)
    /// * `i_c` - Second moment of area of the concrete section (mm⁴)
    /// * `k_s` - Factor for the contribution of reinforcement, see [`FactorKs`]
    /// * `e_s` - Design modulus of elasticity of reinforcement (MPa)
    /// * `i_s` - Second moment of area of reinforcement about the concrete centroid (mm⁴)
    pub fn new(k_c: Dimensionless, e_cd: Mpa, i_c: Mm4, k_s: Dimensionless, e_s: Mpa, i_s: Mm4) -> CalcResult<Self> {
        ensure_non_negative(&[
            ("k_c", k_c),
            ("e_cd", e_cd),
            ("i_c", i_c),
            ("k_s", k_s),
            ("e_s", e_s),
            ("i_s", i_s),
        ])?;
        let result = k_c * e_cd * i_c + k_s * e_s * i_s;
        Ok(Self { k_c, e_cd, i_c, k_s, e_s, i_s, result }.traced())
    }
}

impl Formula for NominalStiffness {
    type Output = f64;
    const LABEL: &'static str = "5.21";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Nominal stiffness of slender compression members";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "EI",
            fmt_n(self.result, n),
            r"K_{c} \cdot E_{cd} \cdot I_{c} + K_{s} \cdot E_{s} \cdot I_{s}",
            format!(
                r"{} \cdot {} \cdot {} + {} \cdot {} \cdot {}",
                fmt_n(self.k_c, n),
                fmt_n(self.e_cd, n),
                fmt_n(self.i_c, n),
                fmt_n(self.k_s, n),
                fmt_n(self.e_s, n),
                fmt_n(self.i_s, n)
            ),
            EQUALS,
        )
        .with_unit(r"Nmm^2")
    }
}

/// Minimum reinforcement ratio for the simplified K_s/K_c pair of 5.8.7.2(3).
const RHO_LIMIT: Dimensionless = 0.01;

fn ensure_rho_above_limit(rho: Dimensionless) -> CalcResult<()> {
    if rho <= RHO_LIMIT {
        return Err(CalcError::invalid_input(
            "rho",
            rho.to_string(),
            format!("geometric reinforcement ratio must be greater than {RHO_LIMIT}"),
        ));
    }
    Ok(())
}

/// Factor K_s for the contribution of reinforcement, formula 5.26.
///
/// Zero for ρ ≥ 0.01 under the simplified approach.
#[derive(Debug, Clone, Serialize)]
pub struct FactorKs {
    rho: Dimensionless,
    result: Dimensionless,
}

impl FactorKs {
    /// * `rho` - Geometric reinforcement ratio A_s / A_c, greater than 0.01
    pub fn new(rho: Dimensionless) -> CalcResult<Self> {
        ensure_rho_above_limit(rho)?;
        Ok(Self { rho, result: 0.0 }.traced())
    }
}

impl Formula for FactorKs {
    type Output = f64;
    const LABEL: &'static str = "5.26";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Factor for contribution of reinforcement";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new("K_s", fmt_n(self.result, n), "0", "0", EQUALS)
    }
}

/// Factor K_c for effects of cracking and creep, formula 5.26.
///
/// # Formula
/// K_c = 0.3 / (1 + 0.5 · φ_ef)
#[derive(Debug, Clone, Serialize)]
pub struct FactorKc {
    phi_ef: Dimensionless,
    rho: Dimensionless,
    result: Dimensionless,
}

impl FactorKc {
    /// # Arguments
    /// * `phi_ef` - Effective creep ratio, see 5.8.4
    /// * `rho` - Geometric reinforcement ratio A_s / A_c, greater than 0.01
    pub fn new(phi_ef: Dimensionless, rho: Dimensionless) -> CalcResult<Self> {
        ensure_rho_above_limit(rho)?;
        ensure_positive(&[("phi_ef", phi_ef)])?;
        Ok(Self { phi_ef, rho, result: 0.3 / (1.0 + 0.5 * phi_ef) }.traced())
    }
}

impl Formula for FactorKc {
    type Output = f64;
    const LABEL: &'static str = "5.26";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Factor for effects of cracking and creep";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "K_c",
            fmt_n(self.result, n),
            r"\frac{0.3}{1 + 0.5 \cdot \phi_{ef}}",
            format!(r"\frac{{0.3}}{{1 + 0.5 \cdot {}}}", fmt_n(self.phi_ef, n)),
            EQUALS,
        )
    }
}

/// Effective design modulus of elasticity E_cd,eff, formula 5.27.
///
/// # Formula
/// E_cd,eff = E_cd / (1 + φ_ef)
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDesignModulusElasticity {
    e_cd: Mpa,
    phi_ef: Dimensionless,
    result: Mpa,
}

impl EffectiveDesignModulusElasticity {
    pub fn new(e_cd: Mpa, phi_ef: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("e_cd", e_cd), ("phi_ef", phi_ef)])?;
        Ok(Self { e_cd, phi_ef, result: e_cd / (1.0 + phi_ef) }.traced())
    }
}

impl Formula for EffectiveDesignModulusElasticity {
    type Output = f64;
    const LABEL: &'static str = "5.27";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Effective design modulus of elasticity";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "E_{cd,eff}",
            fmt_n(self.result, n),
            r"\frac{E_{cd}}{1 + \phi_{ef}}",
            format!(r"\frac{{{}}}{{1 + {}}}", fmt_n(self.e_cd, n), fmt_n(self.phi_ef, n)),
            EQUALS,
        )
        .with_unit("MPa")
    }
}

/// Nominal second order moment M_2, formula 5.33.
///
/// # Formula
/// M_2 = N_Ed · (1/r) · l_0² / c
#[derive(Debug, Clone, Serialize)]
pub struct NominalSecondOrderMoment {
    n_ed: Kn,
    curvature: f64,
    l_0: M,
    c: Dimensionless,
    result: Knm,
}

impl NominalSecondOrderMoment {
    /// # Arguments
    /// * `n_ed` - Design axial force (kN)
    /// * `curvature` - Curvature 1/r, see 5.8.8.3 (1/m)
    /// * `l_0` - Effective length (m)
    /// * `c` - Factor for the curvature distribution, see 5.8.8.2(4)
    pub fn new(n_ed: Kn, curvature: f64, l_0: M, c: Dimensionless) -> CalcResult<Self> {
        ensure_positive(&[("n_ed", n_ed), ("curvature", curvature), ("l_0", l_0), ("c", c)])?;
        let result = n_ed * curvature * l_0 * l_0 / c;
        Ok(Self { n_ed, curvature, l_0, c, result }.traced())
    }
}

impl Formula for NominalSecondOrderMoment {
    type Output = f64;
    const LABEL: &'static str = "5.33";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Nominal second order moment";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "M_{2}",
            fmt_n(self.result, n),
            r"N_{Ed} \cdot \left(\frac{1}{r}\right) \cdot \frac{l_{o}^2}{c}",
            format!(
                r"{} \cdot \left({}\right) \cdot \frac{{{}^2}}{{{}}}",
                fmt_n(self.n_ed, n),
                fmt_n(self.curvature, n),
                fmt_n(self.l_0, n),
                fmt_n(self.c, n)
            ),
            EQUALS,
        )
        .with_unit("kNm")
    }
}

/// Relative eccentricity criterion for separate checks in y and z, formula 5.38b.
///
/// Satisfied when either ratio is at most 0.2, or when one eccentricity is zero.
#[derive(Debug, Clone, Serialize)]
pub struct RelativeEccentricityRatioCheck {
    e_y: Mm,
    e_z: Mm,
    b_eq: Mm,
    h_eq: Mm,
    result: bool,
}

impl RelativeEccentricityRatioCheck {
    /// # Arguments
    /// * `e_y`, `e_z` - First order eccentricities along y and z (mm)
    /// * `b_eq`, `h_eq` - Equivalent width and depth of the section (mm)
    pub fn new(e_y: Mm, e_z: Mm, b_eq: Mm, h_eq: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("e_y", e_y), ("e_z", e_z)])?;
        ensure_positive(&[("b_eq", b_eq), ("h_eq", h_eq)])?;
        let result = if e_y == 0.0 || e_z == 0.0 {
            true
        } else {
            let y = e_y / h_eq;
            let z = e_z / b_eq;
            y / z <= 0.2 || z / y <= 0.2
        };
        Ok(Self { e_y, e_z, b_eq, h_eq, result }.traced())
    }
}

impl Formula for RelativeEccentricityRatioCheck {
    type Output = bool;
    const LABEL: &'static str = "5.38b";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Relative eccentricity ratio";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let (e_y, e_z, b_eq, h_eq) = (fmt_n(self.e_y, n), fmt_n(self.e_z, n), fmt_n(self.b_eq, n), fmt_n(self.h_eq, n));
        LatexFormula::new(
            "CHECK",
            check_verdict(self.result),
            r"\left(\frac{e_{y}/h_{eq}}{e_{z}/b_{eq}} \leq 0.2 \text{ or } \frac{e_{z}/b_{eq}}{e_{y}/h_{eq}} \leq 0.2 \right)",
            format!(
                r"\left(\frac{{{e_y}/{h_eq}}}{{{e_z}/{b_eq}}} \leq 0.2 \text{{ or }} \frac{{{e_z}/{b_eq}}}{{{e_y}/{h_eq}}} \leq 0.2 \right)"
            ),
            TO,
        )
    }
}

/// Simplified criterion for biaxial bending, formula 5.39.
///
/// # Formula
/// (M_Edz / M_Rdz)^a + (M_Edy / M_Rdy)^a ≤ 1
#[derive(Debug, Clone, Serialize)]
pub struct BiaxialBendingCheck {
    m_edz: Knm,
    m_rdz: Knm,
    m_edy: Knm,
    m_rdy: Knm,
    a: Dimensionless,
    result: bool,
}

impl BiaxialBendingCheck {
    /// # Arguments
    /// * `m_edz`, `m_edy` - Design moments including second order effects (kNm)
    /// * `m_rdz`, `m_rdy` - Moment resistances (kNm)
    /// * `a` - Exponent: 2 for circular and elliptical sections, table in 5.8.9(4) otherwise
    pub fn new(m_edz: Knm, m_rdz: Knm, m_edy: Knm, m_rdy: Knm, a: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("m_edz", m_edz), ("m_edy", m_edy)])?;
        ensure_positive(&[("m_rdz", m_rdz), ("m_rdy", m_rdy), ("a", a)])?;
        let result = (m_edz / m_rdz).powf(a) + (m_edy / m_rdy).powf(a) <= 1.0;
        Ok(Self { m_edz, m_rdz, m_edy, m_rdy, a, result }.traced())
    }
}

impl Formula for BiaxialBendingCheck {
    type Output = bool;
    const LABEL: &'static str = "5.39";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Simplified criterion for biaxial bending";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let a = fmt_n(self.a, n);
        LatexFormula::new(
            "CHECK",
            check_verdict(self.result),
            r"\left( \frac{M_{Edz}}{M_{Rdz}} \right)^{a} + \left( \frac{M_{Edy}}{M_{Rdy}} \right)^{a} \leq 1",
            format!(
                r"\left( \frac{{{}}}{{{}}} \right)^{{{a}}} + \left( \frac{{{}}}{{{}}} \right)^{{{a}}} \leq 1",
                fmt_n(self.m_edz, n),
                fmt_n(self.m_rdz, n),
                fmt_n(self.m_edy, n),
                fmt_n(self.m_rdy, n)
            ),
            TO,
        )
    }
}

// =============================================================================
// PRESTRESS (5.44)
// =============================================================================

/// Elastic prestress loss ΔP_el for successively tensioned tendons, formula 5.44.
///
/// # Formula
/// ΔP_el = A_p · E_p · Σ [j · Δσ_c(t) / E_cm(t)]
#[derive(Debug, Clone, Serialize)]
pub struct PrestressLoss {
    a_p: Mm2,
    e_p: Mpa,
    j: Vec<Dimensionless>,
    delta_sigma_c_t: Vec<Mpa>,
    e_cm_t: Vec<Mpa>,
    result: N,
}

impl PrestressLoss {
    /// # Arguments
    /// * `a_p` - Cross-sectional area of the tendon (mm²)
    /// * `e_p` - Modulus of elasticity of the tendon (MPa)
    /// * `j` - (n - 1) / 2n per stage, n the number of identical tendons successively prestressed
    /// * `delta_sigma_c_t` - Stress variation at the centroid of the tendons per stage (MPa)
    /// * `e_cm_t` - Modulus of elasticity of concrete at each stage (MPa)
    pub fn new(
        a_p: Mm2,
        e_p: Mpa,
        j: Vec<Dimensionless>,
        delta_sigma_c_t: Vec<Mpa>,
        e_cm_t: Vec<Mpa>,
    ) -> CalcResult<Self> {
        ensure_non_negative(&[("a_p", a_p), ("e_p", e_p)])?;
        ensure_same_length(("j", &j), ("delta_sigma_c_t", &delta_sigma_c_t))?;
        ensure_same_length(("j", &j), ("e_cm_t", &e_cm_t))?;
        ensure_non_negative_list("j", &j)?;
        ensure_non_negative_list("delta_sigma_c_t", &delta_sigma_c_t)?;
        for (idx, e) in e_cm_t.iter().enumerate() {
            let field = format!("e_cm_t[{idx}]");
            ensure_positive(&[(field.as_str(), *e)])?;
        }

        let sum: f64 = j
            .iter()
            .zip(&delta_sigma_c_t)
            .zip(&e_cm_t)
            .map(|((j, sigma), e)| j * sigma / e)
            .sum();
        let result = a_p * e_p * sum;
        Ok(Self { a_p, e_p, j, delta_sigma_c_t, e_cm_t, result }.traced())
    }
}

impl Formula for PrestressLoss {
    type Output = f64;
    const LABEL: &'static str = "5.44";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Prestress loss due to elastic deformation";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let terms: Vec<String> = self
            .j
            .iter()
            .zip(&self.delta_sigma_c_t)
            .zip(&self.e_cm_t)
            .map(|((j, sigma), e)| format!(r"\frac{{{} \cdot {}}}{{{}}}", fmt_n(*j, n), fmt_n(*sigma, n), fmt_n(*e, n)))
            .collect();
        LatexFormula::new(
            r"\Delta P_{el}",
            fmt_n(self.result, n),
            r"A_{p} \cdot E_{p} \cdot \sum_{i=1}^{n} \frac{j_{i} \cdot \Delta \sigma_{c,i}(t)}{E_{cm,i}(t)}",
            format!(
                r"{} \cdot {} \cdot \left( {} \right)",
                fmt_n(self.a_p, n),
                fmt_n(self.e_p, n),
                terms.join(" + ")
            ),
            EQUALS,
        )
        .with_unit("N")
    }
}

impl_scalar_formula!(
    InitialInclinationImperfection,
    ReductionFactorLengthOrHeight,
    ReductionFactorNumberOfMembers,
    TransverseForceUnbracedMembers,
    TransverseForceBracedMembers,
    TransverseForceBracingSystem,
    TransverseForceRoofDiaphragm,
    EffectiveFlangeWidth,
    EffectiveSpan,
    NominalStiffness,
    FactorKs,
    FactorKc,
    EffectiveDesignModulusElasticity,
    NominalSecondOrderMoment,
    PrestressLoss,
);

impl_check_formula!(GeneralSecondOrderEffectsCheck, RelativeEccentricityRatioCheck, BiaxialBendingCheck);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_inclination_imperfection() {
        let theta = InitialInclinationImperfection::new(0.005, 0.8, 0.9).unwrap();
        assert!((theta.result() - 0.0036).abs() < 1e-12);
        assert_eq!(
            theta.latex().complete(),
            r"\theta_i = \theta_0 \cdot \alpha_h \cdot \alpha_m = 0.005 \cdot 0.800 \cdot 0.900 = 0.0036"
        );
        assert!(InitialInclinationImperfection::new(-0.005, 0.8, 0.9).is_err());
    }

    #[test]
    fn test_reduction_factor_length_or_height() {
        let alpha = ReductionFactorLengthOrHeight::new(5.0).unwrap();
        assert!((alpha.result() - 0.894427).abs() < 1e-6);
        assert_eq!(ReductionFactorLengthOrHeight::new(2.0).unwrap(), 1.0);
        assert_eq!(ReductionFactorLengthOrHeight::new(16.0).unwrap(), 2.0 / 3.0);
        assert_eq!(
            alpha.latex().complete(),
            r"\alpha_h = \min( \max(2 / \sqrt{l}; 2/3); 1) = \min( \max(2 / \sqrt{5.000}; 2/3); 1) = 0.894"
        );
        assert!(ReductionFactorLengthOrHeight::new(0.0).is_err());
    }

    #[test]
    fn test_reduction_factor_number_of_members() {
        let alpha = ReductionFactorNumberOfMembers::new(4).unwrap();
        assert!((alpha.result() - 0.790569).abs() < 1e-6);
        assert_eq!(
            alpha.latex().complete(),
            r"\alpha_m = \sqrt{0.5 \cdot ( 1 + 1 / m)} = \sqrt{0.5 \cdot ( 1 + 1 / 4)} = 0.791"
        );
        assert_eq!(ReductionFactorNumberOfMembers::new(1).unwrap(), 1.0);
        assert_eq!(ReductionFactorNumberOfMembers::new(0).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
    }

    #[test]
    fn test_transverse_forces() {
        assert!((TransverseForceUnbracedMembers::new(0.0036, 1000.0).unwrap().result() - 3.6).abs() < 1e-9);
        assert!((TransverseForceBracedMembers::new(0.0036, 1000.0).unwrap().result() - 7.2).abs() < 1e-9);
        assert!((TransverseForceBracingSystem::new(0.0036, 500.0, 1500.0).unwrap().result() - 3.6).abs() < 1e-9);
        assert!((TransverseForceRoofDiaphragm::new(0.0036, 500.0).unwrap().result() - 1.8).abs() < 1e-9);

        let h = TransverseForceBracingSystem::new(0.005, 500.0, 1500.0).unwrap();
        assert_eq!(
            h.latex().complete(),
            r"H_{i} = \theta_{i} \cdot (N_{b} - N_{a}) = 0.005 \cdot (1500.000 - 500.000) = 5.000 \ kN"
        );
        assert!(TransverseForceBracedMembers::new(0.005, -1.0).is_err());
        assert!(TransverseForceRoofDiaphragm::new(-0.005, 1.0).is_err());
    }

    #[test]
    fn test_effective_flange_width() {
        assert!((EffectiveFlangeWidth::new(2.0, 10.0).unwrap().result() - 1.4).abs() < 1e-12);
        assert_eq!(EffectiveFlangeWidth::new(1.0, 10.0).unwrap(), 1.0);
        let b = EffectiveFlangeWidth::new(2.0, 10.0).unwrap();
        assert_eq!(
            b.latex_with_decimals(1).complete(),
            r"b_{eff,i} = \min \left\{0.2 \cdot b_{i} + 0.1 \cdot l_{0}; 0.2 \cdot l_{0}; b_{i}\right\} = \min \left\{0.2 \cdot 2.0 + 0.1 \cdot 10.0; 0.2 \cdot 10.0; 2.0\right\} = 1.4 \ m"
        );
        assert!(EffectiveFlangeWidth::new(-2.0, 10.0).is_err());
    }

    #[test]
    fn test_effective_span() {
        let l = EffectiveSpan::new(6.0, 0.15, 0.2).unwrap();
        assert!((l.result() - 6.35).abs() < 1e-12);
        assert_eq!(l.latex().short(), r"l_{eff} = 6.350 \ m");
        assert!(EffectiveSpan::new(6.0, -0.15, 0.2).is_err());
    }

    #[test]
    fn test_general_second_order_effects() {
        let check = GeneralSecondOrderEffectsCheck::new(2000.0, 0.31, 5.0, 15.0, 10000.0, 1.0e11).unwrap();
        assert!((check.right_hand_side() - 1043.771044).abs() < 1e-6);
        assert!((check.ratio() - 1.916129).abs() < 1e-6);
        assert_eq!(check, false);

        let check = GeneralSecondOrderEffectsCheck::new(1000.0, 0.31, 5.0, 15.0, 10000.0, 1.0e11).unwrap();
        assert_eq!(check, true);
        assert_eq!(
            check.latex_with_decimals(2).complete(),
            r"CHECK \rightarrow F_{V,Ed} \leq k_1 \cdot \frac{n_s}{n_s + 1.6} \cdot \frac{\sum E_{cd} \cdot I_c}{L^2} \rightarrow 1000.00 \leq 0.31 \cdot \frac{5.00}{5.00 + 1.6} \cdot \frac{\sum 10000.00 \cdot 100000000000.00}{15000.00^2} \rightarrow OK"
        );
        assert!(GeneralSecondOrderEffectsCheck::new(1000.0, 0.31, 5.0, 0.0, 10000.0, 1.0e11).is_err());
    }

    #[test]
    fn test_nominal_stiffness() {
        let ei = NominalStiffness::new(0.4, 30000.0, 1.0e9, 1.0, 200000.0, 1.0e7).unwrap();
        assert_eq!(ei, 1.4e13);
        assert!(NominalStiffness::new(0.4, 30000.0, -1.0e9, 1.0, 200000.0, 1.0e7).is_err());
    }

    #[test]
    fn test_factors_ks_kc() {
        assert_eq!(FactorKs::new(0.02).unwrap(), 0.0);
        assert_eq!(FactorKs::new(0.01).unwrap_err().error_code(), "INVALID_INPUT");

        let k_c = FactorKc::new(2.0, 0.02).unwrap();
        assert!((k_c.result() - 0.15).abs() < 1e-12);
        assert_eq!(
            k_c.latex().complete(),
            r"K_c = \frac{0.3}{1 + 0.5 \cdot \phi_{ef}} = \frac{0.3}{1 + 0.5 \cdot 2.000} = 0.150"
        );
        assert!(FactorKc::new(0.0, 0.02).is_err());
        assert!(FactorKc::new(2.0, 0.005).is_err());
    }

    #[test]
    fn test_effective_design_modulus() {
        let e = EffectiveDesignModulusElasticity::new(33000.0, 2.0).unwrap();
        assert_eq!(e, 11000.0);
        assert_eq!(
            e.latex_with_decimals(0).complete(),
            r"E_{cd,eff} = \frac{E_{cd}}{1 + \phi_{ef}} = \frac{33000}{1 + 2} = 11000 \ MPa"
        );
    }

    #[test]
    fn test_nominal_second_order_moment() {
        let m = NominalSecondOrderMoment::new(1000.0, 0.00002, 5.0, 10.0).unwrap();
        assert!((m.result() - 0.05).abs() < 1e-12);
        assert!(NominalSecondOrderMoment::new(1000.0, 0.00002, 5.0, 0.0).is_err());
    }

    #[test]
    fn test_relative_eccentricity_ratio() {
        assert_eq!(RelativeEccentricityRatioCheck::new(100.0, 50.0, 200.0, 300.0).unwrap(), false);
        assert_eq!(RelativeEccentricityRatioCheck::new(100.0, 10.0, 200.0, 300.0).unwrap(), true);
        assert_eq!(RelativeEccentricityRatioCheck::new(0.0, 10.0, 200.0, 300.0).unwrap(), true);

        let check = RelativeEccentricityRatioCheck::new(100.0, 10.0, 200.0, 300.0).unwrap();
        assert_eq!(
            check.latex_with_decimals(0).complete(),
            r"CHECK \to \left(\frac{e_{y}/h_{eq}}{e_{z}/b_{eq}} \leq 0.2 \text{ or } \frac{e_{z}/b_{eq}}{e_{y}/h_{eq}} \leq 0.2 \right) \to \left(\frac{100/300}{10/200} \leq 0.2 \text{ or } \frac{10/200}{100/300} \leq 0.2 \right) \to OK"
        );
        assert!(RelativeEccentricityRatioCheck::new(100.0, 10.0, 0.0, 300.0).is_err());
    }

    #[test]
    fn test_biaxial_bending() {
        assert_eq!(BiaxialBendingCheck::new(50.0, 100.0, 40.0, 80.0, 1.5).unwrap(), true);
        let check = BiaxialBendingCheck::new(80.0, 100.0, 70.0, 80.0, 2.0).unwrap();
        assert_eq!(check, false);
        assert_eq!(check.latex().short(), r"CHECK \to \text{Not OK}");
        assert!(BiaxialBendingCheck::new(80.0, 100.0, 70.0, 80.0, 0.0).is_err());
    }

    #[test]
    fn test_prestress_loss() {
        let loss = PrestressLoss::new(1000.0, 200000.0, vec![0.2, 0.3], vec![1.5, 2.5], vec![30000.0, 32000.0]).unwrap();
        assert!((loss.result() - 6687.5).abs() < 1e-6);
        assert_eq!(
            loss.latex_with_decimals(1).numeric_equation,
            r"1000.0 \cdot 200000.0 \cdot \left( \frac{0.2 \cdot 1.5}{30000.0} + \frac{0.3 \cdot 2.5}{32000.0} \right)"
        );
    }

    #[test]
    fn test_prestress_loss_validation() {
        let err = PrestressLoss::new(1000.0, 200000.0, vec![0.2], vec![1.5, 2.5], vec![30000.0, 32000.0]).unwrap_err();
        assert_eq!(err.error_code(), "LIST_LENGTH_MISMATCH");

        let err = PrestressLoss::new(1000.0, 200000.0, vec![0.2, 0.3], vec![1.5, 2.5], vec![30000.0, 0.0]).unwrap_err();
        assert_eq!(err.field(), Some("e_cm_t[1]"));

        assert!(PrestressLoss::new(1000.0, 200000.0, vec![-0.2], vec![1.5], vec![30000.0]).is_err());
    }

    #[test]
    fn test_bracing_force_and_effective_modulus_reject_negative_inputs() {
        let cases = [
            (TransverseForceBracingSystem::new(-0.005, 500.0, 1500.0).err(), "theta_i"),
            (TransverseForceBracingSystem::new(0.005, -500.0, 1500.0).err(), "n_a"),
            (TransverseForceBracingSystem::new(0.005, 500.0, -1500.0).err(), "n_b"),
            (EffectiveDesignModulusElasticity::new(-33000.0, 2.0).err(), "e_cd"),
            (EffectiveDesignModulusElasticity::new(33000.0, -2.0).err(), "phi_ef"),
        ];
        for (err, field) in cases {
            let err = err.expect("negative input accepted");
            assert_eq!((err.field(), err.error_code()), (Some(field), "NEGATIVE_VALUE"));
        }
    }
}
