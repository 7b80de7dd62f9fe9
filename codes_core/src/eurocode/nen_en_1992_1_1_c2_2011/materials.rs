//! # Chapter 3: Materials
//!
//! Concrete and prestressing steel relations from NEN-EN 1992-1-1+C2:2011
//! section 3. Clauses that are unchanged from EN 1992-1-1:2004 wrap the
//! formula of that edition.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::eurocode::en_1992_1_1_2004::materials as en_2004;
use crate::formula::{impl_reissued_formula, impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS};
use crate::units::{Days, Dimensionless, Hours, Mpa, Percentage};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

// =============================================================================
// STRENGTH AND CREEP (3.1, 3.6)
// =============================================================================

/// Mean compressive strength at an age of t days (3.1).
#[derive(Debug, Clone, Serialize)]
pub struct CompressiveStrengthAtAge(en_2004::CompressiveStrengthAtAge);

impl CompressiveStrengthAtAge {
    /// # Arguments
    /// * `beta_cc_t` - Age coefficient β_cc(t)
    /// * `f_cm` - Mean compressive strength at 28 days (MPa)
    pub fn new(beta_cc_t: Dimensionless, f_cm: Mpa) -> CalcResult<Self> {
        Ok(Self(en_2004::CompressiveStrengthAtAge::new(beta_cc_t, f_cm)?))
    }
}

impl_reissued_formula!(CompressiveStrengthAtAge => en_2004::CompressiveStrengthAtAge, DOC);

/// Creep deformation of concrete at time infinity, art. 3.1.4(3).
///
/// # Formula
/// ε_cc(∞, t_0) = φ(∞, t_0) · (σ_c / E_c)
#[derive(Debug, Clone, Serialize)]
pub struct CreepDeformation {
    phi_inf_t0: Dimensionless,
    sigma_c: Mpa,
    e_c: Mpa,
    result: Dimensionless,
}

impl CreepDeformation {
    /// # Arguments
    /// * `phi_inf_t0` - Creep coefficient φ(∞, t_0), figure 3.1 or annex B
    /// * `sigma_c` - Constant compressive stress (MPa)
    /// * `e_c` - Tangent modulus, 1.05 · E_cm (MPa)
    pub fn new(phi_inf_t0: Dimensionless, sigma_c: Mpa, e_c: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("phi_inf_t0", phi_inf_t0), ("sigma_c", sigma_c)])?;
        ensure_positive(&[("e_c", e_c)])?;
        Ok(Self { phi_inf_t0, sigma_c, e_c, result: phi_inf_t0 * sigma_c / e_c }.traced())
    }
}

impl Formula for CreepDeformation {
    type Output = f64;
    const LABEL: &'static str = "3.6";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Creep deformation of concrete";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\epsilon_{cc}(\infty, t_0)",
            fmt_n(self.result, n),
            r"\varphi(\infty, t_0) \cdot ( \sigma_c / E_c )",
            format!(
                r"{} \cdot ( {} / {} )",
                fmt_n(self.phi_inf_t0, n),
                fmt_n(self.sigma_c, n),
                fmt_n(self.e_c, n)
            ),
            EQUALS,
        )
    }
}

// =============================================================================
// SHRINKAGE (3.8, 3.11, 3.13)
// =============================================================================

/// Total shrinkage strain, art. 3.1.4(6).
///
/// # Formula
/// ε_cs = ε_cd + ε_ca
#[derive(Debug, Clone, Serialize)]
pub struct TotalShrinkage {
    epsilon_cd: Dimensionless,
    epsilon_ca: Dimensionless,
    result: Dimensionless,
}

impl TotalShrinkage {
    /// # Arguments
    /// * `epsilon_cd` - Drying shrinkage strain
    /// * `epsilon_ca` - Autogenous shrinkage strain
    pub fn new(epsilon_cd: Dimensionless, epsilon_ca: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("epsilon_cd", epsilon_cd), ("epsilon_ca", epsilon_ca)])?;
        Ok(Self { epsilon_cd, epsilon_ca, result: epsilon_cd + epsilon_ca }.traced())
    }
}

impl Formula for TotalShrinkage {
    type Output = f64;
    const LABEL: &'static str = "3.8";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Total shrinkage strain";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\epsilon_{cs}",
            fmt_n(self.result, n),
            r"\epsilon_{cd} + \epsilon_{ca}",
            format!("{} + {}", fmt_n(self.epsilon_cd, n), fmt_n(self.epsilon_ca, n)),
            EQUALS,
        )
    }
}

/// Autogenous shrinkage strain (3.11).
#[derive(Debug, Clone, Serialize)]
pub struct AutogenousShrinkage(en_2004::AutogenousShrinkage);

impl AutogenousShrinkage {
    pub fn new(beta_as_t: Dimensionless, epsilon_ca_inf: Dimensionless) -> CalcResult<Self> {
        Ok(Self(en_2004::AutogenousShrinkage::new(beta_as_t, epsilon_ca_inf)?))
    }
}

impl_reissued_formula!(AutogenousShrinkage => en_2004::AutogenousShrinkage, DOC);

/// Time coefficient β_as(t) of the autogenous shrinkage, art. 3.1.4(6).
///
/// # Formula
/// β_as(t) = 1 - exp(-0.2 · t^0.5)
#[derive(Debug, Clone, Serialize)]
pub struct AutogenousShrinkageTimeCoefficient {
    t: Days,
    result: Dimensionless,
}

impl AutogenousShrinkageTimeCoefficient {
    pub fn new(t: Days) -> CalcResult<Self> {
        ensure_non_negative(&[("t", t)])?;
        Ok(Self { t, result: 1.0 - (-0.2 * t.sqrt()).exp() }.traced())
    }
}

impl Formula for AutogenousShrinkageTimeCoefficient {
    type Output = f64;
    const LABEL: &'static str = "3.13";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Time coefficient of the autogenous shrinkage";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\beta_{as}(t)",
            fmt_n(self.result, n),
            r"1 - \exp(-0.2 \cdot t^{0.5})",
            format!(r"1 - \exp(-0.2 \cdot {}^{{0.5}})", fmt_n(self.t, n)),
            EQUALS,
        )
    }
}

// =============================================================================
// STRESS-STRAIN RELATION FOR NON-LINEAR ANALYSIS (3.14)
// =============================================================================

/// Stress-strain relation for short term uniaxial loading, art. 3.1.5(1).
///
/// # Formula
/// σ_c / f_cm = (k·η - η²) / (1 + (k - 2)·η)
#[derive(Debug, Clone, Serialize)]
pub struct StressStrainShortTermLoading {
    k: Dimensionless,
    eta: Dimensionless,
    result: Dimensionless,
}

impl StressStrainShortTermLoading {
    /// # Arguments
    /// * `k` - Shape factor, see [`StressStrainFactorK`]
    /// * `eta` - Strain over peak strain, see [`StrainRatio`]
    pub fn new(k: Dimensionless, eta: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("k", k), ("eta", eta)])?;
        let result = (k * eta - eta.powi(2)) / (1.0 + (k - 2.0) * eta);
        Ok(Self { k, eta, result }.traced())
    }
}

impl Formula for StressStrainShortTermLoading {
    type Output = f64;
    const LABEL: &'static str = "3.14";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Compressive stress to strength ratio";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let k = fmt_n(self.k, n);
        let eta = fmt_n(self.eta, n);
        LatexFormula::new(
            r"\frac{\sigma_c}{f_{cm}}",
            fmt_n(self.result, n),
            r"\frac{k \cdot \eta - \eta^2}{1 + (k-2) \cdot \eta}",
            format!(r"\frac{{{k} \cdot {eta} - {eta}^2}}{{1 + ({k}-2) \cdot {eta}}}"),
            EQUALS,
        )
    }
}

/// Strain ratio η of formula 3.14.
///
/// # Formula
/// η = ε_c / ε_c1
#[derive(Debug, Clone, Serialize)]
pub struct StrainRatio {
    epsilon_c: Dimensionless,
    epsilon_c1: Dimensionless,
    result: Dimensionless,
}

impl StrainRatio {
    pub fn new(epsilon_c: Dimensionless, epsilon_c1: Dimensionless) -> CalcResult<Self> {
        if epsilon_c1 == 0.0 {
            return Err(CalcError::invalid_input("epsilon_c1", "0", "the peak strain cannot be zero"));
        }
        Ok(Self { epsilon_c, epsilon_c1, result: epsilon_c / epsilon_c1 }.traced())
    }
}

impl Formula for StrainRatio {
    type Output = f64;
    const LABEL: &'static str = "3.14";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Strain to peak strain ratio";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\eta",
            fmt_n(self.result, n),
            r"\epsilon_c / \epsilon_{c1}",
            format!("{} / {}", fmt_n(self.epsilon_c, n), fmt_n(self.epsilon_c1, n)),
            EQUALS,
        )
    }
}

/// Shape factor k of formula 3.14.
///
/// # Formula
/// k = 1.05 · E_cm · |ε_c1| / f_cm
#[derive(Debug, Clone, Serialize)]
pub struct StressStrainFactorK {
    e_cm: Mpa,
    epsilon_c1: Dimensionless,
    f_cm: Mpa,
    result: Dimensionless,
}

impl StressStrainFactorK {
    /// # Arguments
    /// * `e_cm` - Secant modulus of elasticity (MPa)
    /// * `epsilon_c1` - Strain at peak stress, table 3.1
    /// * `f_cm` - Mean compressive strength (MPa)
    pub fn new(e_cm: Mpa, epsilon_c1: Dimensionless, f_cm: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("e_cm", e_cm)])?;
        ensure_positive(&[("f_cm", f_cm)])?;
        let result = 1.05 * e_cm * epsilon_c1.abs() / f_cm;
        Ok(Self { e_cm, epsilon_c1, f_cm, result }.traced())
    }
}

impl Formula for StressStrainFactorK {
    type Output = f64;
    const LABEL: &'static str = "3.14";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Shape factor of the stress-strain relation";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "k",
            fmt_n(self.result, n),
            r"1.05 \cdot E_{cm} \cdot |\epsilon_{c1}| / f_{cm}",
            format!(
                r"1.05 \cdot {} \cdot |{}| / {}",
                fmt_n(self.e_cm, n),
                fmt_n(self.epsilon_c1, n),
                fmt_n(self.f_cm, n)
            ),
            EQUALS,
        )
    }
}

// =============================================================================
// DESIGN VALUES (3.16, 3.19 - 3.20)
// =============================================================================

/// Design tensile strength of concrete, art. 3.1.6(2).
///
/// # Formula
/// f_ctd = α_ct · f_ctk,0.05 / γ_C
#[derive(Debug, Clone, Serialize)]
pub struct DesignTensileStrength {
    alpha_ct: Dimensionless,
    f_ctk_0_05: Mpa,
    gamma_c: Dimensionless,
    result: Mpa,
}

impl DesignTensileStrength {
    /// # Arguments
    /// * `alpha_ct` - Coefficient for long term effects on the tensile strength
    /// * `f_ctk_0_05` - 5% fractile of the characteristic tensile strength (MPa)
    /// * `gamma_c` - Partial factor for concrete, art. 2.4.2.4
    pub fn new(alpha_ct: Dimensionless, f_ctk_0_05: Mpa, gamma_c: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("alpha_ct", alpha_ct), ("f_ctk_0_05", f_ctk_0_05)])?;
        ensure_positive(&[("gamma_c", gamma_c)])?;
        Ok(Self { alpha_ct, f_ctk_0_05, gamma_c, result: alpha_ct * f_ctk_0_05 / gamma_c }.traced())
    }
}

impl Formula for DesignTensileStrength {
    type Output = f64;
    const LABEL: &'static str = "3.16";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design value of the concrete tensile strength";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "f_{ctd}",
            fmt_n(self.result, n),
            r"\alpha_{ct} \cdot f_{ctk,0.05} / \gamma_C",
            format!(
                r"{} \cdot {} / {}",
                fmt_n(self.alpha_ct, n),
                fmt_n(self.f_ctk_0_05, n),
                fmt_n(self.gamma_c, n)
            ),
            EQUALS,
        )
        .with_unit("MPa")
    }
}

/// Highest characteristic strength covered by the rectangular stress block.
const MAX_F_CK_STRESS_BLOCK: Mpa = 90.0;

/// Factor λ for the effective height of the compression zone, art. 3.1.7(3).
///
/// # Formula
/// λ = 0.8 for f_ck ≤ 50 MPa
/// λ = 0.8 - (f_ck - 50) / 400 for 50 < f_ck ≤ 90 MPa
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveCompressionZoneFactor {
    f_ck: Mpa,
    result: Dimensionless,
}

impl EffectiveCompressionZoneFactor {
    pub fn new(f_ck: Mpa) -> CalcResult<Self> {
        let result = if f_ck <= 50.0 {
            0.8
        } else if f_ck <= MAX_F_CK_STRESS_BLOCK {
            0.8 - (f_ck - 50.0) / 400.0
        } else {
            return Err(CalcError::invalid_input(
                "f_ck",
                f_ck.to_string(),
                "the stress block is defined up to f_ck = 90 MPa",
            ));
        };
        Ok(Self { f_ck, result }.traced())
    }
}

impl Formula for EffectiveCompressionZoneFactor {
    type Output = f64;
    const LABEL: &'static str = "3.19 - 3.20";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Factor for the effective height of the compression zone";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let (equation, numeric) = if self.f_ck <= 50.0 {
            ("0.8".to_string(), "0.8".to_string())
        } else {
            ("0.8 - (f_{ck} - 50) / 400".to_string(), format!("0.8 - ({} - 50) / 400", fmt_n(self.f_ck, n)))
        };
        LatexFormula::new(r"\lambda", fmt_n(self.result, n), equation, numeric, EQUALS)
    }
}

// =============================================================================
// PRESTRESSING STEEL (3.30)
// =============================================================================

/// Relaxation loss of class 3 prestressing steel (hot rolled and processed
/// bars), art. 3.3.2(7).
///
/// # Formula
/// Δσ_pr / σ_pi = 1.98 · ρ_1000 · e^(8μ) · (t / 1000)^(0.75(1 - μ)) · 10⁻⁵
#[derive(Debug, Clone, Serialize)]
pub struct RelaxationLossClass3 {
    rho_1000: Percentage,
    mu: Dimensionless,
    t: Hours,
    result: Dimensionless,
}

impl RelaxationLossClass3 {
    /// # Arguments
    /// * `rho_1000` - Relaxation loss 1000 hours after tensioning at 20 °C (%)
    /// * `mu` - Ratio σ_pi / f_pk
    /// * `t` - Time after tensioning (hours)
    pub fn new(rho_1000: Percentage, mu: Dimensionless, t: Hours) -> CalcResult<Self> {
        ensure_non_negative(&[("rho_1000", rho_1000), ("t", t)])?;
        let result = 1.98 * rho_1000 * (8.0 * mu).exp() * (t / 1000.0).powf(0.75 * (1.0 - mu)) * 1e-5;
        Ok(Self { rho_1000, mu, t, result }.traced())
    }
}

impl Formula for RelaxationLossClass3 {
    type Output = f64;
    const LABEL: &'static str = "3.30";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Relaxation loss ratio of class 3 prestressing steel";
    const DEFAULT_DECIMALS: usize = 6;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\frac{\Delta \sigma_{pr}}{\sigma_{pi}}",
            fmt_n(self.result, n),
            r"1.98 \cdot \rho_{1000} \cdot e^{8 \cdot \mu} \left( \frac{t}{1000} \right)^{0.75 \cdot (1 - \mu)} \cdot 10^{-5}",
            format!(
                r"1.98 \cdot {rho} \cdot e^{{8 \cdot {mu}}} \left( \frac{{{t}}}{{1000}} \right)^{{0.75 \cdot (1 - {mu})}} \cdot 10^{{-5}}",
                rho = fmt_n(self.rho_1000, n),
                mu = fmt_n(self.mu, n),
                t = fmt_n(self.t, n),
            ),
            EQUALS,
        )
    }
}

impl_scalar_formula!(
    CompressiveStrengthAtAge,
    CreepDeformation,
    TotalShrinkage,
    AutogenousShrinkage,
    AutogenousShrinkageTimeCoefficient,
    StressStrainShortTermLoading,
    StrainRatio,
    StressStrainFactorK,
    DesignTensileStrength,
    EffectiveCompressionZoneFactor,
    RelaxationLossClass3,
);
