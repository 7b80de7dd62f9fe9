//! # Chapter 3: Materials
//!
//! Strength development, shrinkage and confined-concrete relations from
//! EN 1992-1-1:2004 section 3.1.
//!
//! ## Notation
//!
//! - `f_cm` = mean compressive strength at 28 days (MPa)
//! - `t` = age of the concrete (days)
//! - `h_0` = notional size of the cross-section (mm)

use serde::{Deserialize, Serialize};

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS, RIGHTARROW};
use crate::units::{Days, Dimensionless, Mm, Mm2, Mpa};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

// =============================================================================
// STRENGTH DEVELOPMENT (3.1, 3.2)
// =============================================================================

/// Mean compressive strength at an age of t days, art. 3.1.2(6).
///
/// # Formula
/// f_cm(t) = β_cc(t) · f_cm
#[derive(Debug, Clone, Serialize)]
pub struct CompressiveStrengthAtAge {
    beta_cc_t: Dimensionless,
    f_cm: Mpa,
    result: Mpa,
}

impl CompressiveStrengthAtAge {
    /// # Arguments
    /// * `beta_cc_t` - Age coefficient β_cc(t), see [`AgeStrengthCoefficient`]
    /// * `f_cm` - Mean compressive strength at 28 days (MPa)
    pub fn new(beta_cc_t: Dimensionless, f_cm: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("beta_cc_t", beta_cc_t), ("f_cm", f_cm)])?;
        Ok(Self { beta_cc_t, f_cm, result: beta_cc_t * f_cm }.traced())
    }
}

impl Formula for CompressiveStrengthAtAge {
    type Output = f64;
    const LABEL: &'static str = "3.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Estimated concrete compressive strength at age t";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "f_{cm}(t)",
            fmt_n(self.result, n),
            r"\beta_{cc}(t) \cdot f_{cm}",
            format!(r"{} \cdot {}", fmt_n(self.beta_cc_t, n), fmt_n(self.f_cm, n)),
            EQUALS,
        )
    }
}

/// Coefficient β_cc(t) depending on the age of the concrete, art. 3.1.2(6).
///
/// # Formula
/// β_cc(t) = exp(s · (1 - √(28 / t)))
#[derive(Debug, Clone, Serialize)]
pub struct AgeStrengthCoefficient {
    s: Dimensionless,
    t: Days,
    result: Dimensionless,
}

impl AgeStrengthCoefficient {
    /// # Arguments
    /// * `s` - Cement type coefficient, see [`CementTypeCoefficient`]
    /// * `t` - Age of the concrete in days
    pub fn new(s: Dimensionless, t: Days) -> CalcResult<Self> {
        ensure_non_negative(&[("s", s)])?;
        ensure_positive(&[("t", t)])?;
        let result = (s * (1.0 - (28.0 / t).sqrt())).exp();
        Ok(Self { s, t, result }.traced())
    }
}

impl Formula for AgeStrengthCoefficient {
    type Output = f64;
    const LABEL: &'static str = "3.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient depending on the age of concrete";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\beta_{cc}(t)",
            fmt_n(self.result, n),
            r"\exp \left( s \cdot \left( 1 - \left( \frac{28}{t} \right) ^{1/2} \right) \right)",
            format!(
                r"\exp \left( {} \cdot \left( 1 - \left( \frac{{28}}{{{}}} \right) ^{{1/2}} \right) \right)",
                fmt_n(self.s, n),
                fmt_n(self.t, n)
            ),
            EQUALS,
        )
    }
}

/// Cement strength class as used in 3.1.2(6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CementClass {
    /// Rapid hardening: CEM 42.5 R, CEM 52.5 N, CEM 52.5 R
    R,
    /// Normal hardening: CEM 32.5 R, CEM 42.5 N
    N,
    /// Slow hardening: CEM 32.5 N
    S,
}

impl CementClass {
    /// Parse "R", "N" or "S" in either case
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(CementClass::R),
            "N" => Ok(CementClass::N),
            "S" => Ok(CementClass::S),
            _ => Err(CalcError::unknown_category("cement class (options: 'R', 'N' or 'S')", s)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CementClass::R => "R",
            CementClass::N => "N",
            CementClass::S => "S",
        }
    }
}

impl std::fmt::Display for CementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Coefficient s for the cement type, sub-formula of 3.2.
#[derive(Debug, Clone, Serialize)]
pub struct CementTypeCoefficient {
    cement_class: CementClass,
    result: Dimensionless,
}

impl CementTypeCoefficient {
    pub fn new(cement_class: CementClass) -> Self {
        let result = match cement_class {
            CementClass::R => 0.20,
            CementClass::N => 0.25,
            CementClass::S => 0.38,
        };
        Self { cement_class, result }.traced()
    }

    /// Construct from a class name such as `"r"` or `"N"`.
    pub fn from_class_name(name: &str) -> CalcResult<Self> {
        Ok(Self::new(CementClass::from_str_flexible(name)?))
    }
}

impl Formula for CementTypeCoefficient {
    type Output = f64;
    const LABEL: &'static str = "3.2s";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient depending on the type of cement";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "s",
            fmt_n(self.result, n),
            r"\text{cement class}",
            self.cement_class.code(),
            RIGHTARROW,
        )
    }
}

// =============================================================================
// SHRINKAGE (3.10, 3.11)
// =============================================================================

/// Development of drying shrinkage with time, art. 3.1.4(6).
///
/// # Formula
/// β_ds(t, t_s) = (t - t_s) / ((t - t_s) + 0.04 √(h_0³))
///
/// # Arguments
/// * `t` - Age of the concrete at the moment considered (days)
/// * `t_s` - Age at the beginning of drying shrinkage (days), must be below `t`
/// * `h_0` - Notional size 2A_c/u (mm), see [`NotionalSize`]
#[derive(Debug, Clone, Serialize)]
pub struct DryingShrinkageAgeCoefficient {
    t: Days,
    t_s: Days,
    h_0: Mm,
    result: Dimensionless,
}

impl DryingShrinkageAgeCoefficient {
    pub fn new(t: Days, t_s: Days, h_0: Mm) -> CalcResult<Self> {
        ensure_positive(&[("t", t)])?;
        ensure_non_negative(&[("t_s", t_s)])?;
        if t <= t_s {
            return Err(CalcError::invalid_input(
                "t",
                t.to_string(),
                format!("t has to be larger than t_s ({t_s})"),
            ));
        }
        ensure_positive(&[("h_0", h_0)])?;
        let result = (t - t_s) / ((t - t_s) + 0.04 * h_0.powi(3).sqrt());
        Ok(Self { t, t_s, h_0, result }.traced())
    }
}

impl Formula for DryingShrinkageAgeCoefficient {
    type Output = f64;
    const LABEL: &'static str = "3.10";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Coefficient for drying shrinkage due to age of concrete";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let (t, t_s) = (fmt_n(self.t, n), fmt_n(self.t_s, n));
        LatexFormula::new(
            r"\beta_{ds}(t,t_s)",
            fmt_n(self.result, n),
            r"\frac{(t - t_s)}{(t - t_s) + 0.04 \sqrt{h_0^3}}",
            format!(
                r"\frac{{({t} - {t_s})}}{{({t} - {t_s}) + 0.04 \sqrt{{{}^3}}}}",
                fmt_n(self.h_0, n)
            ),
            EQUALS,
        )
    }
}

/// Notional size h_0 of the cross-section, sub-formula of 3.10.
///
/// # Formula
/// h_0 = 2 · A_c / u
#[derive(Debug, Clone, Serialize)]
pub struct NotionalSize {
    a_c: Mm2,
    u: Mm,
    result: Mm,
}

impl NotionalSize {
    /// # Arguments
    /// * `a_c` - Concrete cross-sectional area (mm²)
    /// * `u` - Perimeter exposed to drying (mm)
    pub fn new(a_c: Mm2, u: Mm) -> CalcResult<Self> {
        ensure_positive(&[("a_c", a_c), ("u", u)])?;
        Ok(Self { a_c, u, result: 2.0 * a_c / u }.traced())
    }
}

impl Formula for NotionalSize {
    type Output = f64;
    const LABEL: &'static str = "3.10h0";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Notional size of the cross-section";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "h_0",
            fmt_n(self.result, n),
            r"2 \cdot A_c / u",
            format!(r"2 \cdot {} / {}", fmt_n(self.a_c, n), fmt_n(self.u, n)),
            EQUALS,
        )
    }
}

/// Autogenous shrinkage strain, art. 3.1.4(6).
///
/// # Formula
/// ε_ca(t) = β_as(t) · ε_ca(∞)
#[derive(Debug, Clone, Serialize)]
pub struct AutogenousShrinkage {
    beta_as_t: Dimensionless,
    epsilon_ca_inf: Dimensionless,
    result: Dimensionless,
}

impl AutogenousShrinkage {
    pub fn new(beta_as_t: Dimensionless, epsilon_ca_inf: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("beta_as_t", beta_as_t)])?;
        Ok(Self { beta_as_t, epsilon_ca_inf, result: beta_as_t * epsilon_ca_inf }.traced())
    }
}

impl Formula for AutogenousShrinkage {
    type Output = f64;
    const LABEL: &'static str = "3.11";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Autogenous shrinkage strain";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\epsilon_{ca}(t)",
            fmt_n(self.result, n),
            r"\beta_{as}(t) \cdot \epsilon_{ca}(\infty)",
            format!(r"{} \cdot {}", fmt_n(self.beta_as_t, n), fmt_n(self.epsilon_ca_inf, n)),
            EQUALS,
        )
    }
}

// =============================================================================
// STRESS-STRAIN AND CONFINEMENT (3.18, 3.26, 3.27)
// =============================================================================

/// Compressive stress on the horizontal branch of the bi-linear
/// stress-strain diagram (figure 3.3), art. 3.1.7(1).
#[derive(Debug, Clone, Serialize)]
pub struct CompressiveStressBilinear {
    f_cd: Mpa,
    result: Mpa,
}

impl CompressiveStressBilinear {
    pub fn new(f_cd: Mpa) -> CalcResult<Self> {
        ensure_non_negative(&[("f_cd", f_cd)])?;
        Ok(Self { f_cd, result: f_cd }.traced())
    }
}

impl Formula for CompressiveStressBilinear {
    type Output = f64;
    const LABEL: &'static str = "3.18";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Compressive stress in concrete";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(r"\sigma_c", fmt_n(self.result, n), "f_{cd}", fmt_n(self.f_cd, n), EQUALS)
    }
}

/// Strain at maximum strength of confined concrete, art. 3.1.9(2).
///
/// # Formula
/// ε_c2,c = ε_c2 · (f_ck,c / f_ck)²
#[derive(Debug, Clone, Serialize)]
pub struct ConfinedStrainAtMaxStrength {
    f_ck: Mpa,
    f_ck_c: Mpa,
    epsilon_c2: Dimensionless,
    result: Dimensionless,
}

impl ConfinedStrainAtMaxStrength {
    /// # Arguments
    /// * `f_ck` - Characteristic compressive strength (MPa)
    /// * `f_ck_c` - Increased characteristic strength of confined concrete (MPa)
    /// * `epsilon_c2` - Strain at reaching maximum strength (-)
    pub fn new(f_ck: Mpa, f_ck_c: Mpa, epsilon_c2: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("f_ck", f_ck), ("f_ck_c", f_ck_c)])?;
        let result = epsilon_c2 * (f_ck_c / f_ck).powi(2);
        Ok(Self { f_ck, f_ck_c, epsilon_c2, result }.traced())
    }
}

impl Formula for ConfinedStrainAtMaxStrength {
    type Output = f64;
    const LABEL: &'static str = "3.26";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Increased strain at maximum strength of confined concrete";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\epsilon_{c2,c}",
            fmt_n(self.result, n),
            r"\epsilon_{c2} \cdot ( f_{ck,c} / f_{ck} )^2",
            format!(
                r"{} \cdot ( {} / {} )^2",
                fmt_n(self.epsilon_c2, n),
                fmt_n(self.f_ck_c, n),
                fmt_n(self.f_ck, n)
            ),
            EQUALS,
        )
    }
}

/// Ultimate strain of confined concrete, art. 3.1.9(2).
///
/// # Formula
/// ε_cu2,c = ε_cu2 + 0.2 · σ_2 / f_ck
#[derive(Debug, Clone, Serialize)]
pub struct ConfinedUltimateStrain {
    f_ck: Mpa,
    sigma_2: Mpa,
    epsilon_cu2: Dimensionless,
    result: Dimensionless,
}

impl ConfinedUltimateStrain {
    pub fn new(f_ck: Mpa, sigma_2: Mpa, epsilon_cu2: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("f_ck", f_ck)])?;
        let result = epsilon_cu2 + 0.2 * sigma_2 / f_ck;
        Ok(Self { f_ck, sigma_2, epsilon_cu2, result }.traced())
    }
}

impl Formula for ConfinedUltimateStrain {
    type Output = f64;
    const LABEL: &'static str = "3.27";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Increased ultimate strain of confined concrete";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\epsilon_{cu2,c}",
            fmt_n(self.result, n),
            r"\epsilon_{cu2} + 0.2 \cdot \sigma_2 / f_{ck}",
            format!(
                r"{} + 0.2 \cdot {} / {}",
                fmt_n(self.epsilon_cu2, n),
                fmt_n(self.sigma_2, n),
                fmt_n(self.f_ck, n)
            ),
            EQUALS,
        )
    }
}

impl_scalar_formula!(
    CompressiveStrengthAtAge,
    AgeStrengthCoefficient,
    CementTypeCoefficient,
    DryingShrinkageAgeCoefficient,
    NotionalSize,
    AutogenousShrinkage,
    CompressiveStressBilinear,
    ConfinedStrainAtMaxStrength,
    ConfinedUltimateStrain,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compressive_strength_at_age() {
        let f = CompressiveStrengthAtAge::new(0.5, 30.0).unwrap();
        assert!((f.result() - 15.0).abs() < 1e-9);
        assert_eq!(
            f.latex().complete(),
            r"f_{cm}(t) = \beta_{cc}(t) \cdot f_{cm} = 0.500 \cdot 30.000 = 15.000"
        );
        assert!(CompressiveStrengthAtAge::new(-0.5, 30.0).is_err());
        assert!(CompressiveStrengthAtAge::new(0.5, -30.0).is_err());
    }

    #[test]
    fn test_age_strength_coefficient() {
        let beta = AgeStrengthCoefficient::new(0.25, 10.0).unwrap();
        assert!((beta.result() - 0.845075).abs() < 1e-6);
        assert_eq!(beta.latex().short(), r"\beta_{cc}(t) = 0.845");

        assert_eq!(AgeStrengthCoefficient::new(-0.1, 10.0).unwrap_err().error_code(), "NEGATIVE_VALUE");
        assert_eq!(AgeStrengthCoefficient::new(0.2, 0.0).unwrap_err().error_code(), "LESS_OR_EQUAL_TO_ZERO");
    }

    #[test]
    fn test_age_strength_at_28_days_is_one() {
        let beta = AgeStrengthCoefficient::new(0.38, 28.0).unwrap();
        assert!((beta.result() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cement_type_coefficient() {
        assert_eq!(CementTypeCoefficient::new(CementClass::R), 0.20);
        assert_eq!(CementTypeCoefficient::from_class_name("n").unwrap(), 0.25);
        assert_eq!(CementTypeCoefficient::from_class_name(" S ").unwrap(), 0.38);

        let err = CementTypeCoefficient::from_class_name("X").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");

        let s = CementTypeCoefficient::new(CementClass::N);
        assert_eq!(s.latex().complete(), r"s \rightarrow \text{cement class} \rightarrow N \rightarrow 0.250");
    }

    #[test]
    fn test_drying_shrinkage_age_coefficient() {
        let beta = DryingShrinkageAgeCoefficient::new(10.0, 2.0, 200.0).unwrap();
        assert!((beta.result() - 0.066041).abs() < 1e-6);
        assert_eq!(
            beta.latex().complete(),
            r"\beta_{ds}(t,t_s) = \frac{(t - t_s)}{(t - t_s) + 0.04 \sqrt{h_0^3}} = \frac{(10.00 - 2.00)}{(10.00 - 2.00) + 0.04 \sqrt{200.00^3}} = 0.07"
        );
    }

    #[test]
    fn test_drying_shrinkage_invalid_ages() {
        assert_eq!(
            DryingShrinkageAgeCoefficient::new(0.0, 0.0, 200.0).unwrap_err().error_code(),
            "LESS_OR_EQUAL_TO_ZERO"
        );
        assert_eq!(
            DryingShrinkageAgeCoefficient::new(10.0, -1.0, 200.0).unwrap_err().error_code(),
            "NEGATIVE_VALUE"
        );
        assert_eq!(
            DryingShrinkageAgeCoefficient::new(5.0, 5.0, 200.0).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert!(DryingShrinkageAgeCoefficient::new(10.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_notional_size() {
        let h_0 = NotionalSize::new(100_000.0, 1000.0).unwrap();
        assert_eq!(h_0, 200.0);
        assert_eq!(h_0.latex().complete(), r"h_0 = 2 \cdot A_c / u = 2 \cdot 100000.00 / 1000.00 = 200.00");
        assert!(NotionalSize::new(100_000.0, 0.0).is_err());
    }

    #[test]
    fn test_autogenous_shrinkage() {
        let eps = AutogenousShrinkage::new(0.5, 2.5e-5).unwrap();
        assert!((eps.result() - 1.25e-5).abs() < 1e-15);
        assert!(AutogenousShrinkage::new(-0.5, 2.5e-5).is_err());
    }

    #[test]
    fn test_compressive_stress_bilinear() {
        let sigma = CompressiveStressBilinear::new(20.0).unwrap();
        assert_eq!(sigma, 20.0);
        assert_eq!(sigma.latex().complete(), r"\sigma_c = f_{cd} = 20.000 = 20.000");
        assert!(CompressiveStressBilinear::new(-1.0).is_err());
    }

    #[test]
    fn test_confined_strains() {
        let eps_c2c = ConfinedStrainAtMaxStrength::new(30.0, 40.0, 0.002).unwrap();
        assert!((eps_c2c.result() - 0.0035556).abs() < 1e-7);
        assert!(ConfinedStrainAtMaxStrength::new(-30.0, 40.0, 0.002).is_err());

        let eps_cu2c = ConfinedUltimateStrain::new(30.0, 6.0, 0.0035).unwrap();
        assert!((eps_cu2c.result() - 0.0435).abs() < 1e-12);
        assert_eq!(
            eps_cu2c.latex().complete(),
            r"\epsilon_{cu2,c} = \epsilon_{cu2} + 0.2 \cdot \sigma_2 / f_{ck} = 0.004 + 0.2 \cdot 6.000 / 30.000 = 0.044"
        );
        assert!(ConfinedUltimateStrain::new(-30.0, 6.0, 0.0035).is_err());
    }
}
