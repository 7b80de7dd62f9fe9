//! # Chapter 8: Detailing of Reinforcement and Prestressing Tendons
//!
//! Laps and tendon transmission lengths of NEN-EN 1992-1-1+C2:2011. The
//! mandrel diameter and the basic transmission length carry over unchanged
//! from EN 1992-1-1:2004.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::eurocode::en_1992_1_1_2004::detailing_reinforcement as en_2004;
use crate::formula::{impl_reissued_formula, impl_scalar_formula, Formula};
use crate::latex::{fmt_n, latex_max_curly_brackets, replace_symbols, LatexFormula, EQUALS};
use crate::units::{Dimensionless, Kn, Mm, Mpa};
use crate::validation::ensure_non_negative;

pub use en_2004::{ReleaseType, TendonType};

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

/// Minimum mandrel diameter to avoid concrete failure inside the bend (8.1).
#[derive(Debug, Clone, Serialize)]
pub struct MinimumMandrelDiameter(en_2004::MinimumMandrelDiameter);

impl MinimumMandrelDiameter {
    /// # Arguments
    /// * `f_bt` - Tensile force from ultimate loads at the start of the bend (kN)
    /// * `a_b` - Half the centre-to-centre distance between bars perpendicular to the plane of the bend (mm)
    /// * `diameter` - Bar diameter (mm)
    /// * `f_cd` - Design compressive strength (MPa)
    pub fn new(f_bt: Kn, a_b: Mm, diameter: Mm, f_cd: Mpa) -> CalcResult<Self> {
        Ok(Self(en_2004::MinimumMandrelDiameter::new(f_bt, a_b, diameter, f_cd)?))
    }
}

impl_reissued_formula!(MinimumMandrelDiameter => en_2004::MinimumMandrelDiameter, DOC);

/// Design lap length, art. 8.7.3(1).
///
/// # Formula
/// l_0 = max(α_1 · α_2 · α_3 · α_5 · α_6 · l_b,rqd; l_0,min)
#[derive(Debug, Clone, Serialize)]
pub struct DesignLapLength {
    alpha_1: Dimensionless,
    alpha_2: Dimensionless,
    alpha_3: Dimensionless,
    alpha_5: Dimensionless,
    alpha_6: Dimensionless,
    l_b_rqd: Mm,
    l_0_min: Mm,
    result: Mm,
}

impl DesignLapLength {
    /// # Arguments
    /// * `alpha_1` - Effect of the form of the bars, table 8.2
    /// * `alpha_2` - Effect of concrete minimum cover, table 8.2
    /// * `alpha_3` - Effect of confinement by transverse reinforcement, table 8.2
    /// * `alpha_5` - Effect of pressure transverse to the plane of splitting, table 8.2
    /// * `alpha_6` - Share of lapped bars within 0.65 l_0, table 8.3
    /// * `l_b_rqd` - Basic required anchorage length, formula 8.3 (mm)
    /// * `l_0_min` - Minimum lap length, formula 8.11 (mm)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alpha_1: Dimensionless,
        alpha_2: Dimensionless,
        alpha_3: Dimensionless,
        alpha_5: Dimensionless,
        alpha_6: Dimensionless,
        l_b_rqd: Mm,
        l_0_min: Mm,
    ) -> CalcResult<Self> {
        ensure_non_negative(&[
            ("alpha_1", alpha_1),
            ("alpha_2", alpha_2),
            ("alpha_3", alpha_3),
            ("alpha_5", alpha_5),
            ("alpha_6", alpha_6),
            ("l_b_rqd", l_b_rqd),
            ("l_0_min", l_0_min),
        ])?;
        let result = (alpha_1 * alpha_2 * alpha_3 * alpha_5 * alpha_6 * l_b_rqd).max(l_0_min);
        Ok(Self { alpha_1, alpha_2, alpha_3, alpha_5, alpha_6, l_b_rqd, l_0_min, result }.traced())
    }
}

impl Formula for DesignLapLength {
    type Output = f64;
    const LABEL: &'static str = "8.10";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Design lap length";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = latex_max_curly_brackets(&[
            r"\alpha_1 \cdot \alpha_2 \cdot \alpha_3 \cdot \alpha_5 \cdot \alpha_6 \cdot l_{b,rqd}",
            "l_{0,min}",
        ]);
        let numeric = replace_symbols(
            &equation,
            &[
                (r"\alpha_1", fmt_n(self.alpha_1, n)),
                (r"\alpha_2", fmt_n(self.alpha_2, n)),
                (r"\alpha_3", fmt_n(self.alpha_3, n)),
                (r"\alpha_5", fmt_n(self.alpha_5, n)),
                (r"\alpha_6", fmt_n(self.alpha_6, n)),
                ("l_{b,rqd}", fmt_n(self.l_b_rqd, n)),
                ("l_{0,min}", fmt_n(self.l_0_min, n)),
            ],
        );
        LatexFormula::new("l_0", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("mm")
    }
}

/// Basic value of the transmission length (8.16).
#[derive(Debug, Clone, Serialize)]
pub struct BasicTransmissionLength(en_2004::BasicTransmissionLength);

impl BasicTransmissionLength {
    pub fn new(alpha_1: Dimensionless, alpha_2: Dimensionless, diameter: Mm, sigma_pm0: Mpa, f_bpt: Mpa) -> CalcResult<Self> {
        Ok(Self(en_2004::BasicTransmissionLength::new(alpha_1, alpha_2, diameter, sigma_pm0, f_bpt)?))
    }
}

impl_reissued_formula!(BasicTransmissionLength => en_2004::BasicTransmissionLength, DOC);

/// Coefficient α_1 of formula 8.16 for the type of release.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseTypeCoefficient(en_2004::ReleaseTypeCoefficient);

impl ReleaseTypeCoefficient {
    pub fn new(release_type: ReleaseType) -> CalcResult<Self> {
        Ok(Self(en_2004::ReleaseTypeCoefficient::new(release_type)?))
    }
}

impl_reissued_formula!(ReleaseTypeCoefficient => en_2004::ReleaseTypeCoefficient, DOC);

/// Coefficient α_2 of formula 8.16 for the type of tendon.
#[derive(Debug, Clone, Serialize)]
pub struct TendonTypeCoefficient(en_2004::TendonTypeCoefficient);

impl TendonTypeCoefficient {
    pub fn new(tendon_type: TendonType) -> CalcResult<Self> {
        Ok(Self(en_2004::TendonTypeCoefficient::new(tendon_type)?))
    }
}

impl_reissued_formula!(TendonTypeCoefficient => en_2004::TendonTypeCoefficient, DOC);

/// Second design value of the transmission length of pretensioned tendons,
/// the less favourable of l_pt1 and l_pt2 applying, art. 8.10.2.2(3).
///
/// # Formula
/// l_pt2 = 1.2 · l_pt
#[derive(Debug, Clone, Serialize)]
pub struct DesignTransmissionLengthUpper {
    l_pt: Mm,
    result: Mm,
}

impl DesignTransmissionLengthUpper {
    /// # Arguments
    /// * `l_pt` - Basic transmission length, formula 8.16 (mm)
    pub fn new(l_pt: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("l_pt", l_pt)])?;
        Ok(Self { l_pt, result: 1.2 * l_pt }.traced())
    }
}

impl Formula for DesignTransmissionLengthUpper {
    type Output = f64;
    const LABEL: &'static str = "8.18";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Upper design value of the transmission length";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "l_{pt2}",
            fmt_n(self.result, n),
            r"1.2 \cdot l_{pt}",
            format!(r"1.2 \cdot {}", fmt_n(self.l_pt, n)),
            EQUALS,
        )
        .with_unit("mm")
    }
}

impl_scalar_formula!(
    MinimumMandrelDiameter,
    DesignLapLength,
    BasicTransmissionLength,
    ReleaseTypeCoefficient,
    TendonTypeCoefficient,
    DesignTransmissionLengthUpper,
);
