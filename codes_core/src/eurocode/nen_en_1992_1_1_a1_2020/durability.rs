//! # Chapter 4: Durability and Cover to Reinforcement (Dutch annex A1:2020)
//!
//! Minimum cover with regard to durability, c_min,dur, for reinforcing
//! steel (table 4.4N) and prestressing steel (table 4.5N). The most severe
//! exposure class present decides the row; the structural class decides
//! the column.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::eurocode::en_1992_1_1_2004::durability::StructuralClass;
use crate::eurocode::exposure_classes::{Carbonation, Chloride, ChlorideSeawater, ExposureClasses};
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, LatexFormula, EQUALS};
use crate::units::Mm;

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1A1_2020;

/// Row of tables 4.4N and 4.5N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoverRow {
    /// XD2, XD3, XS2, XS3
    SevereChloride,
    /// XD1, XS1
    ModerateChloride,
    /// XC4
    CyclicCarbonation,
    /// XC2, XC3
    Carbonation,
    /// XC1
    DryCarbonation,
    /// X0
    NoRisk,
}

impl CoverRow {
    fn select(exposure: &ExposureClasses) -> Self {
        if matches!(exposure.chloride, Chloride::XD2 | Chloride::XD3)
            || matches!(exposure.chloride_seawater, ChlorideSeawater::XS2 | ChlorideSeawater::XS3)
        {
            CoverRow::SevereChloride
        } else if matches!(exposure.chloride, Chloride::XD1) || matches!(exposure.chloride_seawater, ChlorideSeawater::XS1) {
            CoverRow::ModerateChloride
        } else {
            match exposure.carbonation {
                Carbonation::XC4 => CoverRow::CyclicCarbonation,
                Carbonation::XC2 | Carbonation::XC3 => CoverRow::Carbonation,
                Carbonation::XC1 => CoverRow::DryCarbonation,
                Carbonation::NotApplicable => CoverRow::NoRisk,
            }
        }
    }
}

fn render(symbol: &str, result: f64, n: usize, exposure: &ExposureClasses, class: StructuralClass) -> LatexFormula {
    LatexFormula::new(
        symbol,
        fmt_n(result, n),
        format!(r"structural class {class} \& exposure classes ({exposure})"),
        "",
        EQUALS,
    )
    .with_unit("mm")
}

// =============================================================================
// TABLE 4.4N: REINFORCING STEEL
// =============================================================================

/// Minimum cover c_min,dur for reinforcing steel, table 4.4N.
#[derive(Debug, Clone, Serialize)]
pub struct MinimumCoverDurabilityReinforcement {
    exposure_classes: ExposureClasses,
    structural_class: StructuralClass,
    result: Mm,
}

impl MinimumCoverDurabilityReinforcement {
    pub fn new(exposure_classes: ExposureClasses, structural_class: StructuralClass) -> CalcResult<Self> {
        let s = f64::from(structural_class.value());
        let result = match CoverRow::select(&exposure_classes) {
            CoverRow::SevereChloride => 20.0 + 5.0 * s,
            CoverRow::ModerateChloride => 15.0 + 5.0 * s,
            CoverRow::CyclicCarbonation => 10.0 + 5.0 * s,
            CoverRow::Carbonation => 5.0 + 5.0 * s,
            CoverRow::DryCarbonation => (5.0 * (s - 1.0)).max(10.0),
            CoverRow::NoRisk => (5.0 * (s - 2.0)).max(10.0),
        };
        Ok(Self { exposure_classes, structural_class, result }.traced())
    }
}

impl Formula for MinimumCoverDurabilityReinforcement {
    type Output = f64;
    const LABEL: &'static str = "4.4N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum cover with regard to durability for reinforcing steel";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        render("c_{min,dur}", self.result, n, &self.exposure_classes, self.structural_class)
    }
}

// =============================================================================
// TABLE 4.5N: PRESTRESSING STEEL
// =============================================================================

/// Minimum cover c_min,dur for prestressing steel, table 4.5N.
#[derive(Debug, Clone, Serialize)]
pub struct MinimumCoverDurabilityPrestressing {
    exposure_classes: ExposureClasses,
    structural_class: StructuralClass,
    result: Mm,
}

impl MinimumCoverDurabilityPrestressing {
    pub fn new(exposure_classes: ExposureClasses, structural_class: StructuralClass) -> CalcResult<Self> {
        let s = f64::from(structural_class.value());
        let result = match CoverRow::select(&exposure_classes) {
            CoverRow::SevereChloride => 25.0 + 5.0 * s,
            CoverRow::ModerateChloride => 20.0 + 5.0 * s,
            CoverRow::CyclicCarbonation => 15.0 + 5.0 * s,
            CoverRow::Carbonation => 10.0 + 5.0 * s,
            CoverRow::DryCarbonation => (5.0 * s).max(15.0),
            CoverRow::NoRisk => (5.0 * (s - 2.0)).max(10.0),
        };
        Ok(Self { exposure_classes, structural_class, result }.traced())
    }
}

impl Formula for MinimumCoverDurabilityPrestressing {
    type Output = f64;
    const LABEL: &'static str = "4.5N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum cover with regard to durability for prestressing steel";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        render("c_{min,dur}", self.result, n, &self.exposure_classes, self.structural_class)
    }
}

impl_scalar_formula!(MinimumCoverDurabilityReinforcement, MinimumCoverDurabilityPrestressing);
