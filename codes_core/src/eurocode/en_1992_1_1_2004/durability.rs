//! # Chapter 4: Durability and Cover to Reinforcement
//!
//! Concrete cover requirements of EN 1992-1-1:2004 section 4.4.
//!
//! The structural class (table 4.3) and the exposure classes (table 4.1)
//! together select the durability cover c_min,dur from table 4.4N/4.5N; see
//! [`crate::eurocode::nen_en_1992_1_1_a1_2020::durability`] for those tables.
//!
//! ## Workflow
//!
//! ```rust
//! use codes_core::eurocode::concrete_strength::ConcreteStrengthClass;
//! use codes_core::eurocode::en_1992_1_1_2004::durability::{MinimumCover, MinimumCoverBond, NominalCover, StructuralClassTable};
//! use codes_core::eurocode::exposure_classes::ExposureClasses;
//! use codes_core::formula::Formula;
//!
//! let exposure = ExposureClasses::from_exposure_list(&["XC3"]).unwrap();
//! let class = StructuralClassTable::new(exposure, 50.0, ConcreteStrengthClass::C30_37, false, false).unwrap();
//! assert_eq!(class.structural_class().value(), 4);
//!
//! let c_min_b = MinimumCoverBond::new(16.0, false).unwrap();
//! let c_min = MinimumCover::new(c_min_b.result(), 25.0, 0.0, 0.0, 0.0).unwrap();
//! let c_nom = NominalCover::new(c_min.result(), 10.0).unwrap();
//! assert_eq!(c_nom, 35.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::eurocode::concrete_strength::ConcreteStrengthClass;
use crate::eurocode::exposure_classes::{Carbonation, Chloride, ChlorideSeawater, ExposureClasses};
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, latex_max_curly_brackets, LatexFormula, EQUALS, RIGHTARROW};
use crate::units::{Mm, Years};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

// =============================================================================
// COVER CONSTANTS (art. 4.4.1.2 and 4.4.1.3)
// =============================================================================

/// Surface against which the concrete is cast, art. 4.4.1.3(4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastingSurface {
    /// Permanently exposed surface
    PermanentlyExposed,
    /// Cast in formwork
    Formwork,
    /// Cast on prepared ground, including blinding
    PreparedGround,
    /// Cast directly against soil
    DirectlyAgainstSoil,
}

impl CastingSurface {
    pub fn display_name(&self) -> &'static str {
        match self {
            CastingSurface::PermanentlyExposed => "permanently exposed",
            CastingSurface::Formwork => "formwork",
            CastingSurface::PreparedGround => "prepared ground (including blinding)",
            CastingSurface::DirectlyAgainstSoil => "directly against soil",
        }
    }
}

/// Abrasion class of the concrete surface, art. 4.4.1.2(13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbrasionClass {
    /// No abrasion
    #[default]
    NotApplicable,
    /// Moderate abrasion
    XM1,
    /// Heavy abrasion
    XM2,
    /// Extreme abrasion
    XM3,
}

/// Constants that adjust the cover for surface conditions.
///
/// Values follow the recommended values of EN 1992-1-1:2004; a national
/// annex may substitute its own through the public fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalCoverConstants {
    /// Cover increase for uneven surfaces, art. 4.4.1.2(11)
    pub cover_increase_for_uneven_surface: Mm,
    /// Allowance in design for deviation Δc_dev, art. 4.4.1.3(1)
    pub default_delta_c_dev: Mm,
    /// Sacrificial layer for abrasion classes XM1/XM2/XM3 (k1, k2, k3)
    pub abrasion_increase: [Mm; 3],
}

impl Default for NominalCoverConstants {
    fn default() -> Self {
        NominalCoverConstants {
            cover_increase_for_uneven_surface: 5.0,
            default_delta_c_dev: 10.0,
            abrasion_increase: [5.0, 10.0, 15.0],
        }
    }
}

impl NominalCoverConstants {
    /// Cover increase for an abrasion class
    pub fn cover_increase_for_abrasion_class(&self, class: AbrasionClass) -> Mm {
        match class {
            AbrasionClass::NotApplicable => 0.0,
            AbrasionClass::XM1 => self.abrasion_increase[0],
            AbrasionClass::XM2 => self.abrasion_increase[1],
            AbrasionClass::XM3 => self.abrasion_increase[2],
        }
    }

    /// Minimum nominal cover imposed by the casting surface, art. 4.4.1.3(4).
    ///
    /// Zero when the surface imposes no additional requirement.
    pub fn minimum_cover_with_regard_to_casting_surface(&self, c_min_dur: Mm, surface: CastingSurface) -> Mm {
        match surface {
            CastingSurface::PermanentlyExposed | CastingSurface::Formwork => 0.0,
            CastingSurface::PreparedGround => c_min_dur + 40.0,
            CastingSurface::DirectlyAgainstSoil => c_min_dur + 75.0,
        }
    }

    /// LaTeX description of the casting surface requirement
    pub fn minimum_cover_with_regard_to_casting_surface_latex(&self, surface: CastingSurface) -> String {
        match surface {
            CastingSurface::PermanentlyExposed | CastingSurface::Formwork => {
                format!("0 (No additional requirements for {})", surface.display_name())
            }
            CastingSurface::PreparedGround => {
                format!(r"k1 \ge c_{{min,dur}} + 40 mm for {}", surface.display_name())
            }
            CastingSurface::DirectlyAgainstSoil => {
                format!(r"k2 \ge c_{{min,dur}} + 75 mm for {}", surface.display_name())
            }
        }
    }
}

// =============================================================================
// TABLE 4.2: MINIMUM COVER WITH REGARD TO BOND
// =============================================================================

/// Minimum cover c_min,b with regard to bond, table 4.2.
///
/// Equal to the bar diameter (or the equivalent diameter of a bundle, see
/// [`BundledBarEquivalentDiameter`](super::detailing_reinforcement::BundledBarEquivalentDiameter)),
/// plus 5 mm when the nominal maximum aggregate size exceeds 32 mm.
#[derive(Debug, Clone, Serialize)]
pub struct MinimumCoverBond {
    diameter: Mm,
    aggregate_larger_than_32_mm: bool,
    result: Mm,
}

impl MinimumCoverBond {
    pub fn new(diameter: Mm, aggregate_larger_than_32_mm: bool) -> CalcResult<Self> {
        ensure_positive(&[("diameter", diameter)])?;
        let result = if aggregate_larger_than_32_mm { diameter + 5.0 } else { diameter };
        Ok(Self { diameter, aggregate_larger_than_32_mm, result }.traced())
    }
}

impl Formula for MinimumCoverBond {
    type Output = f64;
    const LABEL: &'static str = "4.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum cover with regard to bond";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let suffix = if self.aggregate_larger_than_32_mm { " + 5" } else { "" };
        LatexFormula::new(
            "c_{min,b}",
            fmt_n(self.result, n),
            format!(r"\text{{(equivalent) rebar diameter}}{suffix}"),
            format!("{}{suffix}", fmt_n(self.diameter, n)),
            EQUALS,
        )
    }
}

// =============================================================================
// TABLE 4.3: STRUCTURAL CLASSIFICATION
// =============================================================================

/// Structural class S1 to S6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StructuralClass(u8);

impl StructuralClass {
    /// Recommended class for a design working life of 50 years
    pub const DEFAULT: StructuralClass = StructuralClass(4);

    pub fn new(value: u8) -> CalcResult<Self> {
        if !(1..=6).contains(&value) {
            return Err(CalcError::invalid_input(
                "structural_class",
                value.to_string(),
                "Structural class must be between 1 and 6",
            ));
        }
        Ok(StructuralClass(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StructuralClass {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        StructuralClass::new(value)
    }
}

impl From<StructuralClass> for u8 {
    fn from(class: StructuralClass) -> u8 {
        class.0
    }
}

impl fmt::Display for StructuralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// One modification of the structural class with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralClassAdjustment {
    pub delta: i8,
    pub reason: String,
}

const DESIGN_WORKING_LIFE_DEFAULT: Years = 50.0;
const DESIGN_WORKING_LIFE_100: Years = 100.0;

/// Recommended structural classification, table 4.3.
///
/// Starts from S4 and applies, in order: design working life (+2 above 50
/// years), concrete strength (-1 at or above the grade decisive for the
/// exposure), plate geometry (-1) and special quality control (-1). The
/// outcome is limited to S1..S6.
#[derive(Debug, Clone, Serialize)]
pub struct StructuralClassTable {
    exposure_classes: ExposureClasses,
    design_working_life: Years,
    strength_class: ConcreteStrengthClass,
    plate_geometry: bool,
    quality_control: bool,
    adjustments: Vec<StructuralClassAdjustment>,
    structural_class: StructuralClass,
}

impl StructuralClassTable {
    /// # Arguments
    /// * `exposure_classes` - Exposure classes of the element (table 4.1)
    /// * `design_working_life` - Design working life in years
    /// * `strength_class` - Concrete strength class
    /// * `plate_geometry` - Member with slab geometry (position of reinforcement not affected by construction)
    /// * `quality_control` - Special quality control of the concrete production is ensured
    pub fn new(
        exposure_classes: ExposureClasses,
        design_working_life: Years,
        strength_class: ConcreteStrengthClass,
        plate_geometry: bool,
        quality_control: bool,
    ) -> CalcResult<Self> {
        ensure_positive(&[("design_working_life", design_working_life)])?;

        let adjustments = vec![
            Self::delta_design_working_life(design_working_life),
            Self::delta_concrete_grade(&exposure_classes, strength_class),
            if plate_geometry {
                adjustment(-1, "plate geometry")
            } else {
                adjustment(0, "no plate geometry")
            },
            if quality_control {
                adjustment(-1, "quality control")
            } else {
                adjustment(0, "no quality control")
            },
        ];

        let total: i16 = i16::from(StructuralClass::DEFAULT.value())
            + adjustments.iter().map(|a| i16::from(a.delta)).sum::<i16>();
        let clamped = total.clamp(1, 6) as u8;
        let structural_class = StructuralClass::new(clamped)?;

        Ok(Self {
            exposure_classes,
            design_working_life,
            strength_class,
            plate_geometry,
            quality_control,
            adjustments,
            structural_class,
        }
        .traced())
    }

    fn delta_design_working_life(years: Years) -> StructuralClassAdjustment {
        if years > DESIGN_WORKING_LIFE_DEFAULT {
            let reason = if years == DESIGN_WORKING_LIFE_100 {
                format!("{DESIGN_WORKING_LIFE_100} years")
            } else {
                format!("{years} > {DESIGN_WORKING_LIFE_DEFAULT} => {DESIGN_WORKING_LIFE_100} years")
            };
            StructuralClassAdjustment { delta: 2, reason }
        } else {
            adjustment(0, format!("{DESIGN_WORKING_LIFE_DEFAULT} years"))
        }
    }

    /// Grade at or above which the class may be reduced, decided by the
    /// most severe exposure present.
    fn decisive_grade(exposure: &ExposureClasses) -> ConcreteStrengthClass {
        if matches!(exposure.chloride, Chloride::XD3)
            || matches!(exposure.chloride_seawater, ChlorideSeawater::XS2 | ChlorideSeawater::XS3)
        {
            ConcreteStrengthClass::C45_55
        } else if matches!(exposure.carbonation, Carbonation::XC4)
            || matches!(exposure.chloride, Chloride::XD1 | Chloride::XD2)
            || matches!(exposure.chloride_seawater, ChlorideSeawater::XS1)
        {
            ConcreteStrengthClass::C40_50
        } else if matches!(exposure.carbonation, Carbonation::XC2 | Carbonation::XC3) {
            ConcreteStrengthClass::C35_45
        } else {
            ConcreteStrengthClass::C30_37
        }
    }

    fn delta_concrete_grade(exposure: &ExposureClasses, strength: ConcreteStrengthClass) -> StructuralClassAdjustment {
        let decisive = Self::decisive_grade(exposure);
        if strength.f_ck() < decisive.f_ck() {
            adjustment(0, "no reduction with respect to concrete grade")
        } else {
            adjustment(-1, format!("concrete grade >= {decisive}"))
        }
    }

    pub fn structural_class(&self) -> StructuralClass {
        self.structural_class
    }

    /// Modifications applied to S4, in order
    pub fn adjustments(&self) -> &[StructuralClassAdjustment] {
        &self.adjustments
    }
}

fn adjustment(delta: i8, reason: impl Into<String>) -> StructuralClassAdjustment {
    StructuralClassAdjustment { delta, reason: reason.into() }
}

impl Formula for StructuralClassTable {
    type Output = f64;
    const LABEL: &'static str = "Table 4.3";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Recommended structural classification";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        f64::from(self.structural_class.value())
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let mut numeric = StructuralClass::DEFAULT.value().to_string();
        for step in &self.adjustments {
            if step.delta < 0 {
                numeric.push_str(&format!(r" - {} \ ({})", -step.delta, step.reason));
            } else {
                numeric.push_str(&format!(r" + {} \ ({})", step.delta, step.reason));
            }
        }
        LatexFormula::new(
            "S",
            fmt_n(self.result(), n),
            format!(r"\text{{S4}} \ ({})", self.exposure_classes),
            numeric,
            RIGHTARROW,
        )
    }
}

// =============================================================================
// MINIMUM AND NOMINAL COVER (4.1, 4.2)
// =============================================================================

/// Minimum cover c_min, formula 4.2.
///
/// # Formula
/// c_min = max{c_min,b; c_min,dur + Δc_dur,γ - Δc_dur,st - Δc_dur,add; 10 mm}
#[derive(Debug, Clone, Serialize)]
pub struct MinimumCover {
    c_min_b: Mm,
    c_min_dur: Mm,
    delta_c_dur_gamma: Mm,
    delta_c_dur_st: Mm,
    delta_c_dur_add: Mm,
    result: Mm,
}

impl MinimumCover {
    /// # Arguments
    /// * `c_min_b` - Minimum cover with regard to bond, see [`MinimumCoverBond`]
    /// * `c_min_dur` - Minimum cover with regard to durability (table 4.4N/4.5N)
    /// * `delta_c_dur_gamma` - Additive safety element
    /// * `delta_c_dur_st` - Reduction for stainless steel
    /// * `delta_c_dur_add` - Reduction for additional protection
    pub fn new(
        c_min_b: Mm,
        c_min_dur: Mm,
        delta_c_dur_gamma: Mm,
        delta_c_dur_st: Mm,
        delta_c_dur_add: Mm,
    ) -> CalcResult<Self> {
        ensure_non_negative(&[
            ("c_min_b", c_min_b),
            ("c_min_dur", c_min_dur),
            ("delta_c_dur_gamma", delta_c_dur_gamma),
            ("delta_c_dur_st", delta_c_dur_st),
            ("delta_c_dur_add", delta_c_dur_add),
        ])?;
        let durability = c_min_dur + delta_c_dur_gamma - delta_c_dur_st - delta_c_dur_add;
        let result = c_min_b.max(durability).max(10.0);
        Ok(Self { c_min_b, c_min_dur, delta_c_dur_gamma, delta_c_dur_st, delta_c_dur_add, result }.traced())
    }
}

impl Formula for MinimumCover {
    type Output = f64;
    const LABEL: &'static str = "4.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum concrete cover";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "c_{min}",
            fmt_n(self.result, n),
            latex_max_curly_brackets(&[
                "c_{min,b}",
                r"c_{min,dur} + \Delta c_{dur,\gamma} - \Delta c_{dur,st} - \Delta c_{dur,add}",
                r"10 \ \text{mm}",
            ]),
            latex_max_curly_brackets(&[
                fmt_n(self.c_min_b, n),
                format!(
                    "{} + {} - {} - {}",
                    fmt_n(self.c_min_dur, n),
                    fmt_n(self.delta_c_dur_gamma, n),
                    fmt_n(self.delta_c_dur_st, n),
                    fmt_n(self.delta_c_dur_add, n)
                ),
                "10".to_string(),
            ]),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Nominal cover c_nom, formula 4.1.
///
/// # Formula
/// c_nom = c_min + Δc_dev
#[derive(Debug, Clone, Serialize)]
pub struct NominalCover {
    c_min: Mm,
    delta_c_dev: Mm,
    result: Mm,
}

impl NominalCover {
    pub fn new(c_min: Mm, delta_c_dev: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("c_min", c_min), ("delta_c_dev", delta_c_dev)])?;
        Ok(Self { c_min, delta_c_dev, result: c_min + delta_c_dev }.traced())
    }

    /// Nominal cover with the recommended Δc_dev of `constants`
    pub fn with_default_deviation(c_min: Mm, constants: &NominalCoverConstants) -> CalcResult<Self> {
        Self::new(c_min, constants.default_delta_c_dev)
    }
}

impl Formula for NominalCover {
    type Output = f64;
    const LABEL: &'static str = "4.1";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Nominal concrete cover";
    const DEFAULT_DECIMALS: usize = 0;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "c_{nom}",
            fmt_n(self.result, n),
            r"c_{min} + \Delta c_{dev}",
            format!("{} + {}", fmt_n(self.c_min, n), fmt_n(self.delta_c_dev, n)),
            EQUALS,
        )
        .with_unit("mm")
    }
}

impl_scalar_formula!(MinimumCoverBond, StructuralClassTable, MinimumCover, NominalCover);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exposure(codes: &[&str]) -> ExposureClasses {
        ExposureClasses::from_exposure_list(codes).unwrap()
    }

    #[test]
    fn test_constants() {
        let constants = NominalCoverConstants::default();
        assert_eq!(constants.cover_increase_for_abrasion_class(AbrasionClass::NotApplicable), 0.0);
        assert_eq!(constants.cover_increase_for_abrasion_class(AbrasionClass::XM2), 10.0);
        assert_eq!(constants.cover_increase_for_uneven_surface, 5.0);
        assert_eq!(constants.default_delta_c_dev, 10.0);
    }

    #[test]
    fn test_casting_surface() {
        let constants = NominalCoverConstants::default();
        assert_eq!(constants.minimum_cover_with_regard_to_casting_surface(25.0, CastingSurface::Formwork), 0.0);
        assert_eq!(constants.minimum_cover_with_regard_to_casting_surface(25.0, CastingSurface::PreparedGround), 65.0);
        assert_eq!(
            constants.minimum_cover_with_regard_to_casting_surface(25.0, CastingSurface::DirectlyAgainstSoil),
            100.0
        );
        assert_eq!(
            constants.minimum_cover_with_regard_to_casting_surface_latex(CastingSurface::PreparedGround),
            r"k1 \ge c_{min,dur} + 40 mm for prepared ground (including blinding)"
        );
    }

    #[test]
    fn test_minimum_cover_bond() {
        let c = MinimumCoverBond::new(16.0, false).unwrap();
        assert_eq!(c, 16.0);
        assert_eq!(c.latex().complete(), r"c_{min,b} = \text{(equivalent) rebar diameter} = 16 = 16");

        let c = MinimumCoverBond::new(32.0, true).unwrap();
        assert_eq!(c, 37.0);
        assert_eq!(c.latex().complete(), r"c_{min,b} = \text{(equivalent) rebar diameter} + 5 = 32 + 5 = 37");

        assert!(MinimumCoverBond::new(0.0, true).is_err());
        assert_eq!(c.citation(), "EN 1992-1-1:2004 (4.2)");
    }

    #[test]
    fn test_structural_class_default() {
        let table = StructuralClassTable::new(exposure(&["XC3"]), 50.0, ConcreteStrengthClass::C30_37, false, false)
            .unwrap();
        assert_eq!(table.structural_class(), StructuralClass::DEFAULT);
        assert_eq!(table, 4.0);
        assert_eq!(table.adjustments().len(), 4);
    }

    #[test]
    fn test_structural_class_100_years() {
        let table = StructuralClassTable::new(exposure(&["XC1"]), 100.0, ConcreteStrengthClass::C20_25, false, false)
            .unwrap();
        assert_eq!(table.structural_class().to_string(), "S6");
        assert_eq!(table.adjustments()[0].reason, "100 years");
    }

    #[test]
    fn test_structural_class_reductions() {
        // XD1 is decided by C40/50
        let table = StructuralClassTable::new(exposure(&["XC4", "XD1"]), 50.0, ConcreteStrengthClass::C40_50, true, true)
            .unwrap();
        assert_eq!(table.structural_class().value(), 1);
        assert_eq!(table.adjustments()[1].reason, "concrete grade >= C40/50");

        let table = StructuralClassTable::new(exposure(&["XC4", "XD1"]), 50.0, ConcreteStrengthClass::C35_45, false, false)
            .unwrap();
        assert_eq!(table.structural_class().value(), 4);
    }

    #[test]
    fn test_structural_class_clamped() {
        let table = StructuralClassTable::new(exposure(&["X0"]), 50.0, ConcreteStrengthClass::C50_60, true, true)
            .unwrap();
        assert_eq!(table.structural_class().value(), 1);
    }

    #[test]
    fn test_structural_class_latex() {
        let table = StructuralClassTable::new(exposure(&["XC3"]), 80.0, ConcreteStrengthClass::C35_45, false, true)
            .unwrap();
        assert_eq!(table, 4.0);
        assert_eq!(
            table.latex().complete(),
            r"S \rightarrow \text{S4} \ (XC3) \rightarrow 4 + 2 \ (80 > 50 => 100 years) - 1 \ (concrete grade >= C35/45) + 0 \ (no plate geometry) - 1 \ (quality control) \rightarrow 4"
        );
    }

    #[test]
    fn test_structural_class_validation() {
        assert!(StructuralClass::new(0).is_err());
        assert!(StructuralClass::new(7).is_err());
        assert_eq!(StructuralClass::new(6).unwrap().to_string(), "S6");
        let parsed: StructuralClass = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.value(), 3);
        assert!(serde_json::from_str::<StructuralClass>("9").is_err());
    }

    #[test]
    fn test_minimum_cover() {
        let c_min = MinimumCover::new(16.0, 25.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(c_min, 25.0);
        assert_eq!(
            c_min.latex().complete(),
            r"c_{min} = \max \left\{c_{min,b}; c_{min,dur} + \Delta c_{dur,\gamma} - \Delta c_{dur,st} - \Delta c_{dur,add}; 10 \ \text{mm}\right\} = \max \left\{16; 25 + 0 - 0 - 0; 10\right\} = 25 \ mm"
        );

        let c_min = MinimumCover::new(6.0, 10.0, 0.0, 5.0, 0.0).unwrap();
        assert_eq!(c_min, 10.0);
        assert!(MinimumCover::new(16.0, -25.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_nominal_cover() {
        let c_nom = NominalCover::with_default_deviation(25.0, &NominalCoverConstants::default()).unwrap();
        assert_eq!(c_nom, 35.0);
        assert_eq!(c_nom.latex().short(), r"c_{nom} = 35 \ mm");
        assert!(NominalCover::new(-1.0, 10.0).is_err());
    }
}
