//! # Formula Catalog
//!
//! Index of every formula in the crate, keyed by source document and label.
//! The catalog holds metadata only; formulas are still constructed through
//! their own `new` so inputs are validated per clause.
//!
//! ## Usage
//!
//! ```rust
//! use codes_core::catalog;
//! use codes_core::documents::SourceDocument;
//!
//! let entries = catalog::find(SourceDocument::En1992_1_1_2004, "6.36");
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].citation(), "EN 1992-1-1:2004 (6.36)");
//! ```
//!
//! Labels are not unique within a document: a clause that defines several
//! quantities (e.g. formula 3.14 of NEN-EN 1992-1-1+C2:2011) has one entry
//! per quantity.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::cur::cur_228;
use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::eurocode::{
    en_1992_1_1_2004, en_1993_1_1_2005, en_1993_5_2007, nen_9997_1_c2_2017, nen_en_1992_1_1_a1_2020,
    nen_en_1992_1_1_c2_2011, nen_en_1993_1_1_c2_a1_2016, nen_en_1993_1_8_c2_2011, nen_en_1995_1_1_2011,
};
use crate::formula::{Formula, FormulaOutput, OutputKind};

// ============================================================================
// Catalog Entry
// ============================================================================

/// Metadata of one formula type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Clause or equation identifier (e.g. "6.36")
    pub label: &'static str,
    /// Edition the formula implements
    pub document: SourceDocument,
    /// Human-readable name
    pub name: &'static str,
    /// Numeric result or pass/fail check
    pub kind: OutputKind,
    /// Decimals the formula renders with by default
    pub default_decimals: usize,
    /// Rust path of the implementing type, relative to the crate root
    pub type_path: &'static str,
}

impl CatalogEntry {
    /// Citation of the clause, e.g. "EN 1992-1-1:2004 (6.36)"
    pub fn citation(&self) -> String {
        self.document.citation(self.label)
    }
}

fn entry<F: Formula>() -> CatalogEntry {
    let full_path = std::any::type_name::<F>();
    CatalogEntry {
        label: F::LABEL,
        document: F::SOURCE_DOCUMENT,
        name: F::NAME,
        kind: <F::Output as FormulaOutput>::KIND,
        default_decimals: F::DEFAULT_DECIMALS,
        type_path: full_path.strip_prefix("codes_core::").unwrap_or(full_path),
    }
}

// ============================================================================
// Registered Formulas
// ============================================================================

/// Every formula type, grouped by document in [`SourceDocument::ALL`] order.
pub static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    let entries = vec![
        // EN 1992-1-1:2004
        entry::<en_1992_1_1_2004::materials::CompressiveStrengthAtAge>(),
        entry::<en_1992_1_1_2004::materials::AgeStrengthCoefficient>(),
        entry::<en_1992_1_1_2004::materials::CementTypeCoefficient>(),
        entry::<en_1992_1_1_2004::materials::DryingShrinkageAgeCoefficient>(),
        entry::<en_1992_1_1_2004::materials::NotionalSize>(),
        entry::<en_1992_1_1_2004::materials::AutogenousShrinkage>(),
        entry::<en_1992_1_1_2004::materials::CompressiveStressBilinear>(),
        entry::<en_1992_1_1_2004::materials::ConfinedStrainAtMaxStrength>(),
        entry::<en_1992_1_1_2004::materials::ConfinedUltimateStrain>(),
        entry::<en_1992_1_1_2004::durability::MinimumCoverBond>(),
        entry::<en_1992_1_1_2004::durability::StructuralClassTable>(),
        entry::<en_1992_1_1_2004::durability::MinimumCover>(),
        entry::<en_1992_1_1_2004::durability::NominalCover>(),
        entry::<en_1992_1_1_2004::structural_analysis::InitialInclinationImperfection>(),
        entry::<en_1992_1_1_2004::structural_analysis::ReductionFactorLengthOrHeight>(),
        entry::<en_1992_1_1_2004::structural_analysis::ReductionFactorNumberOfMembers>(),
        entry::<en_1992_1_1_2004::structural_analysis::TransverseForceUnbracedMembers>(),
        entry::<en_1992_1_1_2004::structural_analysis::TransverseForceBracedMembers>(),
        entry::<en_1992_1_1_2004::structural_analysis::TransverseForceBracingSystem>(),
        entry::<en_1992_1_1_2004::structural_analysis::TransverseForceRoofDiaphragm>(),
        entry::<en_1992_1_1_2004::structural_analysis::EffectiveFlangeWidth>(),
        entry::<en_1992_1_1_2004::structural_analysis::EffectiveSpan>(),
        entry::<en_1992_1_1_2004::structural_analysis::GeneralSecondOrderEffectsCheck>(),
        entry::<en_1992_1_1_2004::structural_analysis::NominalStiffness>(),
        entry::<en_1992_1_1_2004::structural_analysis::FactorKs>(),
        entry::<en_1992_1_1_2004::structural_analysis::FactorKc>(),
        entry::<en_1992_1_1_2004::structural_analysis::EffectiveDesignModulusElasticity>(),
        entry::<en_1992_1_1_2004::structural_analysis::NominalSecondOrderMoment>(),
        entry::<en_1992_1_1_2004::structural_analysis::RelativeEccentricityRatioCheck>(),
        entry::<en_1992_1_1_2004::structural_analysis::BiaxialBendingCheck>(),
        entry::<en_1992_1_1_2004::structural_analysis::PrestressLoss>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::ShearCapacityWithoutRebar>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::ShearResistanceStirrups>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::CompressionChordCoefficient>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::NominalWebWidth>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::LongitudinalShearStress>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::TransverseReinforcementCheck>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::InterfaceShearResistance>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::TorsionLongitudinalReinforcement>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::TorsionShearResistanceCheck>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::DesignTorsionalResistanceMoment>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::ColumnHeadExternalContourRadius>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::MaxShearStress>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::BetaCircularColumn>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::PunchingShearStressEccentricLoading>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::ControlPerimeterNoShearReinforcement>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::DesignStrengthConcreteStruts>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::NodeCompressiveStressResistance>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::FatigueStrutAngle>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::FatigueStressRatio>(),
        entry::<en_1992_1_1_2004::ultimate_limit_state::DesignFatigueStrengthConcrete>(),
        entry::<en_1992_1_1_2004::serviceability_limit_state::CoefficientKcFlanges>(),
        entry::<en_1992_1_1_2004::serviceability_limit_state::AdjustedBondStrengthRatio>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::MinimumMandrelDiameter>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::UltimateBondStress>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::BondConditionCoefficient>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::BarDiameterCoefficient>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::MinimumCompressionAnchorage>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::WeldedTransverseBarCapacity>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TransverseBarDesignLength>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TransverseBarConcreteStress>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TransverseBarFunctionY>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TransverseBarFunctionX>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::WeldedCrossBarCapacitySmallDiameter>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::AdditionalShearReinforcementParallel>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::AdditionalShearReinforcementPerpendicular>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::BundledBarEquivalentDiameter>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::BasicTransmissionLength>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::ReleaseTypeCoefficient>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TendonTypeCoefficient>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::AnchorageBondStrength>(),
        entry::<en_1992_1_1_2004::detailing_reinforcement::TendonAnchorageLength>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MinimumTensileReinforcementBeam>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::ShiftInMomentDiagram>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::EndSupportAnchorageForce>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::ShearReinforcementRatio>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MaximumLongitudinalSpacingShearReinforcement>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MaximumTransverseSpacingShearLegs>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MinimumPunchingShearReinforcement>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MinimumLongitudinalReinforcementColumn>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::FootingAnchorageForce>(),
        entry::<en_1992_1_1_2004::detailing_specific_rules::MinimumInternalTieForce>(),
        // NEN-EN 1992-1-1+C2:2011
        entry::<nen_en_1992_1_1_c2_2011::materials::CompressiveStrengthAtAge>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::CreepDeformation>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::TotalShrinkage>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::AutogenousShrinkage>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::AutogenousShrinkageTimeCoefficient>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::StressStrainShortTermLoading>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::StrainRatio>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::StressStrainFactorK>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::DesignTensileStrength>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::EffectiveCompressionZoneFactor>(),
        entry::<nen_en_1992_1_1_c2_2011::materials::RelaxationLossClass3>(),
        entry::<nen_en_1992_1_1_c2_2011::structural_analysis::Eccentricity>(),
        entry::<nen_en_1992_1_1_c2_2011::structural_analysis::TransverseForceUnbracedMembers>(),
        entry::<nen_en_1992_1_1_c2_2011::ultimate_limit_state::ColumnHeadExternalContourRadius>(),
        entry::<nen_en_1992_1_1_c2_2011::ultimate_limit_state::NodeCompressiveStressResistance>(),
        entry::<nen_en_1992_1_1_c2_2011::ultimate_limit_state::FatigueResistanceConcreteCompression>(),
        entry::<nen_en_1992_1_1_c2_2011::serviceability_limit_state::EffectiveReinforcementRatio>(),
        entry::<nen_en_1992_1_1_c2_2011::serviceability_limit_state::SlendernessMultiplicationFactor>(),
        entry::<nen_en_1992_1_1_c2_2011::serviceability_limit_state::DeformationParameter>(),
        entry::<nen_en_1992_1_1_c2_2011::serviceability_limit_state::EffectiveModulusCreep>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::MinimumMandrelDiameter>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::DesignLapLength>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::BasicTransmissionLength>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::ReleaseTypeCoefficient>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::TendonTypeCoefficient>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_reinforcement::DesignTransmissionLengthUpper>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_specific_rules::MinimumTensileReinforcementBeam>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_specific_rules::MaximumSpacingSeriesOfLinks>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_specific_rules::MinimumLongitudinalReinforcementColumn>(),
        entry::<nen_en_1992_1_1_c2_2011::detailing_specific_rules::FootingAnchorageForce>(),
        // NEN-EN 1992-1-1+A1:2020
        entry::<nen_en_1992_1_1_a1_2020::durability::MinimumCoverDurabilityReinforcement>(),
        entry::<nen_en_1992_1_1_a1_2020::durability::MinimumCoverDurabilityPrestressing>(),
        // EN 1993-1-1:2005
        entry::<en_1993_1_1_2005::ultimate_limit_state::UtilizationRatio>(),
        entry::<en_1993_1_1_2005::ultimate_limit_state::BendingResistanceClass4>(),
        entry::<en_1993_1_1_2005::ultimate_limit_state::ShearResistanceHollowSectionTorsion>(),
        // NEN-EN 1993-1-1+C2+A1:2016
        entry::<nen_en_1993_1_1_c2_a1_2016::ultimate_limit_state::BendingResistanceClass1And2>(),
        entry::<nen_en_1993_1_1_c2_a1_2016::ultimate_limit_state::ShearForceCheck>(),
        entry::<nen_en_1993_1_1_c2_a1_2016::ultimate_limit_state::TotalTorsionalMoment>(),
        entry::<nen_en_1993_1_1_c2_a1_2016::ultimate_limit_state::ReducedBendingResistanceZ>(),
        // NEN-EN 1993-1-8+C2:2011
        entry::<nen_en_1993_1_8_c2_2011::welded_connections::WeldedConnectionCheck>(),
        // EN 1993-5:2007
        entry::<en_1993_5_2007::ultimate_limit_states::MomentResistanceClass1Or2>(),
        entry::<en_1993_5_2007::ultimate_limit_states::PlasticShearResistance>(),
        entry::<en_1993_5_2007::ultimate_limit_states::ProjectedShearArea>(),
        entry::<en_1993_5_2007::ultimate_limit_states::ShearBucklingResistance>(),
        entry::<en_1993_5_2007::ultimate_limit_states::RelativeWebSlenderness>(),
        entry::<en_1993_5_2007::ultimate_limit_states::ReducedMomentResistanceShear>(),
        entry::<en_1993_5_2007::ultimate_limit_states::ElasticCriticalLoad>(),
        entry::<en_1993_5_2007::ultimate_limit_states::SimplifiedBucklingCheck>(),
        entry::<en_1993_5_2007::ultimate_limit_states::PlasticDesignResistance>(),
        entry::<en_1993_5_2007::ultimate_limit_states::CompressionCheckUProfilesClass1And2>(),
        entry::<en_1993_5_2007::ultimate_limit_states::ReducedMomentResistanceUProfiles>(),
        // NEN-EN 1995-1-1:2011
        entry::<nen_en_1995_1_1_2011::serviceability_limit_states::NaturalFrequency>(),
        // NEN 9997-1+C2:2017
        entry::<nen_9997_1_c2_2017::basis_of_geotechnical_design::RepresentativeValue>(),
        entry::<nen_9997_1_c2_2017::basis_of_geotechnical_design::DesignValueGeotechnicalParameter>(),
        entry::<nen_9997_1_c2_2017::basis_of_geotechnical_design::StaticEquilibriumCheck>(),
        // CUR 228
        entry::<cur_228::ModulusHorizontalSubgrade>(),
    ];
    debug!(count = entries.len(), "formula catalog built");
    entries
});

/// All entries in catalog order.
pub fn all() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Entries of one document.
pub fn by_document(document: SourceDocument) -> Vec<&'static CatalogEntry> {
    CATALOG.iter().filter(|e| e.document == document).collect()
}

/// Entries with the given label in a document. Empty when nothing matches.
pub fn find(document: SourceDocument, label: &str) -> Vec<&'static CatalogEntry> {
    let label = label.trim();
    CATALOG
        .iter()
        .filter(|e| e.document == document && e.label.eq_ignore_ascii_case(label))
        .collect()
}

/// Look up a clause by document designation and label, as written in a report
/// (e.g. `("NEN-EN 1992-1-1+C2:2011", "6.36")`).
///
/// Fails with `UNKNOWN_CATEGORY` when the document is unknown or has no
/// formula with that label.
pub fn lookup(designation: &str, label: &str) -> CalcResult<Vec<&'static CatalogEntry>> {
    let document = SourceDocument::from_designation(designation)?;
    let entries = find(document, label);
    if entries.is_empty() {
        return Err(CalcError::unknown_category("formula", document.citation(label.trim())));
    }
    Ok(entries)
}

/// Number of formulas per document, in [`SourceDocument::ALL`] order.
pub fn counts_by_document() -> Vec<(SourceDocument, usize)> {
    SourceDocument::ALL
        .into_iter()
        .map(|doc| (doc, CATALOG.iter().filter(|e| e.document == doc).count()))
        .collect()
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Markdown reference of the whole catalog, one table per document.
pub fn generate_catalog_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Formula Catalog

> **Auto-generated from source code. Do not edit manually.**

Every formula implemented in codes_core, grouped by source document. Each
formula validates its inputs on construction and renders its calculation as
LaTeX.

"#,
    );

    for (document, count) in counts_by_document() {
        if count == 0 {
            continue;
        }
        output.push_str(&format!("## {}\n\n", document.designation()));
        output.push_str(&format!("*{}*\n\n", document.title()));
        output.push_str("| Label | Name | Kind | Type |\n");
        output.push_str("|-------|------|------|------|\n");
        for entry in by_document(document) {
            let kind = match entry.kind {
                OutputKind::Numeric => "value",
                OutputKind::Check => "check",
            };
            output.push_str(&format!(
                "| {} | {} | {} | `{}` |\n",
                entry.label, entry.name, kind, entry.type_path
            ));
        }
        output.push('\n');
    }

    output.push_str("## Statistics\n\n");
    output.push_str(&format!("- **Total Formulas:** {}\n", CATALOG.len()));
    output.push_str(&format!("- **Documents:** {}\n", SourceDocument::ALL.len()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().len(), 138);
        assert_eq!(by_document(SourceDocument::En1992_1_1_2004).len(), 82);
        assert_eq!(by_document(SourceDocument::NenEn1992_1_1C2_2011).len(), 30);
        assert_eq!(by_document(SourceDocument::En1993_5_2007).len(), 11);
        assert_eq!(by_document(SourceDocument::Nen9997_1C2_2017).len(), 3);
    }

    #[test]
    fn test_every_document_has_formulas() {
        for (document, count) in counts_by_document() {
            assert!(count > 0, "{document} has no formulas");
        }
    }

    #[test]
    fn test_type_paths_unique() {
        let mut paths: Vec<_> = all().iter().map(|e| e.type_path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), all().len());
    }

    #[test]
    fn test_find() {
        let entries = find(SourceDocument::NenEn1992_1_1C2_2011, "6.36");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].type_path.ends_with("ColumnHeadExternalContourRadius"));
        assert_eq!(entries[0].kind, OutputKind::Numeric);

        assert_eq!(find(SourceDocument::NenEn1992_1_1C2_2011, "3.14").len(), 3);
        assert_eq!(find(SourceDocument::En1992_1_1_2004, " table 4.3 ").len(), 1);
        assert_eq!(find(SourceDocument::En1992_1_1_2004, "4.2").len(), 2);
        assert_eq!(find(SourceDocument::NenEn1992_1_1A1_2020, "4.4N").len(), 1);
        assert_eq!(find(SourceDocument::NenEn1992_1_1C2_2011, "8.16").len(), 3);
        assert!(find(SourceDocument::Cur228, "6.36").is_empty());
    }

    #[test]
    fn test_check_kind() {
        let entries = find(SourceDocument::NenEn1993_1_8C2_2011, "4.2");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, OutputKind::Check);
    }

    #[test]
    fn test_lookup() {
        let entries = lookup("CUR 228", "2.22").unwrap();
        assert_eq!(entries[0].name, "Modulus of horizontal subgrade reaction");
        assert_eq!(entries[0].default_decimals, 2);

        let err = lookup("CUR 228", "9.99").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(err.to_string(), "Unknown formula: 'CUR 228 (9.99)'");

        assert_eq!(lookup("ACI 318-19", "22.5").unwrap_err().error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_generate_catalog_markdown() {
        let markdown = generate_catalog_markdown();
        assert!(markdown.starts_with("# Formula Catalog"));
        assert!(markdown.contains("## NEN 9997-1+C2:2017"));
        assert!(markdown.contains("| 6.17 | Design shear force check | check |"));
        assert!(markdown.contains("- **Total Formulas:** 138"));
    }

    #[test]
    fn test_entry_serializes() {
        let entry = &find(SourceDocument::En1992_1_1_2004, "6.36")[0];
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["document"], "EN 1992-1-1:2004");
        assert_eq!(json["kind"], "Numeric");
    }
}
