//! # Source Documents
//!
//! The code editions formulas are taken from. A formula's label ("6.36") is
//! only meaningful together with the edition it belongs to, since national
//! annexes and corrigenda renumber or amend clauses.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A specific edition of a building code or design guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum SourceDocument {
    /// Eurocode 2: Design of concrete structures, general rules and rules for buildings
    #[serde(rename = "EN 1992-1-1:2004")]
    En1992_1_1_2004,
    /// Dutch edition of Eurocode 2 including corrigendum C2
    #[serde(rename = "NEN-EN 1992-1-1+C2:2011")]
    NenEn1992_1_1C2_2011,
    /// Dutch edition of Eurocode 2 including amendment A1
    #[serde(rename = "NEN-EN 1992-1-1+A1:2020")]
    NenEn1992_1_1A1_2020,
    /// Eurocode 3: Design of steel structures, general rules and rules for buildings
    #[serde(rename = "EN 1993-1-1:2005")]
    En1993_1_1_2005,
    /// Dutch edition of Eurocode 3 including corrigendum C2 and amendment A1
    #[serde(rename = "NEN-EN 1993-1-1+C2+A1:2016")]
    NenEn1993_1_1C2A1_2016,
    /// Dutch edition of Eurocode 3 part 1-8: design of joints
    #[serde(rename = "NEN-EN 1993-1-8+C2:2011")]
    NenEn1993_1_8C2_2011,
    /// Eurocode 3 part 5: piling
    #[serde(rename = "EN 1993-5:2007")]
    En1993_5_2007,
    /// Dutch edition of Eurocode 5: design of timber structures
    #[serde(rename = "NEN-EN 1995-1-1:2011")]
    NenEn1995_1_1_2011,
    /// Dutch geotechnical design code
    #[serde(rename = "NEN 9997-1+C2:2017")]
    Nen9997_1C2_2017,
    /// CUR 228: design of laterally loaded piles
    #[serde(rename = "CUR 228")]
    Cur228,
}

impl SourceDocument {
    /// Every known edition, in catalog order
    pub const ALL: [SourceDocument; 10] = [
        SourceDocument::En1992_1_1_2004,
        SourceDocument::NenEn1992_1_1C2_2011,
        SourceDocument::NenEn1992_1_1A1_2020,
        SourceDocument::En1993_1_1_2005,
        SourceDocument::NenEn1993_1_1C2A1_2016,
        SourceDocument::NenEn1993_1_8C2_2011,
        SourceDocument::En1993_5_2007,
        SourceDocument::NenEn1995_1_1_2011,
        SourceDocument::Nen9997_1C2_2017,
        SourceDocument::Cur228,
    ];

    /// Official designation of the edition
    pub fn designation(&self) -> &'static str {
        match self {
            SourceDocument::En1992_1_1_2004 => "EN 1992-1-1:2004",
            SourceDocument::NenEn1992_1_1C2_2011 => "NEN-EN 1992-1-1+C2:2011",
            SourceDocument::NenEn1992_1_1A1_2020 => "NEN-EN 1992-1-1+A1:2020",
            SourceDocument::En1993_1_1_2005 => "EN 1993-1-1:2005",
            SourceDocument::NenEn1993_1_1C2A1_2016 => "NEN-EN 1993-1-1+C2+A1:2016",
            SourceDocument::NenEn1993_1_8C2_2011 => "NEN-EN 1993-1-8+C2:2011",
            SourceDocument::En1993_5_2007 => "EN 1993-5:2007",
            SourceDocument::NenEn1995_1_1_2011 => "NEN-EN 1995-1-1:2011",
            SourceDocument::Nen9997_1C2_2017 => "NEN 9997-1+C2:2017",
            SourceDocument::Cur228 => "CUR 228",
        }
    }

    /// Title of the document for report headers
    pub fn title(&self) -> &'static str {
        match self {
            SourceDocument::En1992_1_1_2004
            | SourceDocument::NenEn1992_1_1C2_2011
            | SourceDocument::NenEn1992_1_1A1_2020 => {
                "Eurocode 2: Design of concrete structures - Part 1-1: General rules and rules for buildings"
            }
            SourceDocument::En1993_1_1_2005 | SourceDocument::NenEn1993_1_1C2A1_2016 => {
                "Eurocode 3: Design of steel structures - Part 1-1: General rules and rules for buildings"
            }
            SourceDocument::NenEn1993_1_8C2_2011 => "Eurocode 3: Design of steel structures - Part 1-8: Design of joints",
            SourceDocument::En1993_5_2007 => "Eurocode 3: Design of steel structures - Part 5: Piling",
            SourceDocument::NenEn1995_1_1_2011 => {
                "Eurocode 5: Design of timber structures - Part 1-1: General - Common rules and rules for buildings"
            }
            SourceDocument::Nen9997_1C2_2017 => "Geotechnical design of structures - Part 1: General rules",
            SourceDocument::Cur228 => "Ontwerprichtlijn voor horizontaal belaste palen",
        }
    }

    /// Citation of one clause of this document (e.g. "EN 1992-1-1:2004 (6.36)")
    pub fn citation(&self, label: &str) -> String {
        format!("{} ({})", self.designation(), label)
    }

    /// Parse from the designation, ignoring case and surrounding whitespace
    pub fn from_designation(s: &str) -> CalcResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|doc| doc.designation().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::unknown_category("source document", s))
    }
}

impl std::fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation() {
        assert_eq!(SourceDocument::En1992_1_1_2004.citation("6.36"), "EN 1992-1-1:2004 (6.36)");
        assert_eq!(SourceDocument::Cur228.to_string(), "CUR 228");
    }

    #[test]
    fn test_from_designation() {
        assert_eq!(
            SourceDocument::from_designation(" nen-en 1992-1-1+c2:2011 ").unwrap(),
            SourceDocument::NenEn1992_1_1C2_2011
        );
        assert!(SourceDocument::from_designation("ACI 318-19").is_err());
    }

    #[test]
    fn test_serde_uses_designation() {
        let json = serde_json::to_string(&SourceDocument::En1993_5_2007).unwrap();
        assert_eq!(json, "\"EN 1993-5:2007\"");
        for doc in SourceDocument::ALL {
            let json = serde_json::to_string(&doc).unwrap();
            assert_eq!(json, format!("\"{}\"", doc.designation()));
        }
    }
}
