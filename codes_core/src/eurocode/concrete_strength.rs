//! # Concrete Strength Classes
//!
//! Strength classes of EN 1992-1-1 table 3.1, named by characteristic
//! cylinder / cube strength (e.g. "C30/37").

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Mpa;

/// Concrete strength class per table 3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcreteStrengthClass {
    #[serde(rename = "C12/15")]
    C12_15,
    #[serde(rename = "C16/20")]
    C16_20,
    #[serde(rename = "C20/25")]
    C20_25,
    #[serde(rename = "C25/30")]
    C25_30,
    #[serde(rename = "C30/37")]
    C30_37,
    #[serde(rename = "C35/45")]
    C35_45,
    #[serde(rename = "C40/50")]
    C40_50,
    #[serde(rename = "C45/55")]
    C45_55,
    #[serde(rename = "C50/60")]
    C50_60,
    #[serde(rename = "C55/67")]
    C55_67,
    #[serde(rename = "C60/75")]
    C60_75,
    #[serde(rename = "C70/85")]
    C70_85,
    #[serde(rename = "C80/95")]
    C80_95,
    #[serde(rename = "C90/105")]
    C90_105,
}

impl ConcreteStrengthClass {
    /// All strength classes in ascending order
    pub const ALL: [ConcreteStrengthClass; 14] = [
        ConcreteStrengthClass::C12_15,
        ConcreteStrengthClass::C16_20,
        ConcreteStrengthClass::C20_25,
        ConcreteStrengthClass::C25_30,
        ConcreteStrengthClass::C30_37,
        ConcreteStrengthClass::C35_45,
        ConcreteStrengthClass::C40_50,
        ConcreteStrengthClass::C45_55,
        ConcreteStrengthClass::C50_60,
        ConcreteStrengthClass::C55_67,
        ConcreteStrengthClass::C60_75,
        ConcreteStrengthClass::C70_85,
        ConcreteStrengthClass::C80_95,
        ConcreteStrengthClass::C90_105,
    ];

    /// Designation such as "C30/37"
    pub fn designation(&self) -> &'static str {
        match self {
            ConcreteStrengthClass::C12_15 => "C12/15",
            ConcreteStrengthClass::C16_20 => "C16/20",
            ConcreteStrengthClass::C20_25 => "C20/25",
            ConcreteStrengthClass::C25_30 => "C25/30",
            ConcreteStrengthClass::C30_37 => "C30/37",
            ConcreteStrengthClass::C35_45 => "C35/45",
            ConcreteStrengthClass::C40_50 => "C40/50",
            ConcreteStrengthClass::C45_55 => "C45/55",
            ConcreteStrengthClass::C50_60 => "C50/60",
            ConcreteStrengthClass::C55_67 => "C55/67",
            ConcreteStrengthClass::C60_75 => "C60/75",
            ConcreteStrengthClass::C70_85 => "C70/85",
            ConcreteStrengthClass::C80_95 => "C80/95",
            ConcreteStrengthClass::C90_105 => "C90/105",
        }
    }

    /// Characteristic cylinder strength f_ck
    pub fn f_ck(&self) -> Mpa {
        match self {
            ConcreteStrengthClass::C12_15 => 12.0,
            ConcreteStrengthClass::C16_20 => 16.0,
            ConcreteStrengthClass::C20_25 => 20.0,
            ConcreteStrengthClass::C25_30 => 25.0,
            ConcreteStrengthClass::C30_37 => 30.0,
            ConcreteStrengthClass::C35_45 => 35.0,
            ConcreteStrengthClass::C40_50 => 40.0,
            ConcreteStrengthClass::C45_55 => 45.0,
            ConcreteStrengthClass::C50_60 => 50.0,
            ConcreteStrengthClass::C55_67 => 55.0,
            ConcreteStrengthClass::C60_75 => 60.0,
            ConcreteStrengthClass::C70_85 => 70.0,
            ConcreteStrengthClass::C80_95 => 80.0,
            ConcreteStrengthClass::C90_105 => 90.0,
        }
    }

    /// Parse a designation, ignoring case and whitespace ("c30/37", "C 30/37")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|class| class.designation() == wanted)
            .ok_or_else(|| CalcError::unknown_category("concrete strength class", s))
    }
}

impl std::fmt::Display for ConcreteStrengthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ConcreteStrengthClass::from_str_flexible("c30/37").unwrap(), ConcreteStrengthClass::C30_37);
        assert_eq!(ConcreteStrengthClass::from_str_flexible(" C 90/105 ").unwrap().f_ck(), 90.0);
        assert!(ConcreteStrengthClass::from_str_flexible("C31/38").is_err());
    }

    #[test]
    fn test_ascending() {
        let strengths: Vec<f64> = ConcreteStrengthClass::ALL.iter().map(|c| c.f_ck()).collect();
        assert!(strengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serde_designation() {
        let json = serde_json::to_string(&ConcreteStrengthClass::C45_55).unwrap();
        assert_eq!(json, "\"C45/55\"");
    }
}
