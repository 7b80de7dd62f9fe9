//! # Exposure Classes
//!
//! Environmental exposure classes of EN 1992-1-1 table 4.1, grouped by the
//! deterioration mechanism they describe. An element is assigned at most one
//! class per mechanism; a mechanism that does not apply is `NotApplicable`.
//!
//! ```rust
//! use codes_core::eurocode::exposure_classes::{Carbonation, ExposureClasses};
//!
//! let classes = ExposureClasses::from_exposure_list(&["XC3", "XD1"]).unwrap();
//! assert_eq!(classes.carbonation, Carbonation::XC3);
//! assert_eq!(classes.to_string(), "XC3, XD1");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Corrosion induced by carbonation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Carbonation {
    #[default]
    NotApplicable,
    XC1,
    XC2,
    XC3,
    XC4,
}

/// Corrosion induced by chlorides other than from sea water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Chloride {
    #[default]
    NotApplicable,
    XD1,
    XD2,
    XD3,
}

/// Corrosion induced by chlorides from sea water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ChlorideSeawater {
    #[default]
    NotApplicable,
    XS1,
    XS2,
    XS3,
}

/// Freeze/thaw attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum FreezeThaw {
    #[default]
    NotApplicable,
    XF1,
    XF2,
    XF3,
    XF4,
}

/// Chemical attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ChemicalAttack {
    #[default]
    NotApplicable,
    XA1,
    XA2,
    XA3,
}

macro_rules! impl_exposure_code {
    ($type:ident { $($variant:ident),+ }) => {
        impl $type {
            /// Class code such as "XC3", `None` when not applicable
            pub fn code(&self) -> Option<&'static str> {
                match self {
                    Self::NotApplicable => None,
                    $(Self::$variant => Some(stringify!($variant)),)+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

impl_exposure_code!(Carbonation { XC1, XC2, XC3, XC4 });
impl_exposure_code!(Chloride { XD1, XD2, XD3 });
impl_exposure_code!(ChlorideSeawater { XS1, XS2, XS3 });
impl_exposure_code!(FreezeThaw { XF1, XF2, XF3, XF4 });
impl_exposure_code!(ChemicalAttack { XA1, XA2, XA3 });

/// The exposure classes of one concrete element (table 4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExposureClasses {
    pub carbonation: Carbonation,
    pub chloride: Chloride,
    pub chloride_seawater: ChlorideSeawater,
    pub freeze_thaw: FreezeThaw,
    pub chemical: ChemicalAttack,
}

impl ExposureClasses {
    /// Build from class codes such as `["XC3", "XF1"]`.
    ///
    /// "X0" marks the absence of any risk and may appear alone. Codes are
    /// matched case-insensitively; two codes of the same mechanism are rejected.
    pub fn from_exposure_list<S: AsRef<str>>(codes: &[S]) -> CalcResult<Self> {
        let mut classes = ExposureClasses::default();
        for raw in codes {
            let code = raw.as_ref().trim().to_ascii_uppercase();
            if code == "X0" {
                continue;
            }
            if let Some(class) = Carbonation::from_code(&code) {
                Self::assign(&mut classes.carbonation, class, &code)?;
            } else if let Some(class) = Chloride::from_code(&code) {
                Self::assign(&mut classes.chloride, class, &code)?;
            } else if let Some(class) = ChlorideSeawater::from_code(&code) {
                Self::assign(&mut classes.chloride_seawater, class, &code)?;
            } else if let Some(class) = FreezeThaw::from_code(&code) {
                Self::assign(&mut classes.freeze_thaw, class, &code)?;
            } else if let Some(class) = ChemicalAttack::from_code(&code) {
                Self::assign(&mut classes.chemical, class, &code)?;
            } else {
                return Err(CalcError::unknown_category("exposure class", raw.as_ref()));
            }
        }
        Ok(classes)
    }

    fn assign<T: Copy + PartialEq + Default>(slot: &mut T, class: T, code: &str) -> CalcResult<()> {
        if *slot != T::default() && *slot != class {
            return Err(CalcError::invalid_input(
                "exposure_classes",
                code,
                "only one exposure class per deterioration mechanism is allowed",
            ));
        }
        *slot = class;
        Ok(())
    }

    /// True when no mechanism applies (class X0)
    pub fn no_risk(&self) -> bool {
        *self == ExposureClasses::default()
    }

    fn codes(&self) -> Vec<&'static str> {
        [
            self.carbonation.code(),
            self.chloride.code(),
            self.chloride_seawater.code(),
            self.freeze_thaw.code(),
            self.chemical.code(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl fmt::Display for ExposureClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.no_risk() {
            return write!(f, "X0");
        }
        write!(f, "{}", self.codes().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exposure_list() {
        let classes = ExposureClasses::from_exposure_list(&["xc4", "XS2", "XF3"]).unwrap();
        assert_eq!(classes.carbonation, Carbonation::XC4);
        assert_eq!(classes.chloride, Chloride::NotApplicable);
        assert_eq!(classes.chloride_seawater, ChlorideSeawater::XS2);
        assert_eq!(classes.freeze_thaw, FreezeThaw::XF3);
        assert_eq!(classes.to_string(), "XC4, XS2, XF3");
    }

    #[test]
    fn test_x0() {
        let classes = ExposureClasses::from_exposure_list(&["X0"]).unwrap();
        assert!(classes.no_risk());
        assert_eq!(classes.to_string(), "X0");

        let empty: [&str; 0] = [];
        assert!(ExposureClasses::from_exposure_list(&empty).unwrap().no_risk());
    }

    #[test]
    fn test_unknown_code() {
        let err = ExposureClasses::from_exposure_list(&["XC9"]).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_conflicting_codes() {
        let err = ExposureClasses::from_exposure_list(&["XC1", "XC3"]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(ExposureClasses::from_exposure_list(&["XC1", "XC1"]).is_ok());
    }
}
