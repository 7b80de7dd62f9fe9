//! # Unit Types
//!
//! Physical dimensions of formula inputs and results.
//!
//! Building codes mix unit systems inside one clause (a moment in kNm next to
//! a section modulus in mm³), so every constructor documents its units through
//! these aliases and converts explicitly with the factors below.
//!
//! ## SI Units
//!
//! - Length: millimetres (mm), metres (m)
//! - Force: newtons (N), kilonewtons (kN)
//! - Stress: megapascals (MPa = N/mm²), kilopascals (kPa)
//! - Moment: kilonewton-metres (kNm), newton-millimetres (Nmm)
//! - Angle: degrees, converted to radians before any trigonometry
//!
//! ## Example
//!
//! ```rust
//! use codes_core::units::{deg_to_rad, Mm, NMM_TO_KNM};
//!
//! let depth: Mm = 500.0;
//! assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! assert!((2.0e6 * NMM_TO_KNM - 2.0).abs() < 1e-12);
//! # let _ = depth;
//! ```

// ============================================================================
// Geometry
// ============================================================================

/// Length in millimetres
pub type Mm = f64;
/// Area in mm²
pub type Mm2 = f64;
/// Section modulus in mm³
pub type Mm3 = f64;
/// Second moment of area in mm⁴
pub type Mm4 = f64;
/// Length in metres
pub type M = f64;
/// Area in m²
pub type M2 = f64;
/// Area per metre in mm²/m
pub type Mm2PerM = f64;

// ============================================================================
// Forces and Stresses
// ============================================================================

/// Force in newtons
pub type N = f64;
/// Force in kilonewtons
pub type Kn = f64;
/// Distributed force in kN/m
pub type KnPerM = f64;
/// Stress in MPa (N/mm²)
pub type Mpa = f64;
/// Stress in kPa (kN/m²)
pub type Kpa = f64;
/// Subgrade modulus in kN/m³
pub type KnPerM3 = f64;

// ============================================================================
// Moments and Stiffness
// ============================================================================

/// Moment in kNm
pub type Knm = f64;
/// Moment in Nmm
pub type Nmm = f64;
/// Flexural stiffness in Nmm²
pub type Nmm2 = f64;
/// Flexural stiffness per unit width in Nm²/m
pub type Nm2PerM = f64;
/// Curvature in 1/mm
pub type PerMm = f64;

// ============================================================================
// Other Quantities
// ============================================================================

/// Angle in degrees
pub type Deg = f64;
/// Time in days
pub type Days = f64;
/// Time in hours
pub type Hours = f64;
/// Years of design working life
pub type Years = f64;
/// Mass per area in kg/m²
pub type KgPerM2 = f64;
/// Frequency in Hz
pub type Hz = f64;
/// Ratio without dimension
pub type Dimensionless = f64;
/// Ratio expressed in percent
pub type Percentage = f64;

// ============================================================================
// Conversion Factors
// ============================================================================

/// N to kN
pub const N_TO_KN: f64 = 1.0e-3;
/// kN to N
pub const KN_TO_N: f64 = 1.0e3;
/// Nmm to kNm
pub const NMM_TO_KNM: f64 = 1.0e-6;
/// kNm to Nmm
pub const KNM_TO_NMM: f64 = 1.0e6;
/// mm³ to m³
pub const MM3_TO_M3: f64 = 1.0e-9;
/// MPa to kPa
pub const MPA_TO_KPA: f64 = 1.0e3;
/// m to mm
pub const M_TO_MM: f64 = 1.0e3;

/// Degrees to radians
#[inline]
pub fn deg_to_rad(angle: Deg) -> f64 {
    angle.to_radians()
}

/// Radians to degrees
#[inline]
pub fn rad_to_deg(angle: f64) -> Deg {
    angle.to_degrees()
}

/// Cotangent of an angle in degrees
#[inline]
pub fn cot_deg(angle: Deg) -> f64 {
    1.0 / deg_to_rad(angle).tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions() {
        assert!((deg_to_rad(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((rad_to_deg(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_cotangent() {
        assert!((cot_deg(45.0) - 1.0).abs() < 1e-12);
        assert!((cot_deg(30.0) - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_conversion_factors() {
        assert!((1500.0 * N_TO_KN - 1.5).abs() < 1e-12);
        assert!((1.5 * KN_TO_N - 1500.0).abs() < 1e-9);
        assert!((KNM_TO_NMM * NMM_TO_KNM - 1.0).abs() < 1e-12);
    }
}
