//! # Chapter 9: Detailing of Members and Particular Rules
//!
//! Minimum reinforcement, curtailment and tying rules of EN 1992-1-1:2004.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, latex_fraction, latex_max_curly_brackets, replace_symbols, LatexFormula, EQUALS};
use crate::units::{cot_deg, deg_to_rad, Deg, Dimensionless, Kn, KnPerM, M, Mm, Mm2, Mpa, KN_TO_N};
use crate::validation::{ensure_at_most_90_degrees, ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::En1992_1_1_2004;

// =============================================================================
// BEAMS (9.2)
// =============================================================================

/// Minimum longitudinal tension reinforcement in beams, formula 9.1N.
///
/// # Formula
/// A_s,min = max{0.26 · f_ctm / f_yk · b_t · d; 0.0013 · b_t · d}
#[derive(Debug, Clone, Serialize)]
pub struct MinimumTensileReinforcementBeam {
    f_ctm: Mpa,
    f_yk: Mpa,
    b_t: Mm,
    d: Mm,
    result: Mm2,
}

impl MinimumTensileReinforcementBeam {
    /// # Arguments
    /// * `f_ctm` - Mean axial tensile strength of concrete (MPa)
    /// * `f_yk` - Characteristic yield strength of reinforcement (MPa)
    /// * `b_t` - Mean width of the tension zone; for T-beams with the flange in compression, the web width (mm)
    /// * `d` - Effective depth (mm)
    pub fn new(f_ctm: Mpa, f_yk: Mpa, b_t: Mm, d: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("f_ctm", f_ctm), ("b_t", b_t), ("d", d)])?;
        ensure_positive(&[("f_yk", f_yk)])?;
        let result = (0.26 * (f_ctm / f_yk) * b_t * d).max(0.0013 * b_t * d);
        Ok(Self { f_ctm, f_yk, b_t, d, result }.traced())
    }
}

impl Formula for MinimumTensileReinforcementBeam {
    type Output = f64;
    const LABEL: &'static str = "9.1N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum tensile reinforcement in beams";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let b_t = fmt_n(self.b_t, n);
        let d = fmt_n(self.d, n);
        LatexFormula::new(
            "A_{s,min}",
            fmt_n(self.result, n),
            latex_max_curly_brackets(&[
                format!(r"0.26 \cdot {} \cdot b_t \cdot d", latex_fraction("f_{ctm}", "f_{yk}")),
                r"0.0013 \cdot b_t \cdot d".to_string(),
            ]),
            latex_max_curly_brackets(&[
                format!(
                    r"0.26 \cdot {} \cdot {b_t} \cdot {d}",
                    latex_fraction(fmt_n(self.f_ctm, n), fmt_n(self.f_yk, n))
                ),
                format!(r"0.0013 \cdot {b_t} \cdot {d}"),
            ]),
            EQUALS,
        )
    }
}

/// Shift a_l of the moment line for members with shear reinforcement, formula 9.2.
///
/// # Formula
/// a_l = z · (cot θ - cot α) / 2
#[derive(Debug, Clone, Serialize)]
pub struct ShiftInMomentDiagram {
    z: Mm,
    theta: Deg,
    alpha: Deg,
    result: Mm,
}

impl ShiftInMomentDiagram {
    /// # Arguments
    /// * `z` - Inner lever arm (mm)
    /// * `theta` - Angle of the compression strut, 6.2.3 (degrees)
    /// * `alpha` - Angle of the shear reinforcement with the beam axis (degrees)
    pub fn new(z: Mm, theta: Deg, alpha: Deg) -> CalcResult<Self> {
        ensure_non_negative(&[("z", z)])?;
        ensure_positive(&[("theta", theta), ("alpha", alpha)])?;
        ensure_at_most_90_degrees(&[("theta", theta), ("alpha", alpha)])?;
        let result = z * (cot_deg(theta) - cot_deg(alpha)) / 2.0;
        Ok(Self { z, theta, alpha, result }.traced())
    }
}

impl Formula for ShiftInMomentDiagram {
    type Output = f64;
    const LABEL: &'static str = "9.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Shift in the moment diagram";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "a_l",
            fmt_n(self.result, n),
            r"z \cdot \left( \cot(\theta) - \cot(\alpha) \right) / 2",
            format!(
                r"{} \cdot \left( \cot({}) - \cot({}) \right) / 2",
                fmt_n(self.z, n),
                fmt_n(self.theta, n),
                fmt_n(self.alpha, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Tensile force F_E to be anchored at an end support, formula 9.3.
///
/// # Formula
/// F_E = |V_Ed| · a_l / z + N_Ed
#[derive(Debug, Clone, Serialize)]
pub struct EndSupportAnchorageForce {
    v_ed: Kn,
    a_l: Mm,
    z: Mm,
    n_ed: Kn,
    result: Kn,
}

impl EndSupportAnchorageForce {
    /// # Arguments
    /// * `v_ed` - Design shear force; only its magnitude is used (kN)
    /// * `a_l` - Shift of the moment line, see [`ShiftInMomentDiagram`] (mm)
    /// * `z` - Inner lever arm (mm)
    /// * `n_ed` - Axial force, added to or subtracted from the tensile force (kN)
    pub fn new(v_ed: Kn, a_l: Mm, z: Mm, n_ed: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("a_l", a_l)])?;
        ensure_positive(&[("z", z)])?;
        Ok(Self { v_ed, a_l, z, n_ed, result: v_ed.abs() * a_l / z + n_ed }.traced())
    }
}

impl Formula for EndSupportAnchorageForce {
    type Output = f64;
    const LABEL: &'static str = "9.3";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Force to be anchored at an end support";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_E",
            fmt_n(self.result, n),
            r"|V_{Ed}| \cdot a_l / z + N_{Ed}",
            format!(
                r"|{}| \cdot {} / {} + {}",
                fmt_n(self.v_ed, n),
                fmt_n(self.a_l, n),
                fmt_n(self.z, n),
                fmt_n(self.n_ed, n)
            ),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Shear reinforcement ratio ρ_w, formula 9.4.
///
/// # Formula
/// ρ_w = A_sw / (s · b_w · sin α)
#[derive(Debug, Clone, Serialize)]
pub struct ShearReinforcementRatio {
    a_sw: Mm2,
    s: Mm,
    b_w: Mm,
    alpha: Deg,
    result: Dimensionless,
}

impl ShearReinforcementRatio {
    /// # Arguments
    /// * `a_sw` - Area of shear reinforcement within length s (mm²)
    /// * `s` - Spacing of the shear reinforcement along the member (mm)
    /// * `b_w` - Web width (mm)
    /// * `alpha` - Angle of the shear reinforcement with the member axis (degrees)
    pub fn new(a_sw: Mm2, s: Mm, b_w: Mm, alpha: Deg) -> CalcResult<Self> {
        ensure_non_negative(&[("a_sw", a_sw)])?;
        ensure_positive(&[("s", s), ("b_w", b_w), ("alpha", alpha)])?;
        ensure_at_most_90_degrees(&[("alpha", alpha)])?;
        let result = a_sw / (s * b_w * deg_to_rad(alpha).sin());
        Ok(Self { a_sw, s, b_w, alpha, result }.traced())
    }
}

impl Formula for ShearReinforcementRatio {
    type Output = f64;
    const LABEL: &'static str = "9.4";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Shear reinforcement ratio";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    /// The ratio itself is always printed with six decimals.
    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            r"\rho_w",
            fmt_n(self.result, 6),
            r"\frac{A_{sw}}{s \cdot b_w \cdot \sin(\alpha)}",
            format!(
                r"\frac{{{}}}{{{} \cdot {} \cdot \sin({})}}",
                fmt_n(self.a_sw, n),
                fmt_n(self.s, n),
                fmt_n(self.b_w, n),
                fmt_n(self.alpha, n)
            ),
            EQUALS,
        )
    }
}

/// Maximum longitudinal spacing s_l,max of shear assemblies, formula 9.6N.
///
/// # Formula
/// s_l,max = 0.75 · d · (1 + cot α)
#[derive(Debug, Clone, Serialize)]
pub struct MaximumLongitudinalSpacingShearReinforcement {
    d: Mm,
    alpha: Deg,
    result: Mm,
}

impl MaximumLongitudinalSpacingShearReinforcement {
    pub fn new(d: Mm, alpha: Deg) -> CalcResult<Self> {
        ensure_non_negative(&[("d", d)])?;
        ensure_positive(&[("alpha", alpha)])?;
        ensure_at_most_90_degrees(&[("alpha", alpha)])?;
        Ok(Self { d, alpha, result: 0.75 * d * (1.0 + cot_deg(alpha)) }.traced())
    }
}

impl Formula for MaximumLongitudinalSpacingShearReinforcement {
    type Output = f64;
    const LABEL: &'static str = "9.6N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Maximum longitudinal spacing of shear reinforcement";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "s_{l,max}",
            fmt_n(self.result, n),
            r"0.75 \cdot d \cdot \left( 1 + \cot(\alpha) \right)",
            format!(
                r"0.75 \cdot {} \cdot \left( 1 + \cot({}) \right)",
                fmt_n(self.d, n),
                fmt_n(self.alpha, n)
            ),
            EQUALS,
        )
        .with_unit("mm")
    }
}

/// Maximum transverse spacing s_t,max of the legs of shear links, formula 9.8N.
///
/// # Formula
/// s_t,max = min(0.75 · d; 600 mm)
#[derive(Debug, Clone, Serialize)]
pub struct MaximumTransverseSpacingShearLegs {
    d: Mm,
    result: Mm,
}

impl MaximumTransverseSpacingShearLegs {
    pub fn new(d: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("d", d)])?;
        Ok(Self { d, result: (0.75 * d).min(600.0) }.traced())
    }
}

impl Formula for MaximumTransverseSpacingShearLegs {
    type Output = f64;
    const LABEL: &'static str = "9.8N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Maximum transverse spacing of shear link legs";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "s_{t,max}",
            fmt_n(self.result, n),
            r"\min(0.75 \cdot d, 600 \ \text{mm})",
            format!(r"\min(0.75 \cdot {}, 600 \ \text{{mm}})", fmt_n(self.d, n)),
            EQUALS,
        )
        .with_unit("mm")
    }
}

// =============================================================================
// SLABS, COLUMNS AND FOUNDATIONS (9.4 - 9.8)
// =============================================================================

/// Minimum punching shear reinforcement per link A_sw,min, formula 9.11.
///
/// # Formula
/// A_sw,min · (1.5 · sin α + cos α) / (s_r · s_t) ≥ 0.08 · √f_ck / f_yk
#[derive(Debug, Clone, Serialize)]
pub struct MinimumPunchingShearReinforcement {
    alpha: Deg,
    s_r: Mm,
    s_t: Mm,
    f_ck: Mpa,
    f_yk: Mpa,
    result: Mm2,
}

impl MinimumPunchingShearReinforcement {
    /// # Arguments
    /// * `alpha` - Angle between the shear reinforcement and the main steel (degrees)
    /// * `s_r` - Spacing of shear links in the radial direction (mm)
    /// * `s_t` - Spacing of shear links in the tangential direction (mm)
    /// * `f_ck` - Characteristic compressive strength of concrete (MPa)
    /// * `f_yk` - Characteristic yield strength of reinforcement (MPa)
    pub fn new(alpha: Deg, s_r: Mm, s_t: Mm, f_ck: Mpa, f_yk: Mpa) -> CalcResult<Self> {
        ensure_positive(&[("s_r", s_r), ("s_t", s_t), ("f_yk", f_yk)])?;
        ensure_non_negative(&[("alpha", alpha), ("f_ck", f_ck)])?;
        ensure_at_most_90_degrees(&[("alpha", alpha)])?;
        let alpha_rad = deg_to_rad(alpha);
        let geometry = (1.5 * alpha_rad.sin() + alpha_rad.cos()) / (s_r * s_t);
        let result = 0.08 * f_ck.sqrt() / f_yk / geometry;
        Ok(Self { alpha, s_r, s_t, f_ck, f_yk, result }.traced())
    }
}

impl Formula for MinimumPunchingShearReinforcement {
    type Output = f64;
    const LABEL: &'static str = "9.11";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum punching shear reinforcement";

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{0.08 \cdot \sqrt{f_{ck}}}{f_{yk}} \cdot \frac{s_r \cdot s_t}{1.5 \cdot \sin(\alpha) + \cos(\alpha)}";
        let numeric = replace_symbols(
            equation,
            &[
                (r"\alpha", fmt_n(self.alpha, n)),
                ("s_r", fmt_n(self.s_r, n)),
                ("s_t", fmt_n(self.s_t, n)),
                ("f_{ck}", fmt_n(self.f_ck, n)),
                ("f_{yk}", fmt_n(self.f_yk, n)),
            ],
        );
        LatexFormula::new("A_{sw,min}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("mm^2")
    }
}

/// Minimum longitudinal reinforcement in columns, formula 9.12N.
///
/// # Formula
/// A_s,min = max(0.10 · N_Ed / f_yd; 0.002 · A_c)
#[derive(Debug, Clone, Serialize)]
pub struct MinimumLongitudinalReinforcementColumn {
    n_ed: Kn,
    f_yd: Mpa,
    a_c: Mm2,
    result: Mm2,
}

impl MinimumLongitudinalReinforcementColumn {
    /// # Arguments
    /// * `n_ed` - Design axial compression force (kN)
    /// * `f_yd` - Design yield strength of reinforcement (MPa)
    /// * `a_c` - Concrete cross-sectional area (mm²)
    pub fn new(n_ed: Kn, f_yd: Mpa, a_c: Mm2) -> CalcResult<Self> {
        ensure_non_negative(&[("n_ed", n_ed), ("a_c", a_c)])?;
        ensure_positive(&[("f_yd", f_yd)])?;
        let result = (0.1 * n_ed * KN_TO_N / f_yd).max(0.002 * a_c);
        Ok(Self { n_ed, f_yd, a_c, result }.traced())
    }
}

impl Formula for MinimumLongitudinalReinforcementColumn {
    type Output = f64;
    const LABEL: &'static str = "9.12N";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum longitudinal reinforcement in columns";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "A_{s,min}",
            fmt_n(self.result, n),
            r"\max( \frac{0.10 \cdot N_{Ed}}{f_{yd}}, 0.002 \cdot A_c )",
            format!(
                r"\max( \frac{{0.10 \cdot {} \cdot 1000}}{{{}}}, 0.002 \cdot {} )",
                fmt_n(self.n_ed, n),
                fmt_n(self.f_yd, n),
                fmt_n(self.a_c, n)
            ),
            EQUALS,
        )
        .with_unit("mm^2")
    }
}

/// Tensile force F_s to be anchored in a footing, formula 9.13.
///
/// # Formula
/// F_s = R · z_e / z_i
#[derive(Debug, Clone, Serialize)]
pub struct FootingAnchorageForce {
    r: Kn,
    z_e: Mm,
    z_i: Mm,
    result: Kn,
}

impl FootingAnchorageForce {
    /// # Arguments
    /// * `r` - Resultant of the ground pressure within distance x, figure 9.13 (kN)
    /// * `z_e` - External lever arm between R and the vertical force N_Ed (mm)
    /// * `z_i` - Internal lever arm between the reinforcement and the horizontal force F_c (mm)
    pub fn new(r: Kn, z_e: Mm, z_i: Mm) -> CalcResult<Self> {
        ensure_non_negative(&[("r", r), ("z_e", z_e)])?;
        ensure_positive(&[("z_i", z_i)])?;
        Ok(Self { r, z_e, z_i, result: r * z_e / z_i }.traced())
    }
}

impl Formula for FootingAnchorageForce {
    type Output = f64;
    const LABEL: &'static str = "9.13";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Tensile force to be anchored in footings";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_s",
            fmt_n(self.result, n),
            r"R \cdot z_e / z_i",
            format!(r"{} \cdot {} / {}", fmt_n(self.r, n), fmt_n(self.z_e, n), fmt_n(self.z_i, n)),
            EQUALS,
        )
        .with_unit("kN")
    }
}

/// Minimum tie force F_tie on an internal beam line, formula 9.16.
///
/// # Formula
/// F_tie = max(q_3 · (l_1 + l_2) / 2; Q_4)
#[derive(Debug, Clone, Serialize)]
pub struct MinimumInternalTieForce {
    q_3: KnPerM,
    l_1: M,
    l_2: M,
    q_4: Kn,
    result: Kn,
}

impl MinimumInternalTieForce {
    /// # Arguments
    /// * `q_3` - Tie load per unit length, recommended 20 kN/m
    /// * `l_1`, `l_2` - Spans of the floor slabs on either side of the beam, figure 9.15 (m)
    /// * `q_4` - Minimum tie force, recommended 70 kN
    pub fn new(q_3: KnPerM, l_1: M, l_2: M, q_4: Kn) -> CalcResult<Self> {
        ensure_non_negative(&[("q_3", q_3), ("l_1", l_1), ("l_2", l_2), ("q_4", q_4)])?;
        let result = (q_3 * (l_1 + l_2) / 2.0).max(q_4);
        Ok(Self { q_3, l_1, l_2, q_4, result }.traced())
    }
}

impl Formula for MinimumInternalTieForce {
    type Output = f64;
    const LABEL: &'static str = "9.16";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Minimum force on an internal beam line";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "F_{tie}",
            fmt_n(self.result, n),
            r"\max(q_3 \cdot (l_1 + l_2) / 2, Q_4)",
            format!(
                r"\max({} \cdot ({} + {}) / 2, {})",
                fmt_n(self.q_3, n),
                fmt_n(self.l_1, n),
                fmt_n(self.l_2, n),
                fmt_n(self.q_4, n)
            ),
            EQUALS,
        )
        .with_unit("kN")
    }
}

impl_scalar_formula!(
    MinimumTensileReinforcementBeam,
    ShiftInMomentDiagram,
    EndSupportAnchorageForce,
    ShearReinforcementRatio,
    MaximumLongitudinalSpacingShearReinforcement,
    MaximumTransverseSpacingShearLegs,
    MinimumPunchingShearReinforcement,
    MinimumLongitudinalReinforcementColumn,
    FootingAnchorageForce,
    MinimumInternalTieForce,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-6 * expected.abs().max(1.0)
    }

    #[test]
    fn test_minimum_tensile_reinforcement_beam() {
        let a_s = MinimumTensileReinforcementBeam::new(2.9, 500.0, 300.0, 450.0).unwrap();
        assert!(close(a_s.result(), 203.58));
        assert_eq!(
            a_s.latex().complete(),
            r"A_{s,min} = \max \left\{0.26 \cdot \frac{f_{ctm}}{f_{yk}} \cdot b_t \cdot d; 0.0013 \cdot b_t \cdot d\right\} = \max \left\{0.26 \cdot \frac{2.90}{500.00} \cdot 300.00 \cdot 450.00; 0.0013 \cdot 300.00 \cdot 450.00\right\} = 203.58"
        );
        let lower_bound = MinimumTensileReinforcementBeam::new(1.6, 500.0, 300.0, 450.0).unwrap();
        assert!(close(lower_bound.result(), 175.5));
        assert!(MinimumTensileReinforcementBeam::new(2.9, 0.0, 300.0, 450.0).is_err());
    }

    #[test]
    fn test_minimum_tensile_reinforcement_beam_rendering() {
        let a_s = MinimumTensileReinforcementBeam::new(2.0, 355.0, 50.0, 150.0).unwrap();
        assert!(close(a_s.result(), 780.0 / 71.0));
        assert_eq!(
            a_s.latex().complete(),
            r"A_{s,min} = \max \left\{0.26 \cdot \frac{f_{ctm}}{f_{yk}} \cdot b_t \cdot d; 0.0013 \cdot b_t \cdot d\right\} = \max \left\{0.26 \cdot \frac{2.00}{355.00} \cdot 50.00 \cdot 150.00; 0.0013 \cdot 50.00 \cdot 150.00\right\} = 10.99"
        );
        assert_eq!(a_s.latex().short(), r"A_{s,min} = 10.99");
        assert_eq!(a_s.latex().to_string(), a_s.latex().complete());

        let second_term = MinimumTensileReinforcementBeam::new(2.0, 540.0, 50.0, 150.0).unwrap();
        assert!(close(second_term.result(), 39.0 / 4.0));
    }

    #[test]
    fn test_minimum_tensile_reinforcement_beam_negative_inputs() {
        for (f_ctm, f_yk, b_t, d, field) in [
            (-2.0, 355.0, 50.0, 150.0, "f_ctm"),
            (2.0, -355.0, 50.0, 150.0, "f_yk"),
            (2.0, 355.0, -50.0, 150.0, "b_t"),
            (2.0, 355.0, 50.0, -150.0, "d"),
        ] {
            let err = MinimumTensileReinforcementBeam::new(f_ctm, f_yk, b_t, d).unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_shift_in_moment_diagram() {
        assert!(close(ShiftInMomentDiagram::new(400.0, 45.0, 90.0).unwrap().result(), 200.0));
        assert!(close(ShiftInMomentDiagram::new(400.0, 30.0, 60.0).unwrap().result(), 230.940108));
        assert_eq!(
            ShiftInMomentDiagram::new(400.0, 30.0, 100.0).unwrap_err().error_code(),
            "GREATER_THAN_90"
        );
        assert!(ShiftInMomentDiagram::new(400.0, 30.0, 0.0).is_err());
    }

    #[test]
    fn test_end_support_anchorage_force() {
        let f = EndSupportAnchorageForce::new(-100.0, 200.0, 400.0, 50.0).unwrap();
        assert_eq!(f, 100.0);
        assert_eq!(
            f.latex().complete(),
            r"F_E = |V_{Ed}| \cdot a_l / z + N_{Ed} = |-100.00| \cdot 200.00 / 400.00 + 50.00 = 100.00 \ kN"
        );
        assert!(EndSupportAnchorageForce::new(100.0, 200.0, 0.0, 50.0).is_err());
    }

    #[test]
    fn test_shear_reinforcement_ratio() {
        let rho = ShearReinforcementRatio::new(100.0, 200.0, 300.0, 90.0).unwrap();
        assert!(close(rho.result(), 0.001667));
        assert_eq!(rho.latex().result, "0.001667");
        assert!(close(ShearReinforcementRatio::new(100.0, 200.0, 300.0, 60.0).unwrap().result(), 0.001925));
        assert!(ShearReinforcementRatio::new(100.0, 0.0, 300.0, 90.0).is_err());
    }

    #[test]
    fn test_shear_link_spacing() {
        assert!(close(MaximumLongitudinalSpacingShearReinforcement::new(450.0, 90.0).unwrap().result(), 337.5));
        assert!(close(MaximumLongitudinalSpacingShearReinforcement::new(450.0, 45.0).unwrap().result(), 675.0));
        assert_eq!(MaximumTransverseSpacingShearLegs::new(450.0).unwrap(), 337.5);
        assert_eq!(MaximumTransverseSpacingShearLegs::new(1000.0).unwrap(), 600.0);
        assert_eq!(
            MaximumTransverseSpacingShearLegs::new(1000.0).unwrap().latex().complete(),
            r"s_{t,max} = \min(0.75 \cdot d, 600 \ \text{mm}) = \min(0.75 \cdot 1000.00, 600 \ \text{mm}) = 600.00 \ mm"
        );
        assert!(MaximumTransverseSpacingShearLegs::new(-1.0).is_err());
    }

    #[test]
    fn test_minimum_punching_shear_reinforcement() {
        let a_sw = MinimumPunchingShearReinforcement::new(90.0, 200.0, 300.0, 30.0, 500.0).unwrap();
        assert!(close(a_sw.result(), 35.054244));
        assert!(close(
            MinimumPunchingShearReinforcement::new(45.0, 200.0, 300.0, 30.0, 500.0).unwrap().result(),
            29.744512
        ));
        assert_eq!(
            a_sw.latex_with_decimals(1).numeric_equation,
            r"\frac{0.08 \cdot \sqrt{30.0}}{500.0} \cdot \frac{200.0 \cdot 300.0}{1.5 \cdot \sin(90.0) + \cos(90.0)}"
        );
        assert!(MinimumPunchingShearReinforcement::new(90.0, 0.0, 300.0, 30.0, 500.0).is_err());
    }

    #[test]
    fn test_minimum_longitudinal_reinforcement_column() {
        assert!(close(MinimumLongitudinalReinforcementColumn::new(1500.0, 435.0, 160000.0).unwrap().result(), 344.827586));
        assert!(close(MinimumLongitudinalReinforcementColumn::new(500.0, 435.0, 160000.0).unwrap().result(), 320.0));
        assert!(MinimumLongitudinalReinforcementColumn::new(-500.0, 435.0, 160000.0).is_err());
    }

    #[test]
    fn test_footing_and_tie_forces() {
        assert_eq!(FootingAnchorageForce::new(500.0, 300.0, 600.0).unwrap(), 250.0);
        assert!(FootingAnchorageForce::new(500.0, 300.0, 0.0).is_err());

        let tie = MinimumInternalTieForce::new(20.0, 5.0, 6.0, 70.0).unwrap();
        assert_eq!(tie, 110.0);
        assert_eq!(
            tie.latex().complete(),
            r"F_{tie} = \max(q_3 \cdot (l_1 + l_2) / 2, Q_4) = \max(20.00 \cdot (5.00 + 6.00) / 2, 70.00) = 110.00 \ kN"
        );
        assert_eq!(MinimumInternalTieForce::new(20.0, 3.0, 3.0, 70.0).unwrap(), 70.0);
    }

    #[test]
    fn test_link_spacing_and_tie_force_reject_invalid_inputs() {
        let cases = [
            (MaximumLongitudinalSpacingShearReinforcement::new(-450.0, 90.0).err(), "d", "NEGATIVE_VALUE"),
            (MaximumLongitudinalSpacingShearReinforcement::new(450.0, 0.0).err(), "alpha", "LESS_OR_EQUAL_TO_ZERO"),
            (MaximumLongitudinalSpacingShearReinforcement::new(450.0, 120.0).err(), "alpha", "GREATER_THAN_90"),
            (MinimumInternalTieForce::new(-20.0, 5.0, 6.0, 70.0).err(), "q_3", "NEGATIVE_VALUE"),
            (MinimumInternalTieForce::new(20.0, -5.0, 6.0, 70.0).err(), "l_1", "NEGATIVE_VALUE"),
            (MinimumInternalTieForce::new(20.0, 5.0, -6.0, 70.0).err(), "l_2", "NEGATIVE_VALUE"),
            (MinimumInternalTieForce::new(20.0, 5.0, 6.0, -70.0).err(), "q_4", "NEGATIVE_VALUE"),
        ];
        for (err, field, code) in cases {
            let err = err.expect("invalid input accepted");
            assert_eq!((err.field(), err.error_code()), (Some(field), code));
        }
    }
}
