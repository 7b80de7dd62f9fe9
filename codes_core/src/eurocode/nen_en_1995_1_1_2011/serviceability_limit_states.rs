//! # Chapter 7: Serviceability Limit States
//!
//! Vibration of residential floors, art. 7.3.3.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_scalar_formula, Formula};
use crate::latex::{fmt_n, replace_symbols, LatexFormula, EQUALS};
use crate::units::{Hz, KgPerM2, Nm2PerM, M};
use crate::validation::{ensure_non_negative, ensure_positive};

const DOC: SourceDocument = SourceDocument::NenEn1995_1_1_2011;

/// Fundamental frequency of a rectangular floor simply supported along all
/// four sides, art. 7.3.3(3).
///
/// # Formula
/// f_1 = π / (2·l²) · √((EI)_l / m)
#[derive(Debug, Clone, Serialize)]
pub struct NaturalFrequency {
    length: M,
    ei_l: Nm2PerM,
    m: KgPerM2,
    result: Hz,
}

impl NaturalFrequency {
    /// # Arguments
    /// * `length` - Floor span (m)
    /// * `ei_l` - Equivalent plate bending stiffness about an axis perpendicular to the beams (Nm²/m)
    /// * `m` - Mass per unit area (kg/m²)
    pub fn new(length: M, ei_l: Nm2PerM, m: KgPerM2) -> CalcResult<Self> {
        ensure_positive(&[("m", m), ("length", length)])?;
        ensure_non_negative(&[("ei_l", ei_l)])?;
        let result = std::f64::consts::PI / (2.0 * length.powi(2)) * (ei_l / m).sqrt();
        Ok(Self { length, ei_l, m, result }.traced())
    }
}

impl Formula for NaturalFrequency {
    type Output = f64;
    const LABEL: &'static str = "7.5";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Natural frequency of a floor";
    const DEFAULT_DECIMALS: usize = 2;

    fn result(&self) -> f64 {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"\frac{\pi}{2 \cdot l^{2}} \cdot \sqrt{\frac{(EI)_{l}}{m}}";
        let numeric = replace_symbols(
            equation,
            &[
                ("(EI)_{l}", fmt_n(self.ei_l, n)),
                (" l", format!(" {}", fmt_n(self.length, n))),
                ("{m}", format!("{{{}}}", fmt_n(self.m, n))),
            ],
        );
        LatexFormula::new("f_{1}", fmt_n(self.result, n), equation, numeric, EQUALS).with_unit("Hz")
    }
}

impl_scalar_formula!(NaturalFrequency);
