//! # Chapter 6: Ultimate Limit States
//!
//! Fatigue of concrete under compression, plus the punching and
//! strut-and-tie clauses of NEN-EN 1992-1-1+C2:2011 that carry over
//! unchanged from EN 1992-1-1:2004.

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::eurocode::en_1992_1_1_2004::ultimate_limit_state as en_2004;
use crate::formula::{impl_check_formula, impl_reissued_formula, impl_scalar_formula, Formula};
use crate::latex::{check_verdict, fmt_n, LatexFormula, TO};
use crate::units::{Dimensionless, Mm, Mpa};
use crate::validation::ensure_non_negative;

const DOC: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;

/// External control perimeter radius of a column head with l_H > 2·h_H (6.36).
#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeadExternalContourRadius(en_2004::ColumnHeadExternalContourRadius);

impl ColumnHeadExternalContourRadius {
    /// # Arguments
    /// * `d` - Effective depth of the slab (mm)
    /// * `l_h` - Distance from the column face to the edge of the column head (mm)
    /// * `c` - Diameter of the circular column (mm)
    pub fn new(d: Mm, l_h: Mm, c: Mm) -> CalcResult<Self> {
        Ok(Self(en_2004::ColumnHeadExternalContourRadius::new(d, l_h, c)?))
    }
}

impl_reissued_formula!(ColumnHeadExternalContourRadius => en_2004::ColumnHeadExternalContourRadius, DOC);

/// Design compressive stress resistance of compression-tension nodes (6.61).
#[derive(Debug, Clone, Serialize)]
pub struct NodeCompressiveStressResistance(en_2004::NodeCompressiveStressResistance);

impl NodeCompressiveStressResistance {
    pub fn new(k_2: Dimensionless, nu_prime: Dimensionless, f_cd: Mpa) -> CalcResult<Self> {
        Ok(Self(en_2004::NodeCompressiveStressResistance::new(k_2, nu_prime, f_cd)?))
    }
}

impl_reissued_formula!(NodeCompressiveStressResistance => en_2004::NodeCompressiveStressResistance, DOC);

/// Fatigue resistance of concrete under compression, art. 6.8.7(1).
///
/// # Formula
/// E_cd,max,equ + 0.43 · √(1 - R_equ) ≤ 1
#[derive(Debug, Clone, Serialize)]
pub struct FatigueResistanceConcreteCompression {
    e_cd_max_equ: Dimensionless,
    r_equ: Dimensionless,
    result: bool,
}

impl FatigueResistanceConcreteCompression {
    /// # Arguments
    /// * `e_cd_max_equ` - Maximum compressive stress level, formula 6.74
    /// * `r_equ` - Stress ratio E_cd,min,equ / E_cd,max,equ, at most 1
    pub fn new(e_cd_max_equ: Dimensionless, r_equ: Dimensionless) -> CalcResult<Self> {
        ensure_non_negative(&[("e_cd_max_equ", e_cd_max_equ), ("r_equ", r_equ)])?;
        if r_equ > 1.0 {
            return Err(CalcError::invalid_input("r_equ", r_equ.to_string(), "the stress ratio cannot exceed 1"));
        }
        let result = e_cd_max_equ + 0.43 * (1.0 - r_equ).sqrt() <= 1.0;
        Ok(Self { e_cd_max_equ, r_equ, result }.traced())
    }
}

impl Formula for FatigueResistanceConcreteCompression {
    type Output = bool;
    const LABEL: &'static str = "6.72";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Fatigue resistance of concrete under compression";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        LatexFormula::new(
            "CHECK",
            check_verdict(self.result),
            r"E_{cd,max,equ} + 0.43 \cdot \sqrt{1 - R_{equ}} \leq 1",
            format!(
                r"{} + 0.43 \cdot \sqrt{{1 - {}}} \leq 1",
                fmt_n(self.e_cd_max_equ, n),
                fmt_n(self.r_equ, n)
            ),
            TO,
        )
    }
}

impl_scalar_formula!(ColumnHeadExternalContourRadius, NodeCompressiveStressResistance);
impl_check_formula!(FatigueResistanceConcreteCompression);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_head_external_contour_radius() {
        let r = ColumnHeadExternalContourRadius::new(400.0, 250.0, 400.0).unwrap();
        assert_eq!(r, 1250.0);
        assert_eq!(r.citation(), "NEN-EN 1992-1-1+C2:2011 (6.36)");
        assert_eq!(r.latex().short(), r"r_{cont,ext} = 1250.000 \ mm");
        assert!(ColumnHeadExternalContourRadius::new(400.0, -250.0, 400.0).is_err());
    }

    #[test]
    fn test_node_compressive_stress_resistance() {
        let node = NodeCompressiveStressResistance::new(0.85, 0.88, 20.0).unwrap();
        assert!((node.result() - 14.96).abs() < 1e-9);
        assert_eq!(
            node.latex_with_decimals(2).complete(),
            r"\sigma_{Rd,max} = k_2 \cdot \nu' \cdot f_{cd} = 0.85 \cdot 0.88 \cdot 20.00 = 14.96 \ MPa"
        );
        assert_eq!(NodeCompressiveStressResistance::SOURCE_DOCUMENT, SourceDocument::NenEn1992_1_1C2_2011);
    }

    #[test]
    fn test_fatigue_resistance_concrete_compression() {
        let check = FatigueResistanceConcreteCompression::new(0.8, 0.5).unwrap();
        assert_eq!(check, false);
        assert_eq!(
            check.latex().complete(),
            r"CHECK \to E_{cd,max,equ} + 0.43 \cdot \sqrt{1 - R_{equ}} \leq 1 \to 0.800 + 0.43 \cdot \sqrt{1 - 0.500} \leq 1 \to \text{Not OK}"
        );
        assert_eq!(check.latex().short(), r"CHECK \to \text{Not OK}");
        assert_eq!(check.citation(), "NEN-EN 1992-1-1+C2:2011 (6.72)");

        assert_eq!(FatigueResistanceConcreteCompression::new(0.5, 0.5).unwrap(), true);
    }

    #[test]
    fn test_fatigue_resistance_concrete_compression_invalid_inputs() {
        for (e_cd_max_equ, r_equ, field, code) in [
            (-0.8, 0.5, "e_cd_max_equ", "NEGATIVE_VALUE"),
            (0.8, -0.5, "r_equ", "NEGATIVE_VALUE"),
            (0.8, 1.5, "r_equ", "INVALID_INPUT"),
        ] {
            let err = FatigueResistanceConcreteCompression::new(e_cd_max_equ, r_equ).unwrap_err();
            assert_eq!((err.field(), err.error_code()), (Some(field), code));
        }
    }
}
