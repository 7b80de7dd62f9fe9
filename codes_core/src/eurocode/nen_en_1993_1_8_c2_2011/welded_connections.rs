//! # Chapter 4: Welded Connections

use serde::Serialize;

use crate::documents::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{impl_check_formula, Formula};
use crate::latex::{check_verdict, fmt_n, replace_symbols, LatexFormula, TO};
use crate::units::N;
use crate::validation::ensure_non_negative;

const DOC: SourceDocument = SourceDocument::NenEn1993_1_8C2_2011;

/// Weld force per unit length against the weld resistance, art. 4.5.3.3(1).
///
/// # Formula
/// F_w,Ed ≤ F_w,Rd
#[derive(Debug, Clone, Serialize)]
pub struct WeldedConnectionCheck {
    fw_ed: N,
    fw_rd: N,
    result: bool,
}

impl WeldedConnectionCheck {
    /// # Arguments
    /// * `fw_ed` - Design weld force per unit length (N)
    /// * `fw_rd` - Design weld resistance per unit length (N)
    pub fn new(fw_ed: N, fw_rd: N) -> CalcResult<Self> {
        ensure_non_negative(&[("fw_ed", fw_ed), ("fw_rd", fw_rd)])?;
        Ok(Self { fw_ed, fw_rd, result: fw_ed <= fw_rd }.traced())
    }
}

impl Formula for WeldedConnectionCheck {
    type Output = bool;
    const LABEL: &'static str = "4.2";
    const SOURCE_DOCUMENT: SourceDocument = DOC;
    const NAME: &'static str = "Welded connection check";

    fn result(&self) -> bool {
        self.result
    }

    fn latex_with_decimals(&self, n: usize) -> LatexFormula {
        let equation = r"F_{w,Ed} \leq F_{w,Rd}";
        let substitute = |unit: &str| {
            replace_symbols(
                equation,
                &[
                    ("F_{w,Ed}", format!("{}{unit}", fmt_n(self.fw_ed, n))),
                    ("F_{w,Rd}", format!("{}{unit}", fmt_n(self.fw_rd, n))),
                ],
            )
        };
        LatexFormula::new("CHECK", check_verdict(self.result), equation, substitute(""), TO)
            .with_numeric_equation_with_units(substitute(r" \ N"))
    }
}

impl_check_formula!(WeldedConnectionCheck);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_welded_connection_check() {
        let check = WeldedConnectionCheck::new(300.0, 400.0).unwrap();
        assert_eq!(check, true);
        assert_eq!(
            check.latex().complete(),
            r"CHECK \to F_{w,Ed} \leq F_{w,Rd} \to 300.000 \leq 400.000 \to OK"
        );
        assert_eq!(
            check.latex_with_decimals(1).complete_with_units(),
            r"CHECK \to F_{w,Ed} \leq F_{w,Rd} \to 300.0 \ N \leq 400.0 \ N \to OK"
        );
    }

    #[test]
    fn test_welded_connection_check_fails() {
        let check = WeldedConnectionCheck::new(500.0, 400.0).unwrap();
        assert_eq!(check, false);
        assert_eq!(check.latex().short(), r"CHECK \to \text{Not OK}");
        assert_eq!(WeldedConnectionCheck::new(-1.0, 400.0).unwrap_err().field(), Some("fw_ed"));
    }
}
