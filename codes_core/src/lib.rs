//! # codes_core - Building Code Formula Catalog
//!
//! `codes_core` implements individual equations from structural and
//! geotechnical design codes. Every equation is a small struct: construct it
//! with the physical inputs of the clause, and it validates them, evaluates
//! the result once, and can render the calculation as LaTeX for a report.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Formulas are immutable once constructed
//! - **Validated**: Invalid inputs fail at construction with a structured error
//! - **Traceable**: Every formula cites its clause and code edition
//! - **Result-like**: A formula compares and formats as its result
//!
//! ## Quick Start
//!
//! ```rust
//! use codes_core::eurocode::en_1992_1_1_2004::ultimate_limit_state::ColumnHeadExternalContourRadius;
//! use codes_core::Formula;
//!
//! let r_cont = ColumnHeadExternalContourRadius::new(500.0, 1000.0, 300.0)?;
//! assert_eq!(r_cont, 2150.0);
//! assert_eq!(
//!     r_cont.latex().complete(),
//!     r"r_{cont,ext} = l_{H} + 2 \cdot d + 0.5 \cdot c = 1000.000 + 2 \cdot 500.000 + 0.5 \cdot 300.000 = 2150.000 \ mm"
//! );
//! assert_eq!(r_cont.citation(), "EN 1992-1-1:2004 (6.36)");
//! # Ok::<(), codes_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`formula`] - The contract every equation implements
//! - [`eurocode`] - Eurocode editions and Dutch national editions
//! - [`cur`] - CUR design guidelines
//! - [`catalog`] - Index of every formula by document and label
//! - [`latex`] - LaTeX rendering helpers
//! - [`settings`] - Render settings
//! - [`validation`] - Input guards
//! - [`units`] - Unit aliases and conversions
//! - [`documents`] - Source documents
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod cur;
pub mod documents;
pub mod errors;
pub mod eurocode;
pub mod formula;
pub mod latex;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use documents::SourceDocument;
pub use errors::{CalcError, CalcResult};
pub use formula::{Formula, OutputKind};
pub use latex::LatexFormula;
pub use settings::RenderSettings;
