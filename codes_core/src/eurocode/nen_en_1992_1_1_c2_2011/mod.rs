//! # NEN-EN 1992-1-1+C2:2011
//!
//! Dutch edition of Eurocode 2 part 1-1 including corrigendum C2. Clauses
//! identical to EN 1992-1-1:2004 are newtypes around the formulas of that
//! edition, so they cite this document while sharing one implementation.

pub mod detailing_reinforcement;
pub mod detailing_specific_rules;
pub mod materials;
pub mod serviceability_limit_state;
pub mod structural_analysis;
pub mod ultimate_limit_state;
