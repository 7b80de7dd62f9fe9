//! # NEN-EN 1995-1-1:2011
//!
//! Dutch edition of Eurocode 5: Design of timber structures. Part 1-1:
//! General, common rules and rules for buildings.

pub mod serviceability_limit_states;
