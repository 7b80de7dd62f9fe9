//! # EN 1992-1-1:2004
//!
//! Eurocode 2: Design of concrete structures. Part 1-1: General rules and
//! rules for buildings.
//!
//! One module per chapter:
//!
//! - [`materials`] - Chapter 3
//! - [`durability`] - Chapter 4, concrete cover
//! - [`structural_analysis`] - Chapter 5
//! - [`ultimate_limit_state`] - Chapter 6
//! - [`serviceability_limit_state`] - Chapter 7
//! - [`detailing_reinforcement`] - Chapter 8
//! - [`detailing_specific_rules`] - Chapter 9

pub mod detailing_reinforcement;
pub mod detailing_specific_rules;
pub mod durability;
pub mod materials;
pub mod serviceability_limit_state;
pub mod structural_analysis;
pub mod ultimate_limit_state;
