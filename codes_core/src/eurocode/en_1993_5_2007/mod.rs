//! # EN 1993-5:2007
//!
//! Eurocode 3: Design of steel structures. Part 5: Piling.

pub mod ultimate_limit_states;
