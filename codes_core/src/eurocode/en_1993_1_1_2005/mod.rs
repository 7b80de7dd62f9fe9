//! # EN 1993-1-1:2005
//!
//! Eurocode 3: Design of steel structures. Part 1-1: General rules and
//! rules for buildings.

pub mod ultimate_limit_state;
