//! # NEN-EN 1992-1-1+A1:2020
//!
//! Dutch edition of Eurocode 2 part 1-1 including amendment A1.

pub mod durability;
