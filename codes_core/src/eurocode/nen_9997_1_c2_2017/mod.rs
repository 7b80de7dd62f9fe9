//! # NEN 9997-1+C2:2017
//!
//! Dutch geotechnical design code, based on Eurocode 7 part 1.

pub mod basis_of_geotechnical_design;
