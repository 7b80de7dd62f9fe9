//! # NEN-EN 1993-1-1+C2+A1:2016
//!
//! Dutch edition of Eurocode 3 part 1-1 including corrigendum C2 and
//! amendment A1.

pub mod ultimate_limit_state;
