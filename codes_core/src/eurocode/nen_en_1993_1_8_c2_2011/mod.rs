//! # NEN-EN 1993-1-8+C2:2011
//!
//! Dutch edition of Eurocode 3 part 1-8: design of joints.

pub mod welded_connections;
