//! # CUR Recommendations
//!
//! Dutch design guidelines published by CUR Bouw & Infra.

pub mod cur_228;
