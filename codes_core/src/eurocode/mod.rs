//! # Eurocodes and Dutch National Editions
//!
//! One module per code edition, one submodule per chapter. Shared
//! categorical inputs (strength classes, exposure classes) live at this level
//! so every edition reads them the same way.
//!
//! ## Editions
//!
//! - [`en_1992_1_1_2004`] - Concrete structures
//! - [`nen_en_1992_1_1_c2_2011`] - Concrete structures, Dutch edition with corrigendum C2
//! - [`nen_en_1992_1_1_a1_2020`] - Concrete structures, Dutch edition with amendment A1
//! - [`en_1993_1_1_2005`] - Steel structures
//! - [`nen_en_1993_1_1_c2_a1_2016`] - Steel structures, Dutch edition
//! - [`nen_en_1993_1_8_c2_2011`] - Design of joints
//! - [`en_1993_5_2007`] - Piling
//! - [`nen_en_1995_1_1_2011`] - Timber structures
//! - [`nen_9997_1_c2_2017`] - Geotechnical design

pub mod concrete_strength;
pub mod exposure_classes;

pub mod en_1992_1_1_2004;
pub mod en_1993_1_1_2005;
pub mod en_1993_5_2007;
pub mod nen_9997_1_c2_2017;
pub mod nen_en_1992_1_1_a1_2020;
pub mod nen_en_1992_1_1_c2_2011;
pub mod nen_en_1993_1_1_c2_a1_2016;
pub mod nen_en_1993_1_8_c2_2011;
pub mod nen_en_1995_1_1_2011;

pub use concrete_strength::ConcreteStrengthClass;
pub use exposure_classes::ExposureClasses;
