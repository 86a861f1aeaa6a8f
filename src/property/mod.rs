//! Property investment inputs

mod data;

pub use data::{Property, TaxRegime};
