//! Rental Projection - cash flow and yield engine for French rental-property investments
//!
//! This library provides:
//! - Notary fee estimation (breakpoint interpolation or flat percentage)
//! - Loan amortization via the annuity formula, simulated month by month
//! - Tax and cash-flow computation under LMNP, SCI, and bare-ownership regimes
//! - Per-regime comparison records and a bounded result history
//!
//! The figures are simplified approximations for screening deals, not tax advice.

pub mod property;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use property::{Property, TaxRegime};
pub use assumptions::{Assumptions, DepreciationRules, NotaryFeeMethod, NotaryFeeTable};
pub use projection::{History, ProjectionEngine, ProjectionConfig, ProjectionResult};
pub use scenario::ScenarioRunner;
