//! Projection assumptions: notary fees, depreciation rules, and tax rates

mod depreciation;
mod notary;
mod tax;
pub mod loader;

pub use depreciation::DepreciationRules;
pub use notary::{NotaryFeeMethod, NotaryFeeTable, DEFAULT_FLAT_RATE};
pub use tax::{CfeSchedule, TaxRates};
pub use loader::{AssumptionError, LoadedAssumptions};

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Container for all projection assumptions
///
/// Deployed configurations diverge on the notary fee method, depreciation
/// periods, and tax rates; each is explicit configuration here rather than
/// a hard-coded branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    /// Notary fee estimation method
    pub notary: NotaryFeeMethod,

    /// Fixed lender application fee added to the borrowed amount
    pub application_fee: f64,

    /// Straight-line depreciation periods
    pub depreciation: DepreciationRules,

    /// Social levy and corporate tax rates
    pub tax: TaxRates,

    /// Price-tiered CFE estimate (LMNP only)
    pub cfe: CfeSchedule,
}

impl Assumptions {
    /// Default simplified assumptions matching the reference configuration
    pub fn default_simplified() -> Self {
        Self {
            notary: NotaryFeeMethod::default(),
            application_fee: 1_400.0,
            depreciation: DepreciationRules::default(),
            tax: TaxRates::default(),
            cfe: CfeSchedule::default_estimate(),
        }
    }

    /// Same defaults with the flat-percentage notary fee method
    pub fn with_flat_notary_rate(rate: f64) -> Self {
        Self {
            notary: NotaryFeeMethod::FlatRate(rate),
            ..Self::default_simplified()
        }
    }

    /// Load table-backed assumptions from CSV files in the default location
    /// (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load table-backed assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionError> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            notary: NotaryFeeMethod::Table(NotaryFeeTable::from_breakpoints(
                loaded.notary_breakpoints,
            )?),
            cfe: CfeSchedule::from_bands(loaded.cfe_bands)?,
            ..Self::default_simplified()
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_simplified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_assumptions_match_defaults() {
        let from_csv = Assumptions::from_csv().expect("default CSV tables should load");
        let defaults = Assumptions::default_simplified();

        for price in [5_000.0, 90_000.0, 110_000.0, 150_000.0, 600_000.0] {
            assert_eq!(from_csv.notary.estimate(price), defaults.notary.estimate(price));
            assert_eq!(from_csv.cfe.annual_amount(price), defaults.cfe.annual_amount(price));
        }
    }
}
