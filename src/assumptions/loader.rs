//! CSV-based assumption loader
//!
//! Loads fee and tax tables from CSV files in data/assumptions/

use std::fs::File;
use std::num::ParseFloatError;
use std::path::Path;

use thiserror::Error;

/// Default path to the assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Errors raised while loading or validating assumption tables
#[derive(Debug, Error)]
pub enum AssumptionError {
    #[error("failed to read assumption file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse assumption CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse numeric field: {0}")]
    ParseFloat(#[from] ParseFloatError),

    #[error("{0} has no rows")]
    EmptyTable(&'static str),

    #[error("breakpoints must be strictly increasing: {prev} followed by {next}")]
    NonIncreasingBreakpoints { prev: f64, next: f64 },
}

/// Load notary fee breakpoints from CSV
/// Returns Vec<(price, fee)> in file order
pub fn load_notary_table(path: &Path) -> Result<Vec<(f64, f64)>, AssumptionError> {
    let file = File::open(path.join("notary_fee_table.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut breakpoints = Vec::new();

    for result in reader.records() {
        let record = result?;
        let price: f64 = record[0].parse()?;
        let fee: f64 = record[1].parse()?;
        breakpoints.push((price, fee));
    }

    Ok(breakpoints)
}

/// Load CFE bands from CSV
/// Returns Vec<(price_ceiling, annual_amount)>; a ceiling of "inf" marks
/// the open-ended top band
pub fn load_cfe_bands(path: &Path) -> Result<Vec<(f64, f64)>, AssumptionError> {
    let file = File::open(path.join("cfe_bands.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bands = Vec::new();

    for result in reader.records() {
        let record = result?;
        let ceiling: f64 = record[0].parse()?;
        let amount: f64 = record[1].parse()?;
        bands.push((ceiling, amount));
    }

    Ok(bands)
}

/// All assumption tables loaded from a directory
pub struct LoadedAssumptions {
    pub notary_breakpoints: Vec<(f64, f64)>,
    pub cfe_bands: Vec<(f64, f64)>,
}

impl LoadedAssumptions {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, AssumptionError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, AssumptionError> {
        Ok(Self {
            notary_breakpoints: load_notary_table(path)?,
            cfe_bands: load_cfe_bands(path)?,
        })
    }
}
