//! Tax rates and the price-tiered CFE estimate
//!
//! Rates are simplified approximations, not tax advice.

use serde::{Deserialize, Serialize};

use super::loader::AssumptionError;

/// Flat tax rates applied by the regime logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaxRates {
    /// Social levy rate (prélèvements sociaux), annual
    pub social_levy: f64,

    /// Flat corporate rate applied to an SCI taxable result
    pub corporate_rate: f64,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            social_levy: 0.172,
            corporate_rate: 0.15,
        }
    }
}

/// Flat annual CFE estimate tiered by purchase price
///
/// Bands are (price ceiling, annual amount) with increasing ceilings; the
/// last band's ceiling may be infinite. Applies to LMNP activity only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfeSchedule {
    bands: Vec<(f64, f64)>,
}

impl CfeSchedule {
    /// Rough estimate by property size: studio / mid-size / larger
    pub fn default_estimate() -> Self {
        Self {
            bands: vec![
                (90_000.0, 250.0),
                (180_000.0, 300.0),
                (f64::INFINITY, 400.0),
            ],
        }
    }

    /// Build a schedule from loaded bands, validating the ceiling ordering
    pub fn from_bands(bands: Vec<(f64, f64)>) -> Result<Self, AssumptionError> {
        if bands.is_empty() {
            return Err(AssumptionError::EmptyTable("CFE band schedule"));
        }
        for pair in bands.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(AssumptionError::NonIncreasingBreakpoints {
                    prev: pair[0].0,
                    next: pair[1].0,
                });
            }
        }
        Ok(Self { bands })
    }

    /// Annual CFE amount for a purchase price
    pub fn annual_amount(&self, purchase_price: f64) -> f64 {
        for &(ceiling, amount) in &self.bands {
            if purchase_price <= ceiling {
                return amount;
            }
        }
        // Above every ceiling: use the top band
        self.bands[self.bands.len() - 1].1
    }
}

impl Default for CfeSchedule {
    fn default() -> Self {
        Self::default_estimate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfe_bands() {
        let cfe = CfeSchedule::default_estimate();

        assert_eq!(cfe.annual_amount(60_000.0), 250.0);
        assert_eq!(cfe.annual_amount(90_000.0), 250.0);
        assert_eq!(cfe.annual_amount(90_001.0), 300.0);
        assert_eq!(cfe.annual_amount(150_000.0), 300.0);
        assert_eq!(cfe.annual_amount(180_000.0), 300.0);
        assert_eq!(cfe.annual_amount(250_000.0), 400.0);
        assert_eq!(cfe.annual_amount(1_000_000.0), 400.0);
    }

    #[test]
    fn test_rejects_unordered_bands() {
        let result = CfeSchedule::from_bands(vec![(180_000.0, 300.0), (90_000.0, 250.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_rates() {
        let rates = TaxRates::default();
        assert!((rates.social_levy - 0.172).abs() < 1e-12);
        assert!((rates.corporate_rate - 0.15).abs() < 1e-12);
    }
}
