//! Notary fee estimation for existing-property purchases
//!
//! Two methods are supported as configuration:
//! - piecewise-linear interpolation over a (price, fee) breakpoint table
//! - a flat percentage of the purchase price

use serde::{Deserialize, Serialize};

use super::loader::AssumptionError;

/// Default flat notary fee rate (8% of price)
pub const DEFAULT_FLAT_RATE: f64 = 0.08;

/// Breakpoint table of estimated notary fees by purchase price
///
/// Prices are strictly increasing. Fees below the first breakpoint clamp
/// to the first fee, above the last breakpoint to the last fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaryFeeTable {
    breakpoints: Vec<(f64, f64)>,
}

impl NotaryFeeTable {
    /// Reference table for existing properties (estimations)
    pub fn reference_old_property() -> Self {
        Self {
            breakpoints: vec![
                (10_000.0, 1_100.0),
                (20_000.0, 1_900.0),
                (30_000.0, 2_700.0),
                (40_000.0, 3_400.0),
                (50_000.0, 3_900.0),
                (60_000.0, 4_500.0),
                (70_000.0, 5_100.0),
                (80_000.0, 5_700.0),
                (90_000.0, 6_200.0),
                (100_000.0, 6_700.0),
                (120_000.0, 7_900.0),
                (150_000.0, 9_700.0),
                (200_000.0, 12_900.0),
                (250_000.0, 16_000.0),
                (300_000.0, 19_100.0),
                (350_000.0, 22_300.0),
                (400_000.0, 25_400.0),
                (450_000.0, 28_600.0),
                (500_000.0, 31_800.0),
            ],
        }
    }

    /// Build a table from loaded breakpoints, validating the price ordering
    pub fn from_breakpoints(breakpoints: Vec<(f64, f64)>) -> Result<Self, AssumptionError> {
        if breakpoints.is_empty() {
            return Err(AssumptionError::EmptyTable("notary fee table"));
        }
        for pair in breakpoints.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(AssumptionError::NonIncreasingBreakpoints {
                    prev: pair[0].0,
                    next: pair[1].0,
                });
            }
        }
        Ok(Self { breakpoints })
    }

    /// Estimate the notary fee for a purchase price
    pub fn estimate(&self, price: f64) -> f64 {
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];

        if price <= first.0 {
            return first.1;
        }
        if price >= last.0 {
            return last.1;
        }

        for pair in self.breakpoints.windows(2) {
            let (p0, f0) = pair[0];
            let (p1, f1) = pair[1];
            if price >= p0 && price <= p1 {
                let t = (price - p0) / (p1 - p0);
                return f0 + t * (f1 - f0);
            }
        }

        // Unreachable given the ordering invariant
        last.1
    }

    /// Number of breakpoints in the table
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Whether the table has no breakpoints (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

/// Fee estimation method, selectable per configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotaryFeeMethod {
    /// Piecewise-linear interpolation over a breakpoint table
    Table(NotaryFeeTable),
    /// Flat percentage of the purchase price
    FlatRate(f64),
}

impl NotaryFeeMethod {
    /// Estimate the notary fee for a purchase price
    pub fn estimate(&self, price: f64) -> f64 {
        match self {
            NotaryFeeMethod::Table(table) => table.estimate(price),
            NotaryFeeMethod::FlatRate(rate) => price * rate,
        }
    }
}

impl Default for NotaryFeeMethod {
    fn default() -> Self {
        NotaryFeeMethod::Table(NotaryFeeTable::reference_old_property())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp_below_first_breakpoint() {
        let table = NotaryFeeTable::reference_old_property();

        assert_eq!(table.estimate(0.0), 1_100.0);
        assert_eq!(table.estimate(5_000.0), 1_100.0);
        assert_eq!(table.estimate(10_000.0), 1_100.0);
    }

    #[test]
    fn test_clamp_above_last_breakpoint() {
        let table = NotaryFeeTable::reference_old_property();

        assert_eq!(table.estimate(500_000.0), 31_800.0);
        assert_eq!(table.estimate(900_000.0), 31_800.0);
    }

    #[test]
    fn test_exact_breakpoint_has_zero_interpolation_error() {
        let table = NotaryFeeTable::reference_old_property();

        assert_eq!(table.estimate(150_000.0), 9_700.0);
        assert_eq!(table.estimate(120_000.0), 7_900.0);
        assert_eq!(table.estimate(250_000.0), 16_000.0);
    }

    #[test]
    fn test_midpoint_interpolation() {
        let table = NotaryFeeTable::reference_old_property();

        // Halfway between (100k, 6700) and (120k, 7900)
        assert_abs_diff_eq!(table.estimate(110_000.0), 7_300.0, epsilon = 1e-9);
        // Quarter of the way between (150k, 9700) and (200k, 12900)
        assert_abs_diff_eq!(table.estimate(162_500.0), 10_500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_rate_method() {
        let method = NotaryFeeMethod::FlatRate(DEFAULT_FLAT_RATE);

        assert_abs_diff_eq!(method.estimate(150_000.0), 12_000.0, epsilon = 1e-9);
        assert_eq!(method.estimate(0.0), 0.0);
    }

    #[test]
    fn test_rejects_non_increasing_breakpoints() {
        let result = NotaryFeeTable::from_breakpoints(vec![
            (10_000.0, 1_100.0),
            (10_000.0, 1_900.0),
        ]);
        assert!(result.is_err());

        let result = NotaryFeeTable::from_breakpoints(vec![]);
        assert!(result.is_err());
    }
}
