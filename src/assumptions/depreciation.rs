//! Straight-line depreciation rules for LMNP and SCI taxable results

use serde::{Deserialize, Serialize};

/// Useful lives for straight-line depreciation of the building and the
/// renovation work
///
/// The periods are deliberately simplified (no component breakdown).
/// Deployed configurations vary: 30/10 years is the default, 20/25 is a
/// known alternative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepreciationRules {
    /// Useful life of the building in years
    pub building_years: u32,

    /// Useful life of the renovation work in years
    pub renovation_years: u32,
}

impl DepreciationRules {
    pub fn new(building_years: u32, renovation_years: u32) -> Self {
        Self {
            building_years,
            renovation_years,
        }
    }

    /// Annual allowance for the building
    pub fn building_allowance(&self, purchase_price: f64) -> f64 {
        if self.building_years == 0 {
            return 0.0;
        }
        purchase_price / self.building_years as f64
    }

    /// Annual allowance for the renovation work (zero when there is none)
    pub fn renovation_allowance(&self, renovation_budget: f64) -> f64 {
        if self.renovation_years == 0 || renovation_budget <= 0.0 {
            return 0.0;
        }
        renovation_budget / self.renovation_years as f64
    }

    /// Combined annual allowance
    pub fn total_allowance(&self, purchase_price: f64, renovation_budget: f64) -> f64 {
        self.building_allowance(purchase_price) + self.renovation_allowance(renovation_budget)
    }
}

impl Default for DepreciationRules {
    fn default() -> Self {
        Self {
            building_years: 30,
            renovation_years: 10,
        }
    }
}
