//! Scenario runner for batch projections
//!
//! Pre-loads assumptions once, then allows running many projections with
//! different properties or configurations without re-reading CSV files.

use crate::assumptions::{AssumptionError, Assumptions};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::property::Property;

/// Pre-loaded scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for price in [120_000.0, 150_000.0, 180_000.0] {
///     let mut case = property.clone();
///     case.purchase_price = price;
///     let result = runner.run(&case, ProjectionConfig::default());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded base assumptions
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_simplified(),
        }
    }

    /// Create runner by loading assumption tables from CSV files
    pub fn from_csv() -> Result<Self, AssumptionError> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AssumptionError> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection with the given config
    pub fn run(&self, property: &Property, config: ProjectionConfig) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project(property)
    }

    /// Run projections for multiple properties with the same config
    pub fn run_batch(&self, properties: &[Property], config: ProjectionConfig) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        properties.iter().map(|p| engine.project(p)).collect()
    }

    /// Run the same property under every regime for side-by-side display
    pub fn compare_regimes(&self, property: &Property) -> Vec<ProjectionResult> {
        let engine =
            ProjectionEngine::new(self.base_assumptions.clone(), ProjectionConfig::default());
        engine.compare_regimes(property)
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TaxRegime;

    fn test_property() -> Property {
        Property::new(
            150_000.0, 20_000.0, 700.0, 800.0, 100.0, 20.0, 0.015, 20,
            TaxRegime::Sci, 0.30,
        )
    }

    #[test]
    fn test_comparison_returns_one_record_per_regime() {
        let runner = ScenarioRunner::new();
        let results = runner.compare_regimes(&test_property());

        assert_eq!(results.len(), 3);
        // CFE weighs on LMNP operating income, the others are identical
        assert!(results[0].operating_income < results[1].operating_income);
        assert_eq!(results[1].operating_income, results[2].operating_income);
    }

    #[test]
    fn test_batch_over_rents() {
        let runner = ScenarioRunner::new();
        let properties: Vec<_> = [600.0, 700.0, 800.0]
            .iter()
            .map(|&rent| {
                let mut p = test_property();
                p.monthly_rent = rent;
                p
            })
            .collect();

        let results = runner.run_batch(&properties, ProjectionConfig::default());
        assert_eq!(results.len(), 3);

        // Higher rent means better cash flow
        assert!(results[2].monthly_cash_flow > results[0].monthly_cash_flow);
    }

    #[test]
    fn test_customized_assumptions() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().tax.corporate_rate = 0.25;

        let mut property = test_property();
        property.monthly_rent = 2_000.0; // Large positive taxable result

        let base = ScenarioRunner::new().run(&property, ProjectionConfig::default());
        let custom = runner.run(&property, ProjectionConfig::default());

        assert!(custom.annual_tax > base.annual_tax);
    }
}
