//! Core projection engine: financing, amortization, regime tax, cash flow

use crate::assumptions::Assumptions;
use crate::property::{Property, TaxRegime};
use super::loan::{LoanSchedule, LoanYearRow};
use super::result::{round2, round_euro, ProjectionResult};

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Attach the full per-year amortization table to the result
    pub full_schedule: bool,
}

/// Main projection engine
///
/// Stateless: every call maps the property inputs to a fresh result record.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Engine with default simplified assumptions
    pub fn default_simplified() -> Self {
        Self::new(Assumptions::default_simplified(), ProjectionConfig::default())
    }

    /// Run the projection for a single property under its selected regime
    pub fn project(&self, property: &Property) -> ProjectionResult {
        let notary_fee = self.assumptions.notary.estimate(property.purchase_price);
        let borrowed = property.purchase_price
            + notary_fee
            + self.assumptions.application_fee
            + property.renovation_budget;

        let schedule = LoanSchedule::simulate(
            borrowed,
            property.monthly_loan_rate(),
            property.loan_term_months(),
        );
        let year1_interest = schedule.year1_interest();
        let annual_debt_service = schedule.annual_debt_service();

        // CFE is a business tax on the furnished-rental activity; the other
        // regimes do not owe it
        let cfe = if property.regime == TaxRegime::Lmnp {
            self.assumptions.cfe.annual_amount(property.purchase_price)
        } else {
            0.0
        };

        let recurring_costs = property.annual_property_tax
            + property.annual_insurance()
            + property.annual_coownership()
            + cfe;
        let operating_income = property.annual_rent() - recurring_costs;

        let tax = self.annual_tax(property, operating_income, year1_interest);

        let net_annual_result = operating_income - annual_debt_service - tax;
        let monthly_cash_flow = net_annual_result / 12.0;

        let gross_yield = if borrowed > 0.0 {
            net_annual_result / borrowed * 100.0
        } else {
            0.0
        };
        let net_yield = if property.purchase_price > 0.0 {
            operating_income / property.purchase_price * 100.0
        } else {
            0.0
        };

        ProjectionResult {
            regime: property.regime,
            monthly_cash_flow: round2(monthly_cash_flow),
            gross_yield: round2(gross_yield),
            net_yield: round2(net_yield),
            annual_tax: round_euro(tax),
            year1_interest: round_euro(year1_interest),
            notary_fee: round_euro(notary_fee),
            borrowed_amount: round2(borrowed),
            monthly_payment: round2(schedule.payment),
            annual_debt_service: round2(annual_debt_service),
            operating_income: round2(operating_income),
            annual_property_tax: property.annual_property_tax,
            annual_insurance: property.annual_insurance(),
            annual_coownership: property.annual_coownership(),
            annual_cfe: cfe,
            renovation_budget: property.renovation_budget,
            schedule: if self.config.full_schedule {
                Some(
                    schedule
                        .years
                        .iter()
                        .map(|row| LoanYearRow {
                            year: row.year,
                            interest: round2(row.interest),
                            principal: round2(row.principal),
                            eop_balance: round2(row.eop_balance),
                        })
                        .collect(),
                )
            } else {
                None
            },
        }
    }

    /// Run the projection once per regime with all other inputs held fixed
    pub fn compare_regimes(&self, property: &Property) -> Vec<ProjectionResult> {
        TaxRegime::ALL
            .iter()
            .map(|&regime| self.project(&property.with_regime(regime)))
            .collect()
    }

    /// Annual tax for the selected regime, never negative
    fn annual_tax(&self, property: &Property, operating_income: f64, year1_interest: f64) -> f64 {
        let depreciation = self
            .assumptions
            .depreciation
            .total_allowance(property.purchase_price, property.renovation_budget);

        match property.regime {
            TaxRegime::Lmnp => {
                let taxable = operating_income - year1_interest - depreciation;
                if taxable <= 0.0 {
                    0.0
                } else {
                    taxable * self.assumptions.tax.social_levy
                }
            }
            TaxRegime::Sci => {
                let taxable = operating_income - year1_interest - depreciation;
                (taxable * self.assumptions.tax.corporate_rate).max(0.0)
            }
            TaxRegime::BareOwnership => {
                // No depreciation deduction under bare ownership
                let taxable = operating_income - year1_interest;
                (taxable * (property.marginal_tax_rate + self.assumptions.tax.social_levy)).max(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Reference scenario: 150k price, 20k renovation, 700/mo rent,
    /// 800/yr property tax, 100/mo co-ownership, 20/mo insurance,
    /// 1.5% over 20 years
    fn test_property(regime: TaxRegime) -> Property {
        Property::new(
            150_000.0, 20_000.0, 700.0, 800.0, 100.0, 20.0, 0.015, 20, regime, 0.30,
        )
    }

    /// Annuity-formula reference values for the scenario above
    fn reference_loan() -> (f64, f64, f64) {
        // 150,000 price + 9,700 notary (exact table breakpoint) + 1,400
        // application fee + 20,000 renovation
        let borrowed: f64 = 181_100.0;
        let rate: f64 = 0.015 / 12.0;
        let payment = borrowed * rate / (1.0 - (1.0 + rate).powi(-240));

        let mut balance = borrowed;
        let mut year1_interest = 0.0;
        for _ in 0..12 {
            let interest = balance * rate;
            year1_interest += interest;
            balance -= payment - interest;
        }

        (borrowed, payment, year1_interest)
    }

    #[test]
    fn test_sci_reference_scenario() {
        let engine = ProjectionEngine::default_simplified();
        let result = engine.project(&test_property(TaxRegime::Sci));

        let (borrowed, payment, year1_interest) = reference_loan();

        assert_eq!(result.notary_fee, 9_700.0);
        assert_eq!(result.borrowed_amount, borrowed);
        assert_abs_diff_eq!(result.monthly_payment, 873.89, epsilon = 0.01);
        assert_abs_diff_eq!(result.monthly_payment, payment, epsilon = 0.01);
        assert_abs_diff_eq!(result.year1_interest, year1_interest, epsilon = 0.5);

        // Operating income: 8,400 rent - (800 + 240 + 1,200), no CFE for SCI
        assert_abs_diff_eq!(result.operating_income, 6_160.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.net_yield, 4.11, epsilon = 0.01);

        // Taxable result is negative after interest and 7,000 depreciation,
        // so the corporate tax clamps to zero
        assert_eq!(result.annual_tax, 0.0);

        let expected_cash_flow = (6_160.0 - payment * 12.0) / 12.0;
        assert_abs_diff_eq!(result.monthly_cash_flow, expected_cash_flow, epsilon = 0.01);
        assert_abs_diff_eq!(result.monthly_cash_flow, -360.56, epsilon = 0.01);

        let expected_yield = (6_160.0 - payment * 12.0) / borrowed * 100.0;
        assert_abs_diff_eq!(result.gross_yield, expected_yield, epsilon = 0.01);
    }

    #[test]
    fn test_lmnp_includes_cfe_in_operating_costs() {
        let engine = ProjectionEngine::default_simplified();
        let result = engine.project(&test_property(TaxRegime::Lmnp));

        // 150k price falls in the 300/yr CFE band
        assert_eq!(result.annual_cfe, 300.0);
        assert_abs_diff_eq!(result.operating_income, 5_860.0, epsilon = 1e-9);

        // Deeply negative taxable result: social levy does not apply
        assert_eq!(result.annual_tax, 0.0);
    }

    #[test]
    fn test_bare_ownership_taxes_without_depreciation() {
        let engine = ProjectionEngine::default_simplified();
        let result = engine.project(&test_property(TaxRegime::BareOwnership));
        let (_, _, year1_interest) = reference_loan();

        let taxable = 6_160.0 - year1_interest;
        assert!(taxable > 0.0);
        let expected_tax = taxable * (0.30 + 0.172);
        assert_abs_diff_eq!(result.annual_tax, expected_tax, epsilon = 0.5);
        assert_eq!(result.annual_cfe, 0.0);
    }

    #[test]
    fn test_tax_never_negative() {
        let engine = ProjectionEngine::default_simplified();

        // Loss-making case: low rent, heavy charges
        let mut property = test_property(TaxRegime::Sci);
        property.monthly_rent = 100.0;
        property.annual_property_tax = 3_000.0;

        for regime in TaxRegime::ALL {
            let result = engine.project(&property.with_regime(regime));
            assert!(
                result.annual_tax >= 0.0,
                "negative tax under {:?}",
                regime
            );
        }
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let engine = ProjectionEngine::default_simplified();
        let property = test_property(TaxRegime::Lmnp);

        let first = engine.project(&property);
        let second = engine.project(&property);

        assert_eq!(first, second);
    }

    #[test]
    fn test_regime_change_touches_only_tax_dependent_fields() {
        let engine = ProjectionEngine::default_simplified();
        let sci = engine.project(&test_property(TaxRegime::Sci));
        let bare = engine.project(&test_property(TaxRegime::BareOwnership));

        // SCI and bare ownership share a zero CFE, so everything upstream
        // of the tax computation must be identical
        assert_eq!(sci.notary_fee, bare.notary_fee);
        assert_eq!(sci.borrowed_amount, bare.borrowed_amount);
        assert_eq!(sci.monthly_payment, bare.monthly_payment);
        assert_eq!(sci.operating_income, bare.operating_income);
        assert_eq!(sci.net_yield, bare.net_yield);

        assert_ne!(sci.annual_tax, bare.annual_tax);
        assert_ne!(sci.monthly_cash_flow, bare.monthly_cash_flow);
    }

    #[test]
    fn test_degenerate_inputs_return_guarded_zeros() {
        let engine = ProjectionEngine::default_simplified();

        let mut property = test_property(TaxRegime::Sci);
        property.purchase_price = 0.0;
        property.renovation_budget = 0.0;
        let result = engine.project(&property);
        assert_eq!(result.net_yield, 0.0);

        let mut property = test_property(TaxRegime::Sci);
        property.loan_term_years = 0;
        let result = engine.project(&property);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.year1_interest, 0.0);
    }

    #[test]
    fn test_compare_regimes_covers_all_three() {
        let engine = ProjectionEngine::default_simplified();
        let results = engine.compare_regimes(&test_property(TaxRegime::Sci));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].regime, TaxRegime::Lmnp);
        assert_eq!(results[1].regime, TaxRegime::Sci);
        assert_eq!(results[2].regime, TaxRegime::BareOwnership);
    }

    #[test]
    fn test_full_schedule_attached_on_request() {
        let engine = ProjectionEngine::new(
            Assumptions::default_simplified(),
            ProjectionConfig { full_schedule: true },
        );
        let result = engine.project(&test_property(TaxRegime::Sci));

        let schedule = result.schedule.expect("schedule requested");
        assert_eq!(schedule.len(), 20);
        assert_abs_diff_eq!(schedule[19].eop_balance, 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_flat_notary_rate_configuration() {
        let engine = ProjectionEngine::new(
            Assumptions::with_flat_notary_rate(0.08),
            ProjectionConfig::default(),
        );
        let result = engine.project(&test_property(TaxRegime::Sci));

        assert_eq!(result.notary_fee, 12_000.0);
        assert_eq!(result.borrowed_amount, 150_000.0 + 12_000.0 + 1_400.0 + 20_000.0);
    }
}
