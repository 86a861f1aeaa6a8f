//! Projection result record
//!
//! Immutable once produced; the only place where rounding is applied.

use serde::{Deserialize, Serialize};

use crate::property::TaxRegime;
use super::loan::LoanYearRow;

/// Round to cents (cash flow, yields, monetary aggregates)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to whole euros (tax, interest, notary fee)
pub(crate) fn round_euro(value: f64) -> f64 {
    value.round()
}

/// Result of one projection run
///
/// All simulation is carried out in full precision; fields here carry the
/// display rounding (cents for cash flow and yields, whole euros for tax,
/// interest, and notary fee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Regime the projection was run under
    pub regime: TaxRegime,

    /// Net monthly cash flow after debt service and tax
    pub monthly_cash_flow: f64,

    /// Net annual result / borrowed amount, in percent
    pub gross_yield: f64,

    /// Operating income / purchase price, in percent (pre-financing, pre-tax)
    pub net_yield: f64,

    /// Annual tax under the selected regime
    pub annual_tax: f64,

    /// Loan interest paid during year 1
    pub year1_interest: f64,

    /// Estimated notary fee
    pub notary_fee: f64,

    /// Total borrowed: price + notary fee + application fee + renovation
    pub borrowed_amount: f64,

    /// Fixed monthly loan payment
    pub monthly_payment: f64,

    /// Twelve loan payments
    pub annual_debt_service: f64,

    /// Annual rent minus recurring costs
    pub operating_income: f64,

    // Itemized recurring costs
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub annual_coownership: f64,
    /// Estimated CFE; zero outside LMNP
    pub annual_cfe: f64,

    /// Renovation budget carried into the financing
    pub renovation_budget: f64,

    /// Full per-year amortization table, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<LoanYearRow>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round2(-360.5566), -360.56);
        assert_eq!(round2(4.10666), 4.11);
        assert_eq!(round_euro(2662.86), 2663.0);
        assert_eq!(round_euro(0.4), 0.0);
    }

    #[test]
    fn test_schedule_omitted_from_json_when_absent() {
        let result = ProjectionResult {
            regime: TaxRegime::Sci,
            monthly_cash_flow: 0.0,
            gross_yield: 0.0,
            net_yield: 0.0,
            annual_tax: 0.0,
            year1_interest: 0.0,
            notary_fee: 0.0,
            borrowed_amount: 0.0,
            monthly_payment: 0.0,
            annual_debt_service: 0.0,
            operating_income: 0.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            annual_coownership: 0.0,
            annual_cfe: 0.0,
            renovation_budget: 0.0,
            schedule: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("schedule"));
    }
}
