//! Input data structures describing a rental-property investment

use serde::{Deserialize, Serialize};

/// Tax regime under which the rental income is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Personal furnished rental (LMNP): depreciation deductible,
    /// social levies on a positive result, CFE due
    Lmnp,
    /// Corporate holding (SCI): depreciation deductible, flat corporate rate
    Sci,
    /// Personal bare ownership: no depreciation, marginal rate plus social levies
    BareOwnership,
}

impl TaxRegime {
    /// All regimes, in comparison display order
    pub const ALL: [TaxRegime; 3] = [TaxRegime::Lmnp, TaxRegime::Sci, TaxRegime::BareOwnership];

    /// Short label for console and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxRegime::Lmnp => "LMNP",
            TaxRegime::Sci => "SCI",
            TaxRegime::BareOwnership => "Bare",
        }
    }

    /// Whether depreciation allowances reduce the taxable result
    pub fn deducts_depreciation(&self) -> bool {
        !matches!(self, TaxRegime::BareOwnership)
    }
}

/// A single rental-property investment case
///
/// All monetary amounts are in euros. Rates are decimal fractions
/// (1.5% annual loan rate = 0.015).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Purchase price of the property
    pub purchase_price: f64,

    /// Renovation budget, financed with the purchase
    pub renovation_budget: f64,

    /// Expected monthly rent
    pub monthly_rent: f64,

    /// Annual property tax (taxe foncière)
    pub annual_property_tax: f64,

    /// Monthly co-ownership charges
    pub monthly_coownership: f64,

    /// Monthly landlord insurance premium
    pub monthly_insurance: f64,

    /// Annual loan interest rate (decimal fraction)
    pub annual_loan_rate: f64,

    /// Loan term in years
    pub loan_term_years: u32,

    /// Selected tax regime
    pub regime: TaxRegime,

    /// Marginal personal income tax rate (decimal fraction),
    /// applied under bare ownership only
    pub marginal_tax_rate: f64,
}

impl Property {
    /// Create a new investment case
    pub fn new(
        purchase_price: f64,
        renovation_budget: f64,
        monthly_rent: f64,
        annual_property_tax: f64,
        monthly_coownership: f64,
        monthly_insurance: f64,
        annual_loan_rate: f64,
        loan_term_years: u32,
        regime: TaxRegime,
        marginal_tax_rate: f64,
    ) -> Self {
        Self {
            purchase_price,
            renovation_budget,
            monthly_rent,
            annual_property_tax,
            monthly_coownership,
            monthly_insurance,
            annual_loan_rate,
            loan_term_years,
            regime,
            marginal_tax_rate,
        }
    }

    /// Same case under a different tax regime
    pub fn with_regime(&self, regime: TaxRegime) -> Self {
        Self { regime, ..self.clone() }
    }

    /// Annual rent
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    /// Annual insurance premium
    pub fn annual_insurance(&self) -> f64 {
        self.monthly_insurance * 12.0
    }

    /// Annual co-ownership charges
    pub fn annual_coownership(&self) -> f64 {
        self.monthly_coownership * 12.0
    }

    /// Loan term in months
    pub fn loan_term_months(&self) -> u32 {
        self.loan_term_years * 12
    }

    /// Monthly loan interest rate
    pub fn monthly_loan_rate(&self) -> f64 {
        self.annual_loan_rate / 12.0
    }
}
