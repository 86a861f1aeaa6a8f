//! Loan amortization: annuity payment and month-by-month simulation

use serde::{Deserialize, Serialize};

/// Fixed monthly payment for a constant-rate amortizing loan
///
/// Standard annuity formula `capital * r / (1 - (1+r)^-n)`. A zero rate
/// degrades to straight division; zero capital or a zero term pays nothing.
pub fn monthly_payment(capital: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 || capital <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        capital / months as f64
    } else {
        capital * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
    }
}

/// Interest and principal amortized during one loan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanYearRow {
    /// Loan year (1-indexed)
    pub year: u32,

    /// Interest paid during the year
    pub interest: f64,

    /// Principal amortized during the year
    pub principal: f64,

    /// Outstanding balance at end of year
    pub eop_balance: f64,
}

/// Full amortization schedule aggregated by loan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Fixed monthly payment
    pub payment: f64,

    /// Per-year aggregates over the full term
    pub years: Vec<LoanYearRow>,
}

impl LoanSchedule {
    /// Simulate the loan month by month
    ///
    /// Each month: interest = balance * rate, principal = payment - interest.
    /// No rounding is applied during the simulation.
    pub fn simulate(capital: f64, monthly_rate: f64, months: u32) -> Self {
        let payment = monthly_payment(capital, monthly_rate, months);

        let mut years = Vec::with_capacity(months.div_ceil(12) as usize);
        let mut balance = capital;
        let mut year_interest = 0.0;
        let mut year_principal = 0.0;

        for month in 1..=months {
            let interest = balance * monthly_rate;
            let principal = payment - interest;
            balance -= principal;

            year_interest += interest;
            year_principal += principal;

            if month % 12 == 0 || month == months {
                years.push(LoanYearRow {
                    year: (month - 1) / 12 + 1,
                    interest: year_interest,
                    principal: year_principal,
                    eop_balance: balance,
                });
                year_interest = 0.0;
                year_principal = 0.0;
            }
        }

        Self { payment, years }
    }

    /// Interest paid during the first loan year
    pub fn year1_interest(&self) -> f64 {
        self.years.first().map(|row| row.interest).unwrap_or(0.0)
    }

    /// Total interest over the full term
    pub fn total_interest(&self) -> f64 {
        self.years.iter().map(|row| row.interest).sum()
    }

    /// Total principal amortized over the full term
    pub fn total_principal(&self) -> f64 {
        self.years.iter().map(|row| row.principal).sum()
    }

    /// Annual debt service (twelve payments)
    pub fn annual_debt_service(&self) -> f64 {
        self.payment * 12.0
    }
}
