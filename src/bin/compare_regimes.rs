//! Compare the three tax regimes for one investment case
//!
//! Supports JSON output for API integration via JSON=1
//! Accepts the case via environment variables:
//!   PRICE, RENOVATION, RENT, PROPERTY_TAX, COOWNERSHIP, INSURANCE,
//!   LOAN_RATE, LOAN_YEARS, MARGINAL_RATE
//! Unset variables fall back to the reference case.

use rental_projection::{
    Property, ScenarioRunner, TaxRegime,
    projection::ProjectionResult,
};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct ComparisonResponse {
    purchase_price: f64,
    renovation_budget: f64,
    monthly_rent: f64,
    results: Vec<ProjectionResult>,
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let property = Property::new(
        env_f64("PRICE", 150_000.0),
        env_f64("RENOVATION", 20_000.0),
        env_f64("RENT", 700.0),
        env_f64("PROPERTY_TAX", 800.0),
        env_f64("COOWNERSHIP", 100.0),
        env_f64("INSURANCE", 20.0),
        env_f64("LOAN_RATE", 0.015),
        env_u32("LOAN_YEARS", 20),
        TaxRegime::Sci, // overridden per comparison run
        env_f64("MARGINAL_RATE", 0.30),
    );

    log::info!(
        "comparing regimes for price={} rent={}/mo",
        property.purchase_price,
        property.monthly_rent
    );

    let runner = ScenarioRunner::new();
    let results = runner.compare_regimes(&property);

    if env::var("JSON").map(|v| v == "1").unwrap_or(false) {
        let response = ComparisonResponse {
            purchase_price: property.purchase_price,
            renovation_budget: property.renovation_budget,
            monthly_rent: property.monthly_rent,
            results,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Regime comparison for €{:.0} + €{:.0} renovation, €{:.0}/mo rent",
        property.purchase_price, property.renovation_budget, property.monthly_rent
    );
    println!();

    for row in &results {
        println!(
            "{:>5}: cash flow €{:.2}/mo, yield {:.2}%, net {:.2}%, tax €{:.0}/yr",
            row.regime.as_str(),
            row.monthly_cash_flow,
            row.gross_yield,
            row.net_yield,
            row.annual_tax,
        );
    }

    Ok(())
}
