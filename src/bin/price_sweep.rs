//! Purchase-price sensitivity sweep
//!
//! Projects the same case over a grid of purchase prices in parallel and
//! writes one row per price to CSV.
//! Accepts config via environment variables:
//!   PRICE_MIN, PRICE_MAX, PRICE_STEP, RENT, RENOVATION, LOAN_RATE,
//!   LOAN_YEARS, REGIME (LMNP | SCI | BARE)

use rental_projection::{Property, ScenarioRunner, TaxRegime};
use rental_projection::projection::ProjectionConfig;
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_regime(default: TaxRegime) -> TaxRegime {
    match env::var("REGIME").unwrap_or_default().to_uppercase().as_str() {
        "LMNP" => TaxRegime::Lmnp,
        "SCI" => TaxRegime::Sci,
        "BARE" => TaxRegime::BareOwnership,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    let price_min = env_f64("PRICE_MIN", 30_000.0);
    let price_max = env_f64("PRICE_MAX", 350_000.0);
    let price_step = env_f64("PRICE_STEP", 5_000.0).max(1.0);
    let regime = env_regime(TaxRegime::Sci);

    let base = Property::new(
        price_min,
        env_f64("RENOVATION", 20_000.0),
        env_f64("RENT", 700.0),
        env_f64("PROPERTY_TAX", 800.0),
        env_f64("COOWNERSHIP", 100.0),
        env_f64("INSURANCE", 20.0),
        env_f64("LOAN_RATE", 0.015),
        env::var("LOAN_YEARS").ok().and_then(|v| v.parse().ok()).unwrap_or(20),
        regime,
        env_f64("MARGINAL_RATE", 0.30),
    );

    let steps = ((price_max - price_min) / price_step).floor() as usize + 1;
    let prices: Vec<f64> = (0..steps).map(|i| price_min + i as f64 * price_step).collect();

    println!(
        "Sweeping {} prices from €{:.0} to €{:.0} under {}...",
        prices.len(),
        price_min,
        price_max,
        regime.as_str()
    );

    let runner = ScenarioRunner::new();

    let results: Vec<_> = prices
        .par_iter()
        .map(|&price| {
            let mut case = base.clone();
            case.purchase_price = price;
            (price, runner.run(&case, ProjectionConfig::default()))
        })
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let output_path = "price_sweep_output.csv";
    let mut file = File::create(output_path)?;

    writeln!(
        file,
        "Price,NotaryFee,Borrowed,MonthlyPayment,Year1Interest,OperatingIncome,Tax,CashFlow,GrossYield,NetYield"
    )?;

    for (price, row) in &results {
        writeln!(
            file,
            "{:.0},{:.0},{:.2},{:.2},{:.0},{:.2},{:.0},{:.2},{:.2},{:.2}",
            price,
            row.notary_fee,
            row.borrowed_amount,
            row.monthly_payment,
            row.year1_interest,
            row.operating_income,
            row.annual_tax,
            row.monthly_cash_flow,
            row.gross_yield,
            row.net_yield,
        )?;
    }

    println!("Output written to {}", output_path);

    // Break-even milestone: first price where cash flow turns negative
    if let Some((price, row)) = results.iter().find(|(_, r)| r.monthly_cash_flow < 0.0) {
        println!(
            "Cash flow turns negative at €{:.0} ({:.2}/mo)",
            price, row.monthly_cash_flow
        );
    }

    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
