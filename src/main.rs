//! Rental Projection CLI
//!
//! Runs the reference investment case, prints a regime comparison, and
//! writes the full amortization schedule to CSV.

use rental_projection::{
    Assumptions, History, Property, TaxRegime,
    projection::{ProjectionConfig, ProjectionEngine},
};
use std::fs::File;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Rental Projection v0.1.0");
    println!("========================\n");

    // Reference case: 150k existing property, 20k renovation, 700/mo rent
    let property = Property::new(
        150_000.0, // purchase price
        20_000.0,  // renovation budget
        700.0,     // monthly rent
        800.0,     // annual property tax
        100.0,     // monthly co-ownership charges
        20.0,      // monthly insurance
        0.015,     // 1.5% annual loan rate
        20,        // 20-year term
        TaxRegime::Sci,
        0.30, // marginal rate (bare ownership only)
    );

    println!("Property:");
    println!("  Price: €{:.0}", property.purchase_price);
    println!("  Renovation: €{:.0}", property.renovation_budget);
    println!("  Rent: €{:.0}/mo", property.monthly_rent);
    println!(
        "  Loan: {:.2}% over {} years",
        property.annual_loan_rate * 100.0,
        property.loan_term_years
    );
    println!();

    let assumptions = Assumptions::default_simplified();
    let engine = ProjectionEngine::new(assumptions, ProjectionConfig { full_schedule: true });

    let result = engine.project(&property);

    println!("Result ({}):", result.regime.as_str());
    println!("  Notary fee: €{:.0}", result.notary_fee);
    println!("  Borrowed: €{:.2}", result.borrowed_amount);
    println!("  Monthly payment: €{:.2}", result.monthly_payment);
    println!("  Year-1 interest: €{:.0}", result.year1_interest);
    println!("  Operating income: €{:.2}/yr", result.operating_income);
    println!("  Tax: €{:.0}/yr", result.annual_tax);
    println!("  Cash flow: €{:.2}/mo", result.monthly_cash_flow);
    println!("  Yield: {:.2}% (net {:.2}%)", result.gross_yield, result.net_yield);

    // Side-by-side regime comparison with identical other inputs
    println!("\nRegime comparison:");
    println!("{:>6} {:>12} {:>10} {:>10} {:>10}", "Regime", "CashFlow/mo", "Yield%", "Net%", "Tax/yr");
    println!("{}", "-".repeat(52));
    for row in engine.compare_regimes(&property) {
        println!(
            "{:>6} {:>12.2} {:>10.2} {:>10.2} {:>10.0}",
            row.regime.as_str(),
            row.monthly_cash_flow,
            row.gross_yield,
            row.net_yield,
            row.annual_tax,
        );
    }

    // Write the per-year amortization schedule to CSV
    if let Some(schedule) = &result.schedule {
        let csv_path = "amortization_schedule.csv";
        let mut file = File::create(csv_path)?;

        writeln!(file, "Year,Interest,Principal,EOP_Balance")?;
        for row in schedule {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2}",
                row.year, row.interest, row.principal, row.eop_balance
            )?;
        }

        println!("\nAmortization schedule written to: {}", csv_path);
    }

    // Rolling history of the last three computations, newest first
    let mut history = History::new();
    for regime in TaxRegime::ALL {
        history.record(engine.project(&property.with_regime(regime)));
    }
    println!("\nHistory ({} of {}):", history.len(), history.capacity());
    for (i, entry) in history.entries().iter().enumerate() {
        println!(
            "  #{} {} cash flow €{:.2}/mo",
            i + 1,
            entry.result.regime.as_str(),
            entry.result.monthly_cash_flow
        );
    }

    Ok(())
}
