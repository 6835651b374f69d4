// demos/pricing_demo.rs

//! Single-point Black-Scholes pricing.
//!
//! Prices the reference scenario, then shows how the checked entry point
//! rejects invalid inputs instead of returning a meaningless number.
//!
//! Usage:
//!     cargo run --example pricing_demo

use anyhow::Result;
use heatmap_lib::{format_price, price, InputField, OptionInputs};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let inputs = OptionInputs::new(31.55, 22.75, 0.5, 0.05, 3.5).with_dividend_yield(0.05);

    println!("Inputs:");
    for field in InputField::ALL {
        println!("  {:<26} {:>8.4}", field.label(), inputs.get(field));
    }

    let prices = price(&inputs)?;
    println!("\nCALL value: {}", format_price(prices.call));
    println!("PUT value:  {}", format_price(prices.put));

    println!("\nStrike ladder:");
    println!("{:<8} {:<10} {:<10}", "Strike", "Call", "Put");
    println!("{}", "-".repeat(30));
    for strike in [15.0, 20.0, 22.75, 25.0, 30.0, 35.0] {
        let p = price(&inputs.with(InputField::Strike, strike))?;
        println!(
            "{:<8.2} {:<10} {:<10}",
            strike,
            format_price(p.call),
            format_price(p.put)
        );
    }

    println!("\nRejected inputs:");
    for field in [InputField::Volatility, InputField::TimeToExpiration] {
        if let Err(e) = price(&inputs.with(field, 0.0)) {
            println!("  {}", e);
        }
    }

    Ok(())
}
