// demos/reference_pricing.rs

//! Demonstration of Black-Scholes pricing and Greeks
//!
//! This example shows how to:
//! 1. Build validated market parameters
//! 2. Price the call/put pair and compute all Greeks
//! 3. Render the result under different reporting conventions
//! 4. Handle an invalid input

use anyhow::Result;
use bs_greeks::{default_configs, price_and_greeks, report, MarketParams, PricingError};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = MarketParams::new(
        100.0, // spot
        100.0, // strike
        1.0,   // one year to expiry
        0.05,  // 5% risk-free rate
        0.2,   // 20% volatility
    )?;
    let result = price_and_greeks(&params)?;

    println!("\nReference printout:");
    print!("{}", report::render(&result, &default_configs::reference()));

    println!("\nDesk conventions (vega per vol point, theta per day, rho per rate point):");
    print!("{}", report::render(&result, &default_configs::desk()));

    println!(
        "\nPut-call parity residual: {:.3e}",
        result.parity_residual(&params)
    );

    println!("\nAt expiry, in the money:");
    let expired = MarketParams::new(105.0, 100.0, 0.0, 0.05, 0.2)?;
    print!(
        "{}",
        report::render(&price_and_greeks(&expired)?, &default_configs::full())
    );

    println!("\nInvalid input:");
    match MarketParams::new(100.0, 0.0, 1.0, 0.05, 0.2) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(PricingError::InvalidInput { field, value, reason }) => {
            println!("  rejected {} = {} ({})", field, value, reason)
        }
    }

    Ok(())
}
