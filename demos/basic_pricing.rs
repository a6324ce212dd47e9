//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use delta_hedge::prelude::*;

fn main() -> HedgeResult<()> {
    // Option parameters
    let spot = 100.0;
    let strike = 105.0;
    let rate = 0.05; // 5% risk-free rate
    let vol = 0.20; // 20% volatility
    let time = 0.25; // 3 months

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%", vol * 100.0);
    println!("Time:     {:.2} years ({:.0} days)\n", time, time * 365.0);

    let call_price = bs_price(spot, strike, rate, vol, time, OptionType::Call)?;
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(spot, strike, rate, vol, time, OptionType::Put)?;
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Delta ===\n");
    let call_delta = bs_delta(spot, strike, rate, vol, time, OptionType::Call)?;
    let put_delta = bs_delta(spot, strike, rate, vol, time, OptionType::Put)?;
    println!("Call Delta: {:.4}", call_delta);
    println!("Put Delta:  {:.4}", put_delta);

    Ok(())
}
