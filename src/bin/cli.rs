//! Delta hedge CLI
//!
//! Prices the worked call/put example, downloads a year of daily history for
//! one ticker, runs the delta-hedging simulation and writes both charts.

use std::path::PathBuf;

use chrono::Utc;
use delta_hedge::models::black_scholes;
use delta_hedge::prelude::*;

const TICKER: &str = "AAPL";
const STRIKE: f64 = 100.0;
const RATE: f64 = 0.05;
const VOL: f64 = 0.20;
const LOOKBACK_DAYS: i64 = 365;
const INITIAL_CASH: f64 = 100_000.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> HedgeResult<()> {
    println!("Delta Hedge Backtest");
    println!("====================\n");

    // Worked pricing example: ATM, one year, 5% rate, 20% vol
    let spot = 100.0;
    let time = 1.0;

    let call_price = black_scholes::price(spot, STRIKE, RATE, VOL, time, OptionType::Call)?;
    let put_price = black_scholes::price(spot, STRIKE, RATE, VOL, time, OptionType::Put)?;

    println!("Call Option Price: {:.2}", call_price);
    println!("Put Option Price: {:.2}", put_price);

    let call_delta = black_scholes::delta(spot, STRIKE, RATE, VOL, time, OptionType::Call)?;
    let put_delta = black_scholes::delta(spot, STRIKE, RATE, VOL, time, OptionType::Put)?;

    println!("Call Delta: {:.4}", call_delta);
    println!("Put Delta: {:.4}", put_delta);

    // Download a year of daily closes
    println!("\nFetching {} daily history ({} days)...", TICKER, LOOKBACK_DAYS);

    let fetcher = CachedFetcher::new(CacheConfig::default(), LOOKBACK_DAYS)?;
    let history = match fetcher.get_history(TICKER) {
        Ok(h) => h,
        Err(e) => {
            println!("Could not fetch {}: {}", TICKER, e);
            println!("(This is expected if you're offline or Yahoo API is unavailable)");
            return Ok(());
        }
    };

    println!(
        "Got {} observations from {} to {}",
        history.len(),
        history.first_date().unwrap(),
        history.last_date().unwrap()
    );

    let returns = history.daily_returns();
    if !returns.is_empty() {
        let mean = returns.iter().map(|(_, r)| r).sum::<f64>() / returns.len() as f64;
        println!("Mean daily return: {:.4}%", mean * 100.0);
    }

    let price_chart = PathBuf::from(format!("{}_adj_close.html", TICKER.to_lowercase()));
    render_line_chart(
        &price_chart,
        &format!("{} Adjusted Close Price", TICKER),
        TICKER,
        &history.points(),
    )?;
    println!("Wrote {}", price_chart.display());

    // Hedge a call struck at the example strike, maturing at the end of the
    // observation window
    let expiry = Utc::now().date_naive();
    let contract = OptionContract::call(STRIKE, expiry)?;
    let simulator = HedgeSimulator::new(contract, RATE, VOL, INITIAL_CASH)?;

    let steps = simulator.run(&history.observations)?;

    println!("\nDelta-hedging simulation: {} steps", steps.len());
    if let (Some(first), Some(last)) = (steps.first(), steps.last()) {
        println!("  Start value: {:.2}", first.value);
        println!("  Final value: {:.2}", last.value);
        println!("  Final position: {:.4} shares", last.position);
        println!("  Final delta: {:.4}", last.delta);
    }

    let value_points: Vec<_> = steps.iter().map(|s| (s.date, s.value)).collect();
    let portfolio_chart = PathBuf::from(format!("{}_portfolio.html", TICKER.to_lowercase()));
    render_line_chart(
        &portfolio_chart,
        &format!("{} Delta-Neutral Portfolio Value", TICKER),
        "portfolio",
        &value_points,
    )?;
    println!("Wrote {}", portfolio_chart.display());

    Ok(())
}
