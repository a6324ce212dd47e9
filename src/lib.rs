//! # Delta Hedge - Black-Scholes Pricing and Hedging Backtest
//!
//! Prices European options with the Black-Scholes closed form, derives the
//! option delta, downloads daily price history for an equity ticker and
//! simulates a naive delta-hedging strategy over that history.
//!
//! ## Key Components
//!
//! - **Pricing**: Black-Scholes call/put price and delta
//! - **Data Fetching**: Yahoo Finance daily history with local caching
//! - **Hedging**: sequential delta-hedging simulation over the price series
//! - **Charts**: self-contained HTML line charts of prices and portfolio value
//!
//! ## Usage
//!
//! ```rust,no_run
//! use delta_hedge::prelude::*;
//!
//! // Fetch a year of AAPL daily closes
//! let history = fetch_daily_history("AAPL", 365).unwrap();
//!
//! // Hedge a call struck at 100 expiring at the end of the window
//! let expiry = history.last_date().unwrap();
//! let contract = OptionContract::call(100.0, expiry).unwrap();
//!
//! let sim = HedgeSimulator::new(contract, 0.05, 0.2, 100_000.0).unwrap();
//! let steps = sim.run(&history.observations).unwrap();
//!
//! for step in &steps {
//!     println!("{}: value {:.2}, delta {:.4}", step.date, step.value, step.delta);
//! }
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American early exercise
//! - Implied-volatility calibration or rate term structures
//! - Transaction costs, slippage or multi-asset portfolios

pub mod chart;
pub mod core;
pub mod data;
pub mod hedging;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        HedgeError, HedgeResult, HedgeStep, MarketState, OptionContract, OptionType,
        PortfolioState, PriceHistory, PriceObservation,
    };

    // Data fetching
    pub use crate::data::{fetch_daily_history, CacheConfig, CachedFetcher, DataCache, YahooClient};

    // Pricing
    pub use crate::models::{
        delta as bs_delta, delta_at, norm_cdf, norm_pdf, price as bs_price, price_at,
    };

    // Hedging
    pub use crate::hedging::HedgeSimulator;

    // Charts
    pub use crate::chart::render_line_chart;
}

// Re-export main types at crate root
pub use crate::core::{HedgeError, HedgeResult};
pub use crate::hedging::HedgeSimulator;
