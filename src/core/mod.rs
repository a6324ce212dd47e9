//! Core data types for the pricing and hedging engine
//!
//! Defines fundamental types:
//! - OptionContract: Strike, expiry, type (call/put)
//! - MarketState: Spot, rate, vol snapshot
//! - PriceObservation / PriceHistory: Daily adjusted-close series
//! - PortfolioState / HedgeStep: Hedging accumulator and recorded steps

pub mod error;
pub mod market;
pub mod option;
pub mod portfolio;
pub mod series;

pub use error::*;
pub use market::*;
pub use option::*;
pub use portfolio::*;
pub use series::*;
