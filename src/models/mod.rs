//! Pricing models
//!
//! Black-Scholes closed-form pricing and delta for European options.

pub mod black_scholes;

pub use black_scholes::{d1, d2, delta, delta_at, norm_cdf, norm_pdf, price, price_at};
