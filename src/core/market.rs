//! Market state snapshot
//!
//! Spot, risk-free rate and volatility as observed at a single instant.
//! Re-supplied at each evaluation; never mutated by the pricing functions.

use serde::{Deserialize, Serialize};

use crate::core::{HedgeError, HedgeResult};

/// Market snapshot used as pricing input
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarketState {
    /// Spot price of the underlying
    pub spot: f64,
    /// Risk-free rate (annual, continuously compounded)
    pub rate: f64,
    /// Volatility of the underlying (annualized)
    pub vol: f64,
}

impl MarketState {
    pub fn new(spot: f64, rate: f64, vol: f64) -> HedgeResult<Self> {
        if spot <= 0.0 {
            return Err(HedgeError::invalid_parameter(format!(
                "spot must be positive, got {}",
                spot
            )));
        }
        if vol <= 0.0 {
            return Err(HedgeError::invalid_parameter(format!(
                "vol must be positive, got {}",
                vol
            )));
        }
        Ok(Self { spot, rate, vol })
    }

    /// Same rate and vol at a different spot
    pub fn with_spot(&self, spot: f64) -> HedgeResult<Self> {
        Self::new(spot, self.rate, self.vol)
    }
}
