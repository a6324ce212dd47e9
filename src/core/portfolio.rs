//! Hedged portfolio state
//!
//! The running accumulator of the delta-hedging loop and the per-step
//! snapshot it records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Running state of the hedged portfolio
///
/// Created once at simulation start and threaded through the fold over the
/// observation series. Cash is the configured starting amount; the hedge
/// position is a signed share count in the underlying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortfolioState {
    /// Cash balance
    pub cash: f64,
    /// Hedge position in the underlying, signed
    pub position: f64,
}

impl PortfolioState {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            position: 0.0,
        }
    }

    /// Short the given delta on top of the existing position
    ///
    /// The strategy accumulates: each step subtracts the full delta seen at
    /// that step, it does not rebalance to `-delta`.
    pub fn short_delta(&mut self, delta: f64) {
        self.position -= delta;
    }

    /// Mark-to-market value at the given spot
    pub fn value(&self, spot: f64) -> f64 {
        self.cash + self.position * spot
    }
}

/// One recorded step of a hedge simulation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HedgeStep {
    /// Observation date
    pub date: NaiveDate,
    /// Spot price on that date
    pub spot: f64,
    /// Call delta computed at that date
    pub delta: f64,
    /// Hedge position after shorting the delta
    pub position: f64,
    /// Portfolio value after the update
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_delta_accumulates() {
        let mut state = PortfolioState::new(100_000.0);
        state.short_delta(0.6);
        state.short_delta(0.5);

        assert!((state.position + 1.1).abs() < 1e-12);
        assert_eq!(state.cash, 100_000.0);
    }

    #[test]
    fn test_value() {
        let mut state = PortfolioState::new(1_000.0);
        state.short_delta(2.0);
        assert!((state.value(50.0) - 900.0).abs() < 1e-12);
    }
}
