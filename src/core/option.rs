//! Option contract definitions
//!
//! Vanilla European options: strike, expiry date, call/put.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{HedgeError, HedgeResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// European option contract specification
///
/// Immutable once constructed; pricing and hedging re-derive time to expiry
/// from the expiry date rather than mutating the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    /// Strike price
    pub strike: f64,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(strike: f64, expiry: NaiveDate, option_type: OptionType) -> HedgeResult<Self> {
        if strike <= 0.0 {
            return Err(HedgeError::invalid_parameter(format!(
                "strike must be positive, got {}",
                strike
            )));
        }
        Ok(Self {
            strike,
            expiry,
            option_type,
        })
    }

    /// Create a new call contract
    pub fn call(strike: f64, expiry: NaiveDate) -> HedgeResult<Self> {
        Self::new(strike, expiry, OptionType::Call)
    }

    /// Create a new put contract
    pub fn put(strike: f64, expiry: NaiveDate) -> HedgeResult<Self> {
        Self::new(strike, expiry, OptionType::Put)
    }

    /// Time to expiry in years from given date (ACT/365)
    pub fn time_to_expiry(&self, from: NaiveDate) -> f64 {
        let days = (self.expiry - from).num_days();
        days as f64 / 365.0
    }

    /// Is this option in the money?
    pub fn is_itm(&self, spot: f64) -> bool {
        match self.option_type {
            OptionType::Call => spot > self.strike,
            OptionType::Put => spot < self.strike,
        }
    }
}
