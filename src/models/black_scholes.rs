//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (closed form)
//! - Delta, the hedge ratio used by the simulator
//!
//! Price and delta share the same d1 computation so the two never drift
//! apart in floating point.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{HedgeError, HedgeResult, MarketState, OptionContract, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Callers must have validated inputs; non-positive spot, strike, vol or
/// time would put ln/sqrt outside their domains.
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

fn validate_inputs(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> HedgeResult<()> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(HedgeError::invalid_parameter(format!(
            "spot must be positive, got {}",
            spot
        )));
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(HedgeError::invalid_parameter(format!(
            "strike must be positive, got {}",
            strike
        )));
    }
    if !rate.is_finite() {
        return Err(HedgeError::invalid_parameter(format!(
            "rate must be finite, got {}",
            rate
        )));
    }
    if !vol.is_finite() || vol <= 0.0 {
        return Err(HedgeError::invalid_parameter(format!(
            "vol must be positive, got {}",
            vol
        )));
    }
    if !time.is_finite() || time <= 0.0 {
        return Err(HedgeError::invalid_parameter(format!(
            "time to expiry must be positive, got {}",
            time
        )));
    }
    Ok(())
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> HedgeResult<f64> {
    validate_inputs(spot, strike, rate, vol, time)?;

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    let value = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    Ok(value)
}

/// Black-Scholes delta
///
/// Call delta lies in [0, 1], put delta in [-1, 0].
pub fn delta(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    time: f64,
    option_type: OptionType,
) -> HedgeResult<f64> {
    validate_inputs(spot, strike, rate, vol, time)?;

    let d1 = d1(spot, strike, rate, vol, time);

    let value = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    Ok(value)
}

/// Price a contract against a market snapshot as of a given date
///
/// A contract at or past its expiry date cannot be priced and fails with
/// `ExpiredContract`.
pub fn price_at(
    market: &MarketState,
    contract: &OptionContract,
    asof: chrono::NaiveDate,
) -> HedgeResult<f64> {
    let time = contract.time_to_expiry(asof);
    if time <= 0.0 {
        return Err(HedgeError::expired_contract(format!(
            "contract expired {} as of {}",
            contract.expiry, asof
        )));
    }
    price(
        market.spot,
        contract.strike,
        market.rate,
        market.vol,
        time,
        contract.option_type,
    )
}

/// Delta of a contract against a market snapshot as of a given date
pub fn delta_at(
    market: &MarketState,
    contract: &OptionContract,
    asof: chrono::NaiveDate,
) -> HedgeResult<f64> {
    let time = contract.time_to_expiry(asof);
    if time <= 0.0 {
        return Err(HedgeError::expired_contract(format!(
            "contract expired {} as of {}",
            contract.expiry, asof
        )));
    }
    delta(
        market.spot,
        contract.strike,
        market.rate,
        market.vol,
        time,
        contract.option_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
    }

    #[test]
    fn test_bs_price_atm() {
        // ATM, 20% vol, 1 year, 5% rate: the classic worked example
        let call = price(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call).unwrap();
        let put = price(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put).unwrap();

        assert!((call - 10.45).abs() < 0.01);
        assert!((put - 5.57).abs() < 0.01);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*e^(-rT) across a spread of inputs
        for &spot in &[80.0, 100.0, 123.0] {
            for &time in &[0.1, 0.5, 2.0] {
                for &vol in &[0.1, 0.2, 0.45] {
                    let strike = 100.0;
                    let rate = 0.05;
                    let call = price(spot, strike, rate, vol, time, OptionType::Call).unwrap();
                    let put = price(spot, strike, rate, vol, time, OptionType::Put).unwrap();
                    let parity = call - put - (spot - strike * (-rate * time).exp());
                    assert!(
                        parity.abs() < 1e-6,
                        "parity violated: S={} T={} vol={} -> {}",
                        spot,
                        time,
                        vol,
                        parity
                    );
                }
            }
        }
    }

    #[test]
    fn test_intrinsic_limit() {
        // As T -> 0+ the price collapses to intrinsic value
        let t = 1e-9;

        let itm_call = price(110.0, 100.0, 0.05, 0.2, t, OptionType::Call).unwrap();
        assert!((itm_call - 10.0).abs() < 1e-4);

        let otm_call = price(90.0, 100.0, 0.05, 0.2, t, OptionType::Call).unwrap();
        assert!(otm_call.abs() < 1e-4);

        let itm_put = price(90.0, 100.0, 0.05, 0.2, t, OptionType::Put).unwrap();
        assert!((itm_put - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_delta_values() {
        let call = delta(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call).unwrap();
        let put = delta(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put).unwrap();

        assert!((call - 0.6368).abs() < 1e-4);
        assert!((put + 0.3632).abs() < 1e-4);
        // Call and put delta differ by exactly one
        assert!((call - put - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_delta_bounds() {
        for &spot in &[10.0, 50.0, 100.0, 500.0] {
            for &time in &[0.01, 0.5, 3.0] {
                for &vol in &[0.05, 0.2, 0.8] {
                    let call = delta(spot, 100.0, 0.05, vol, time, OptionType::Call).unwrap();
                    let put = delta(spot, 100.0, 0.05, vol, time, OptionType::Put).unwrap();
                    assert!((0.0..=1.0).contains(&call));
                    assert!((-1.0..=0.0).contains(&put));
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_spot() {
        let mut prev_call = f64::NEG_INFINITY;
        let mut prev_put = f64::INFINITY;

        for i in 0..30 {
            let spot = 50.0 + 5.0 * i as f64;
            let call = price(spot, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
            let put = price(spot, 100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();

            assert!(call >= prev_call - 1e-12);
            assert!(put <= prev_put + 1e-12);
            prev_call = call;
            prev_put = put;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        for bad in [
            price(-1.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call),
            price(100.0, 0.0, 0.05, 0.2, 1.0, OptionType::Call),
            price(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call),
            price(100.0, 100.0, 0.05, 0.2, -0.5, OptionType::Call),
            delta(100.0, 100.0, 0.05, -0.2, 1.0, OptionType::Put),
            delta(100.0, 100.0, 0.05, 0.2, 0.0, OptionType::Put),
            delta(f64::NAN, 100.0, 0.05, 0.2, 1.0, OptionType::Call),
        ] {
            assert!(matches!(bad, Err(HedgeError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_price_at_expired() {
        let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let contract = OptionContract::call(100.0, expiry).unwrap();
        let market = MarketState::new(100.0, 0.05, 0.2).unwrap();

        // On expiry day the contract no longer prices
        assert!(matches!(
            price_at(&market, &contract, expiry),
            Err(HedgeError::ExpiredContract(_))
        ));
        assert!(matches!(
            delta_at(&market, &contract, expiry),
            Err(HedgeError::ExpiredContract(_))
        ));

        // A month out it does
        let asof = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let p = price_at(&market, &contract, asof).unwrap();
        assert!(p > 0.0);
        let d = delta_at(&market, &contract, asof).unwrap();
        assert!((0.0..=1.0).contains(&d));
    }
}
