//! Naive delta-hedging simulation
//!
//! Walks a daily price history in order, recomputes the call delta at every
//! observation and shorts it on top of the running position. The strategy is
//! deliberately simple: no rebalancing to a target, no transaction costs.

use crate::core::{
    HedgeError, HedgeResult, HedgeStep, OptionContract, PortfolioState, PriceObservation,
};
use crate::models::black_scholes;

/// Delta-hedging simulator for a single option contract
#[derive(Debug, Clone)]
pub struct HedgeSimulator {
    contract: OptionContract,
    rate: f64,
    vol: f64,
    initial_cash: f64,
}

impl HedgeSimulator {
    pub fn new(
        contract: OptionContract,
        rate: f64,
        vol: f64,
        initial_cash: f64,
    ) -> HedgeResult<Self> {
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
        if !initial_cash.is_finite() {
            return Err(HedgeError::invalid_parameter(format!(
                "initial cash must be finite, got {}",
                initial_cash
            )));
        }
        Ok(Self {
            contract,
            rate,
            vol,
            initial_cash,
        })
    }

    /// Run the simulation over a chronologically ordered observation series
    ///
    /// Each step shorts the full delta computed at that observation on top
    /// of the accumulated position, then marks the portfolio to market.
    ///
    /// The run terminates at the contract's maturity: the first observation
    /// on or after the expiry date ends the loop and the steps recorded so
    /// far are returned. If even the first observation is at or past expiry
    /// the run fails with `ExpiredContract`. An empty series fails with
    /// `DataUnavailable`.
    pub fn run(&self, observations: &[PriceObservation]) -> HedgeResult<Vec<HedgeStep>> {
        if observations.is_empty() {
            return Err(HedgeError::data_unavailable(
                "empty price series, nothing to simulate",
            ));
        }

        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(HedgeError::data(format!(
                    "observations out of order: {} then {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        tracing::debug!(
            "hedging {} observations against strike {} expiring {}",
            observations.len(),
            self.contract.strike,
            self.contract.expiry
        );

        let mut state = PortfolioState::new(self.initial_cash);
        let mut steps = Vec::with_capacity(observations.len());

        for obs in observations {
            let time = self.contract.time_to_expiry(obs.date);
            if time <= 0.0 {
                if steps.is_empty() {
                    return Err(HedgeError::expired_contract(format!(
                        "contract expired {} before first observation {}",
                        self.contract.expiry, obs.date
                    )));
                }
                break;
            }

            let delta = black_scholes::delta(
                obs.adj_close,
                self.contract.strike,
                self.rate,
                self.vol,
                time,
                self.contract.option_type,
            )?;

            state.short_delta(delta);
            let value = state.value(obs.adj_close);

            if !delta.is_finite() || !value.is_finite() {
                return Err(HedgeError::numerical(format!(
                    "non-finite result at step {}: delta={}, value={}",
                    obs.date, delta, value
                )));
            }

            steps.push(HedgeStep {
                date: obs.date,
                spot: obs.adj_close,
                delta,
                position: state.position,
                value,
            });
        }

        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(d: NaiveDate, price: f64) -> PriceObservation {
        PriceObservation::new(d, price)
    }

    fn atm_call(expiry: NaiveDate) -> OptionContract {
        OptionContract::new(100.0, expiry, OptionType::Call).unwrap()
    }

    #[test]
    fn test_flat_series_accumulates_short() {
        let expiry = date(2025, 4, 2);
        let sim = HedgeSimulator::new(atm_call(expiry), 0.05, 0.2, 100_000.0).unwrap();

        let series = vec![
            obs(date(2025, 1, 2), 100.0),
            obs(date(2025, 1, 3), 100.0),
            // Weekend gap
            obs(date(2025, 1, 6), 100.0),
        ];

        let steps = sim.run(&series).unwrap();
        assert_eq!(steps.len(), 3);

        // Each step shorts a positive ATM call delta, so the position grows
        // strictly more negative
        let mut sum = 0.0;
        for (i, step) in steps.iter().enumerate() {
            assert!(step.delta > 0.0 && step.delta < 1.0);
            sum += step.delta;

            // Position is the running negative sum of all deltas so far
            assert!((step.position + sum).abs() < 1e-12);
            if i > 0 {
                assert!(step.position < steps[i - 1].position);
            }

            // Value is reproducible from the recorded deltas
            let expected = 100_000.0 - sum * 100.0;
            assert!((step.value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_series_fails() {
        let sim = HedgeSimulator::new(atm_call(date(2025, 4, 2)), 0.05, 0.2, 100_000.0).unwrap();
        assert!(matches!(
            sim.run(&[]),
            Err(HedgeError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_expired_before_start_fails() {
        let sim = HedgeSimulator::new(atm_call(date(2025, 1, 1)), 0.05, 0.2, 100_000.0).unwrap();
        let series = vec![obs(date(2025, 1, 1), 100.0), obs(date(2025, 1, 2), 101.0)];

        assert!(matches!(
            sim.run(&series),
            Err(HedgeError::ExpiredContract(_))
        ));
    }

    #[test]
    fn test_terminates_at_maturity() {
        let expiry = date(2025, 1, 6);
        let sim = HedgeSimulator::new(atm_call(expiry), 0.05, 0.2, 100_000.0).unwrap();

        let series = vec![
            obs(date(2025, 1, 2), 100.0),
            obs(date(2025, 1, 3), 101.0),
            obs(date(2025, 1, 6), 102.0), // expiry day: not simulated
            obs(date(2025, 1, 7), 103.0),
        ];

        let steps = sim.run(&series).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.last().unwrap().date, date(2025, 1, 3));
    }

    #[test]
    fn test_out_of_order_fails() {
        let sim = HedgeSimulator::new(atm_call(date(2025, 4, 2)), 0.05, 0.2, 100_000.0).unwrap();
        let series = vec![obs(date(2025, 1, 3), 100.0), obs(date(2025, 1, 2), 100.0)];

        assert!(matches!(sim.run(&series), Err(HedgeError::Data(_))));
    }

    #[test]
    fn test_bad_observation_price_fails() {
        let sim = HedgeSimulator::new(atm_call(date(2025, 4, 2)), 0.05, 0.2, 100_000.0).unwrap();
        let series = vec![obs(date(2025, 1, 2), -3.0)];

        assert!(matches!(
            sim.run(&series),
            Err(HedgeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        let contract = atm_call(date(2025, 4, 2));
        assert!(matches!(
            HedgeSimulator::new(contract.clone(), 0.05, 0.0, 100_000.0),
            Err(HedgeError::InvalidParameter(_))
        ));
        assert!(matches!(
            HedgeSimulator::new(contract, f64::NAN, 0.2, 100_000.0),
            Err(HedgeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_deltas_rise_with_spot() {
        // Drifting spot upward pushes the call deeper ITM, so each step's
        // delta exceeds the previous one
        let expiry = date(2025, 7, 1);
        let sim = HedgeSimulator::new(atm_call(expiry), 0.05, 0.2, 100_000.0).unwrap();

        let series = vec![
            obs(date(2025, 1, 2), 100.0),
            obs(date(2025, 1, 3), 105.0),
            obs(date(2025, 1, 6), 110.0),
        ];

        let steps = sim.run(&series).unwrap();
        assert!(steps[1].delta > steps[0].delta);
        assert!(steps[2].delta > steps[1].delta);
    }
}
