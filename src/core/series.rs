//! Historical price series
//!
//! Daily adjusted-close observations for a single underlying. One point per
//! trading day; weekends and holidays are simply absent, so consumers must
//! not assume a fixed calendar step.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single (date, adjusted close) point in a price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Trading day
    pub date: NaiveDate,
    /// Adjusted close price
    pub adj_close: f64,
}

impl PriceObservation {
    pub fn new(date: NaiveDate, adj_close: f64) -> Self {
        Self { date, adj_close }
    }
}

/// Chronologically ordered daily price history for one symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Underlying symbol (e.g., "AAPL")
    pub symbol: String,
    /// Observations, oldest first
    pub observations: Vec<PriceObservation>,
    /// Timestamp when fetched
    pub timestamp: DateTime<Utc>,
}

impl PriceHistory {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            observations: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Add an observation, keeping the series ordered by date
    pub fn push(&mut self, obs: PriceObservation) {
        self.observations.push(obs);
        self.observations.sort_by_key(|o| o.date);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// First observation date, if any
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    /// Last observation date, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// (date, value) pairs, ready for charting
    pub fn points(&self) -> Vec<(NaiveDate, f64)> {
        self.observations
            .iter()
            .map(|o| (o.date, o.adj_close))
            .collect()
    }

    /// Daily percent-change returns; the first observation has no return
    /// and is dropped
    pub fn daily_returns(&self) -> Vec<(NaiveDate, f64)> {
        self.observations
            .windows(2)
            .map(|w| (w[1].date, w[1].adj_close / w[0].adj_close - 1.0))
            .collect()
    }
}
