//! Yahoo Finance data fetcher
//!
//! Downloads free historical daily prices via Yahoo Finance's unofficial
//! chart API. Adjusted closes are used when Yahoo returns them, raw closes
//! otherwise.
//!
//! Note: This is for educational/research purposes. Yahoo Finance data is
//! delayed and intended for personal use.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;

use crate::core::{HedgeError, HedgeResult, PriceHistory, PriceObservation};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    /// Fetch daily price history for a symbol
    ///
    /// `start` is inclusive, `end` exclusive. Returns one observation per
    /// trading day; weekends and holidays are absent from the series.
    pub fn get_daily_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HedgeResult<PriceHistory> {
        if end <= start {
            return Err(HedgeError::invalid_parameter(format!(
                "date range is empty: {} to {}",
                start, end
            )));
        }

        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = end.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=div%7Csplit",
            self.base_url, symbol, period1, period2
        );

        let response: YahooChartResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| HedgeError::Network(e.to_string()))?
            .json()
            .map_err(|e| HedgeError::Data(format!("Failed to parse chart: {}", e)))?;

        if let Some(err) = response.chart.error {
            return Err(HedgeError::Data(format!(
                "Yahoo error {}: {}",
                err.code, err.description
            )));
        }

        let data = response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| HedgeError::data("No chart data returned"))?;

        history_from_chart(symbol, data)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a Yahoo chart payload to our price history format
///
/// Null and non-positive closes are dropped; Yahoo pads sessions it has no
/// data for with nulls rather than omitting them.
fn history_from_chart(symbol: &str, data: YahooChartData) -> HedgeResult<PriceHistory> {
    let timestamps = data
        .timestamp
        .ok_or_else(|| HedgeError::data_unavailable("no trading days in response"))?;

    let closes = match data.indicators.adjclose.and_then(|mut a| {
        if a.is_empty() {
            None
        } else {
            Some(a.remove(0).adjclose)
        }
    }) {
        Some(adj) => adj,
        None => {
            let mut quotes = data.indicators.quote;
            if quotes.is_empty() {
                return Err(HedgeError::data("chart response has no price block"));
            }
            quotes.remove(0).close
        }
    };

    let mut history = PriceHistory::new(symbol);
    for (&ts, close) in timestamps.iter().zip(closes.iter()) {
        let Some(px) = close else { continue };
        if *px <= 0.0 {
            continue;
        }
        let Some(dt) = DateTime::from_timestamp(ts, 0) else {
            continue;
        };
        history.push(PriceObservation::new(dt.date_naive(), *px));
    }

    if history.is_empty() {
        return Err(HedgeError::data_unavailable(format!(
            "no usable prices for {}",
            symbol
        )));
    }

    tracing::info!(
        "Fetched {} observations for {} ({} to {})",
        history.len(),
        symbol,
        history.first_date().unwrap(),
        history.last_date().unwrap()
    );

    Ok(history)
}

/// Convenience function: daily history for the trailing lookback window
pub fn fetch_daily_history(symbol: &str, lookback_days: i64) -> HedgeResult<PriceHistory> {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(lookback_days);

    let client = YahooClient::new();
    client.get_daily_history(symbol, start, end)
}

// Yahoo Finance chart API response structures

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartData>>,
    error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
struct YahooApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteBlock>,
    adjclose: Option<Vec<YahooAdjCloseBlock>>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBlock {
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct YahooAdjCloseBlock {
    adjclose: Vec<Option<f64>>,
}
