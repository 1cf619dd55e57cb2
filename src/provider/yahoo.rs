// =============================================================================
// Yahoo Finance Chart Client — daily bars over the public v8 chart API
// =============================================================================
//
// GET {base}/v8/finance/chart/{ticker}?range={range}&interval=1d
//
// The response carries parallel arrays (timestamp + open/high/low/close/
// volume) with nulls for halted sessions; rows missing any OHLC component
// are skipped rather than invented. Every failure mode — transport, HTTP
// status, body shape, upstream error object — surfaces as `DataUnavailable`.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::AnalysisError;
use crate::provider::SeriesProvider;
use crate::series::{Bar, Series};
use crate::types::Range;

/// Chart API client for daily OHLCV history.
#[derive(Clone)]
pub struct YahooProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new provider against `base_url` (no trailing slash) with a
    /// per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            // Yahoo rejects requests without a browser-ish user agent.
            .user_agent("Mozilla/5.0 (compatible; argus-ta/1.0)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl SeriesProvider for YahooProvider {
    #[instrument(skip(self), name = "yahoo::fetch_series")]
    async fn fetch_series(&self, ticker: &str, range: Range) -> Result<Series, AnalysisError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, ticker, range
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::DataUnavailable(format!("chart request failed: {e}")))?;

        let status = resp.status();
        let body: Value = resp.json().await.map_err(|e| {
            AnalysisError::DataUnavailable(format!("failed to parse chart response: {e}"))
        })?;

        if !status.is_success() {
            return Err(AnalysisError::DataUnavailable(format!(
                "chart API returned {status} for {ticker}"
            )));
        }

        let bars = parse_chart(&body)?;
        if bars.is_empty() {
            return Err(AnalysisError::DataUnavailable(format!(
                "chart API returned no usable bars for {ticker}"
            )));
        }
        debug!(ticker, %range, bars = bars.len(), "daily bars fetched");

        Series::load(bars)
    }
}

/// Extract daily bars from a v8 chart response body.
///
/// Fails with `DataUnavailable` when the body is malformed or carries an
/// upstream error object; rows with any null OHLC component are skipped.
fn parse_chart(body: &Value) -> Result<Vec<Bar>, AnalysisError> {
    let chart = body
        .get("chart")
        .ok_or_else(|| AnalysisError::DataUnavailable("response missing `chart`".to_string()))?;

    if let Some(err) = chart.get("error").filter(|e| !e.is_null()) {
        return Err(AnalysisError::DataUnavailable(format!(
            "chart API error: {err}"
        )));
    }

    let result = chart
        .get("result")
        .and_then(Value::as_array)
        .and_then(|r| r.first())
        .ok_or_else(|| AnalysisError::DataUnavailable("chart result is empty".to_string()))?;

    let timestamps = result
        .get("timestamp")
        .and_then(Value::as_array)
        .ok_or_else(|| AnalysisError::DataUnavailable("chart has no timestamps".to_string()))?;

    let quote = result
        .pointer("/indicators/quote/0")
        .ok_or_else(|| AnalysisError::DataUnavailable("chart has no quote block".to_string()))?;

    let field = |name: &str| -> Result<&Vec<Value>, AnalysisError> {
        quote.get(name).and_then(Value::as_array).ok_or_else(|| {
            AnalysisError::DataUnavailable(format!("quote block missing `{name}`"))
        })
    };

    let opens = field("open")?;
    let highs = field("high")?;
    let lows = field("low")?;
    let closes = field("close")?;
    let volumes = field("volume")?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(ts) = ts.as_i64() else {
            warn!(index = i, "skipping row with non-numeric timestamp");
            continue;
        };
        let Some(date) = chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()) else {
            warn!(index = i, ts, "skipping row with out-of-range timestamp");
            continue;
        };

        // Halted or partial sessions come back as nulls; drop the whole row.
        let ohlc = (
            opens.get(i).and_then(Value::as_f64),
            highs.get(i).and_then(Value::as_f64),
            lows.get(i).and_then(Value::as_f64),
            closes.get(i).and_then(Value::as_f64),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = ohlc else {
            debug!(index = i, %date, "skipping row with null OHLC");
            continue;
        };

        let volume = volumes.get(i).and_then(Value::as_u64).unwrap_or(0);

        bars.push(Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(bars)
}
