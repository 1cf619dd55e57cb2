// =============================================================================
// Moving-Average Analysis — trend + golden/death cross detection
// =============================================================================
//
// Computes short- and long-window SMAs of the closing prices and classifies:
//   trend     — Bullish only on a strict short > long (ties are Bearish)
//   crossover — most recent golden/death cross within the last 10 bar pairs
//
// Window sizes are caller responsibility; `short_period >= long_period` is
// not rejected, the labels just lose their usual meaning.

use serde::Serialize;
use tracing::debug;

use crate::analysis::crossover::{recent_cross, CrossDirection};
use crate::error::AnalysisError;
use crate::indicators::sma::calculate_sma;
use crate::series::Series;
use crate::types::{MaCrossover, Trend};

/// Adjacent bar pairs examined when searching for a recent SMA crossover.
const CROSSOVER_LOOKBACK: usize = 10;

/// Full moving-average snapshot for one series.
#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageReport {
    pub current_price: f64,
    pub short_period: usize,
    pub long_period: usize,
    /// Latest short-window SMA; `None` when the series is shorter than the window.
    pub short_ma: Option<f64>,
    /// Latest long-window SMA; `None` when the series is shorter than the window.
    pub long_ma: Option<f64>,
    pub trend: Trend,
    pub recent_crossover: MaCrossover,
    /// Whether the close sits above the short SMA; undefined with the SMA.
    pub above_short_ma: Option<bool>,
    pub above_long_ma: Option<bool>,
    /// Close divided by the SMA; `None` when the SMA is undefined or zero.
    pub price_to_short_ma_ratio: Option<f64>,
    pub price_to_long_ma_ratio: Option<f64>,
}

/// Analyze short/long simple moving averages of `series`.
///
/// # Errors
/// `Computation` when the series has zero length. Windows longer than the
/// series are not errors; the affected fields come back `None`.
pub fn analyze_moving_averages(
    series: &Series,
    short_period: usize,
    long_period: usize,
) -> Result<MovingAverageReport, AnalysisError> {
    let closes = series.closes();
    let current_price = *closes.last().ok_or_else(|| {
        AnalysisError::Computation("cannot analyze moving averages of an empty series".to_string())
    })?;

    let short_series = calculate_sma(&closes, short_period);
    let long_series = calculate_sma(&closes, long_period);

    let short_ma = short_series.last().copied().flatten();
    let long_ma = long_series.last().copied().flatten();

    let trend = match (short_ma, long_ma) {
        (Some(s), Some(l)) if s > l => Trend::Bullish,
        _ => Trend::Bearish,
    };

    let recent_crossover = match recent_cross(&short_series, &long_series, CROSSOVER_LOOKBACK) {
        Some(CrossDirection::Bullish) => MaCrossover::GoldenCross,
        Some(CrossDirection::Bearish) => MaCrossover::DeathCross,
        None => MaCrossover::None,
    };

    debug!(
        bars = series.len(),
        short_period,
        long_period,
        trend = %trend,
        crossover = %recent_crossover,
        "moving-average analysis complete"
    );

    Ok(MovingAverageReport {
        current_price,
        short_period,
        long_period,
        short_ma,
        long_ma,
        trend,
        recent_crossover,
        above_short_ma: short_ma.map(|ma| current_price > ma),
        above_long_ma: long_ma.map(|ma| current_price > ma),
        price_to_short_ma_ratio: ratio(current_price, short_ma),
        price_to_long_ma_ratio: ratio(current_price, long_ma),
    })
}

/// Price-to-MA ratio; undefined when the MA is undefined or zero.
fn ratio(price: f64, ma: Option<f64>) -> Option<f64> {
    match ma {
        Some(m) if m != 0.0 => Some(price / m),
        _ => None,
    }
}
