// =============================================================================
// MACD Analysis — line/signal/histogram + buy/sell classification
// =============================================================================
//
// MACD line = EMA(close, fast) - EMA(close, slow)
// Signal    = EMA(MACD line, signal_period), seeded once the MACD line has
//             `signal_period` defined values
// Histogram = MACD line - Signal
//
// Latest-bar classification:
//   Buy  — MACD > signal AND histogram > 0
//   Sell — MACD < signal AND histogram < 0
//   else Neutral (including any undefined input)
//
// Crossover detection uses the shared backward scan over (MACD, signal) with
// a 5-pair lookback.

use serde::Serialize;
use tracing::debug;

use crate::analysis::crossover::{recent_cross, CrossDirection};
use crate::error::AnalysisError;
use crate::indicators::ema::calculate_ema;
use crate::series::Series;
use crate::types::{MacdCrossover, TradeSignal};

/// Adjacent bar pairs examined when searching for a recent MACD crossover.
const CROSSOVER_LOOKBACK: usize = 5;

/// MACD window set. Defaults to the conventional 12/26/9.
#[derive(Debug, Clone, Copy)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD snapshot for one series.
#[derive(Debug, Clone, Serialize)]
pub struct MacdReport {
    pub current_price: f64,
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
    /// Latest MACD line value; `None` until the slow EMA is defined.
    pub macd: Option<f64>,
    /// Latest signal line value; `None` until the signal EMA is seeded.
    pub signal_line: Option<f64>,
    /// Latest histogram value (MACD - signal) where both are defined.
    pub histogram: Option<f64>,
    pub signal: TradeSignal,
    pub recent_crossover: MacdCrossover,
    pub macd_above_signal: Option<bool>,
    /// Latest histogram vs the one before it; `None` with fewer than two
    /// defined histogram values.
    pub histogram_increasing: Option<bool>,
}

/// Analyze the MACD of `series` with the given window set.
///
/// # Errors
/// `Computation` when the series has zero length. A series too short for the
/// slow or signal window leaves the numeric fields undefined.
pub fn analyze_macd(series: &Series, params: MacdParams) -> Result<MacdReport, AnalysisError> {
    let closes = series.closes();
    let current_price = *closes.last().ok_or_else(|| {
        AnalysisError::Computation("cannot analyze MACD of an empty series".to_string())
    })?;

    let (macd_line, signal_line, histogram) = macd_series(&closes, params);

    let macd = macd_line.last().copied().flatten();
    let signal_value = signal_line.last().copied().flatten();
    let hist = histogram.last().copied().flatten();

    let signal = match (macd, signal_value, hist) {
        (Some(m), Some(s), Some(h)) if m > s && h > 0.0 => TradeSignal::Buy,
        (Some(m), Some(s), Some(h)) if m < s && h < 0.0 => TradeSignal::Sell,
        _ => TradeSignal::Neutral,
    };

    let recent_crossover = match recent_cross(&macd_line, &signal_line, CROSSOVER_LOOKBACK) {
        Some(CrossDirection::Bullish) => MacdCrossover::Bullish,
        Some(CrossDirection::Bearish) => MacdCrossover::Bearish,
        None => MacdCrossover::None,
    };

    let macd_above_signal = match (macd, signal_value) {
        (Some(m), Some(s)) => Some(m > s),
        _ => None,
    };

    let histogram_increasing = match histogram.len() {
        0 | 1 => None,
        n => match (histogram[n - 2], histogram[n - 1]) {
            (Some(prev), Some(curr)) => Some(curr > prev),
            _ => None,
        },
    };

    debug!(
        bars = series.len(),
        fast = params.fast,
        slow = params.slow,
        signal_period = params.signal,
        trade_signal = %signal,
        crossover = %recent_crossover,
        "MACD analysis complete"
    );

    Ok(MacdReport {
        current_price,
        fast_period: params.fast,
        slow_period: params.slow,
        signal_period: params.signal,
        macd,
        signal_line: signal_value,
        histogram: hist,
        signal,
        recent_crossover,
        macd_above_signal,
        histogram_increasing,
    })
}

/// Compute the three aligned MACD series: line, signal, histogram.
#[allow(clippy::type_complexity)]
fn macd_series(
    closes: &[f64],
    params: MacdParams,
) -> (Vec<Option<f64>>, Vec<Option<f64>>, Vec<Option<f64>>) {
    let fast_ema = calculate_ema(closes, params.fast);
    let slow_ema = calculate_ema(closes, params.slow);

    let macd_line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // The defined MACD values form one contiguous run; smooth that run and
    // re-align the result to bar indices.
    let first_defined = macd_line.iter().position(|v| v.is_some());
    let mut signal_line = vec![None; macd_line.len()];
    if let Some(offset) = first_defined {
        let run: Vec<f64> = macd_line[offset..].iter().flatten().copied().collect();
        for (i, v) in calculate_ema(&run, params.signal).into_iter().enumerate() {
            signal_line[offset + i] = v;
        }
    }

    let histogram: Vec<Option<f64>> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    (macd_line, signal_line, histogram)
}
