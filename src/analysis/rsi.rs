// =============================================================================
// RSI Analysis — overbought/oversold condition + short-term RSI trend
// =============================================================================
//
// Thresholds: RSI >= 70 => Overbought, RSI <= 30 => Oversold, else Neutral.
// Trend compares the latest RSI against the value five bars prior; both must
// be defined and the series at least five bars long, otherwise Neutral.

use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::indicators::rsi::calculate_rsi;
use crate::series::Series;
use crate::types::{Condition, RsiTrend};

const OVERBOUGHT: f64 = 70.0;
const OVERSOLD: f64 = 30.0;

/// Bars between the latest RSI and its trend baseline.
const TREND_SPAN: usize = 5;

/// Number of trailing defined RSI values reported as history.
const HISTORY_LEN: usize = 5;

/// RSI snapshot for one series.
#[derive(Debug, Clone, Serialize)]
pub struct RsiReport {
    pub current_price: f64,
    pub period: usize,
    /// Latest RSI; `None` when the series is shorter than `period + 1` bars.
    pub rsi: Option<f64>,
    pub condition: Condition,
    pub rsi_trend: RsiTrend,
    /// The last defined RSI values (up to 5), oldest first.
    pub rsi_history: Vec<f64>,
}

/// Compute the RSI of `series` and classify it.
///
/// # Errors
/// `Computation` when the series has zero length; an undersized window only
/// leaves the numeric fields undefined.
pub fn analyze_rsi(series: &Series, period: usize) -> Result<RsiReport, AnalysisError> {
    let closes = series.closes();
    let current_price = *closes.last().ok_or_else(|| {
        AnalysisError::Computation("cannot compute RSI of an empty series".to_string())
    })?;

    let rsi_series = calculate_rsi(&closes, period);
    let rsi = rsi_series.last().copied().flatten();

    let condition = match rsi {
        Some(v) if v >= OVERBOUGHT => Condition::Overbought,
        Some(v) if v <= OVERSOLD => Condition::Oversold,
        _ => Condition::Neutral,
    };

    // Baseline: the RSI five bars back (the 5th most recent value).
    let baseline = if rsi_series.len() >= TREND_SPAN {
        rsi_series[rsi_series.len() - TREND_SPAN]
    } else {
        None
    };

    let rsi_trend = match (rsi, baseline) {
        (Some(latest), Some(prior)) if latest > prior => RsiTrend::Increasing,
        (Some(latest), Some(prior)) if latest < prior => RsiTrend::Decreasing,
        _ => RsiTrend::Neutral,
    };

    let defined: Vec<f64> = rsi_series.iter().flatten().copied().collect();
    let rsi_history = defined[defined.len().saturating_sub(HISTORY_LEN)..].to_vec();

    debug!(
        bars = series.len(),
        period,
        rsi = ?rsi,
        condition = %condition,
        trend = %rsi_trend,
        "RSI analysis complete"
    );

    Ok(RsiReport {
        current_price,
        period,
        rsi,
        condition,
        rsi_trend,
        rsi_history,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Bar;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000,
            })
            .collect();
        Series::load(bars).unwrap()
    }

    #[test]
    fn empty_series_is_a_computation_error() {
        let empty = Series { bars: Vec::new() };
        let err = analyze_rsi(&empty, 14).unwrap_err();
        assert!(matches!(err, AnalysisError::Computation(_)));
    }

    #[test]
    fn short_series_is_neutral_with_no_value() {
        let report = analyze_rsi(&series(&[10.0, 11.0, 12.0]), 14).unwrap();
        assert_eq!(report.rsi, None);
        assert_eq!(report.condition, Condition::Neutral);
        assert_eq!(report.rsi_trend, RsiTrend::Neutral);
        assert!(report.rsi_history.is_empty());
    }

    #[test]
    fn relentless_rally_reads_overbought() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let report = analyze_rsi(&series(&closes), 14).unwrap();
        assert!((report.rsi.unwrap() - 100.0).abs() < 1e-10);
        assert_eq!(report.condition, Condition::Overbought);
        assert_eq!(report.rsi_history.len(), 5);
    }

    #[test]
    fn relentless_selloff_reads_oversold() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let report = analyze_rsi(&series(&closes), 14).unwrap();
        assert!(report.rsi.unwrap().abs() < 1e-10);
        assert_eq!(report.condition, Condition::Oversold);
    }

    #[test]
    fn flat_series_is_neutral_fifty() {
        let report = analyze_rsi(&series(&[100.0; 30]), 14).unwrap();
        assert!((report.rsi.unwrap() - 50.0).abs() < 1e-10);
        assert_eq!(report.condition, Condition::Neutral);
        // Every RSI equals 50, so latest vs baseline ties.
        assert_eq!(report.rsi_trend, RsiTrend::Neutral);
    }

    #[test]
    fn recovery_from_selloff_reads_increasing() {
        // Decline long enough to define the RSI well below 50, then rally for
        // the last four bars: latest RSI > RSI five bars prior.
        let mut closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        let last = *closes.last().unwrap();
        closes.extend((1..=4).map(|i| last + 3.0 * i as f64));
        let report = analyze_rsi(&series(&closes), 14).unwrap();
        assert_eq!(report.rsi_trend, RsiTrend::Increasing);
        assert!(report.rsi.unwrap() > 30.0);
    }

    #[test]
    fn rollover_reads_decreasing() {
        let mut closes: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
        let last = *closes.last().unwrap();
        closes.extend((1..=4).map(|i| last - 3.0 * i as f64));
        let report = analyze_rsi(&series(&closes), 14).unwrap();
        assert_eq!(report.rsi_trend, RsiTrend::Decreasing);
    }

    #[test]
    fn history_excludes_undefined_prefix() {
        // 16 closes, period 14 => exactly two defined RSI values.
        let closes: Vec<f64> = (1..=16).map(|x| x as f64).collect();
        let report = analyze_rsi(&series(&closes), 14).unwrap();
        assert_eq!(report.rsi_history.len(), 2);
        for v in &report.rsi_history {
            assert!((0.0..=100.0).contains(v));
        }
    }
}
