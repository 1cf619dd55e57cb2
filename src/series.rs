// =============================================================================
// Price series — validated, date-ordered daily OHLCV bars
// =============================================================================
//
// A `Series` is constructed fresh per request from the provider and owned by
// the caller for the duration of one analysis. Indicators read it, never
// mutate it. Validation happens once at load time:
//   - at least one bar
//   - dates strictly ascending (non-trading days are simply absent)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One trading day's OHLCV record. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Ordered sequence of daily bars, strictly ascending by date.
#[derive(Debug, Clone)]
pub struct Series {
    pub(crate) bars: Vec<Bar>,
}

impl Series {
    /// Validate and wrap a bar sequence.
    ///
    /// # Errors
    /// `InvalidSeries` when `bars` is empty or any adjacent pair of dates is
    /// not strictly ascending.
    pub fn load(bars: Vec<Bar>) -> Result<Self, AnalysisError> {
        if bars.is_empty() {
            return Err(AnalysisError::InvalidSeries(
                "series must contain at least one bar".to_string(),
            ));
        }

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AnalysisError::InvalidSeries(format!(
                    "bars not strictly ascending by date: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Most recent bar. `None` only for the (unconstructible-via-`load`)
    /// empty series.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Closing prices in bar order (oldest first).
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The trailing `count` bars (all bars when `count >= len`), oldest first.
    pub fn last_bars(&self, count: usize) -> &[Bar] {
        let start = self.bars.len().saturating_sub(count);
        &self.bars[start..]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn load_rejects_empty() {
        let err = Series::load(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn load_rejects_unsorted_dates() {
        let bars = vec![bar(2, 10.0), bar(1, 11.0)];
        let err = Series::load(bars).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries(_)));
    }

    #[test]
    fn load_rejects_duplicate_dates() {
        let bars = vec![bar(1, 10.0), bar(1, 11.0)];
        assert!(Series::load(bars).is_err());
    }

    #[test]
    fn gaps_between_dates_are_fine() {
        // Weekend gap: Friday the 5th straight to Monday the 8th.
        let bars = vec![bar(4, 10.0), bar(5, 11.0), bar(8, 12.0)];
        let series = Series::load(bars).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn last_bars_clamps_to_length() {
        let series = Series::load(vec![bar(1, 1.0), bar(2, 2.0), bar(3, 3.0)]).unwrap();
        assert_eq!(series.last_bars(2).len(), 2);
        assert_eq!(series.last_bars(2)[0].close, 2.0);
        assert_eq!(series.last_bars(10).len(), 3);
        assert_eq!(series.last().unwrap().close, 3.0);
    }
}
