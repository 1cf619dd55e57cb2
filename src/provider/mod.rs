// =============================================================================
// Series Provider — the engine's only external collaborator
// =============================================================================
//
// An implementation turns (ticker, range) into a validated daily-bar Series.
// Failures surface as `DataUnavailable` and are propagated unchanged; retries
// are the provider's business, never the engine's (this crate retries
// nothing).

pub mod yahoo;

use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::series::Series;
use crate::types::Range;

/// Upstream source of daily price bars.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch the daily bars for `ticker` covering `range`, ascending by date.
    async fn fetch_series(&self, ticker: &str, range: Range) -> Result<Series, AnalysisError>;
}
