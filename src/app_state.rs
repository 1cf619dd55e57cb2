// =============================================================================
// Application State — shared across request handlers via Arc
// =============================================================================
//
// The engine is stateless between requests: every analysis fetches a fresh
// Series and discards it when the report is built. AppState therefore only
// ties together the immutable startup configuration and the provider.

use std::sync::Arc;

use crate::provider::SeriesProvider;
use crate::runtime_config::RuntimeConfig;

pub struct AppState {
    pub config: RuntimeConfig,
    pub provider: Arc<dyn SeriesProvider>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, provider: Arc<dyn SeriesProvider>) -> Self {
        Self { config, provider }
    }
}
