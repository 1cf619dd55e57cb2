// =============================================================================
// Argus TA Server — Main Entry Point
// =============================================================================
//
// Stateless technical-indicator analysis over daily price bars: moving
// averages, RSI, and MACD, each exposed as a REST endpoint. Price data comes
// from the chart provider per request; nothing persists between calls.

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod api;
mod app_state;
mod error;
mod indicators;
mod provider;
mod runtime_config;
mod series;
mod types;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::provider::yahoo::YahooProvider;
use crate::runtime_config::RuntimeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = RuntimeConfig::load("runtime_config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    if let Ok(addr) = std::env::var("ARGUS_BIND") {
        config.bind_addr = addr;
    }

    info!(
        bind_addr = %config.bind_addr,
        provider = %config.provider_base_url,
        default_range = %config.default_range,
        "Argus TA server starting"
    );

    // ── 2. Build provider & shared state ─────────────────────────────────
    let provider = Arc::new(YahooProvider::new(
        config.provider_base_url.clone(),
        config.request_timeout_secs,
    )?);
    let state = Arc::new(AppState::new(config.clone(), provider));

    // ── 3. Serve ─────────────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "REST API listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
