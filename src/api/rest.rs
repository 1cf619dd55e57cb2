// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`. The three analysis endpoints fetch a
// fresh daily series from the provider and run a pure computation over it;
// nothing is cached or retried here.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::analysis::macd::{analyze_macd, MacdParams, MacdReport};
use crate::analysis::moving_averages::{analyze_moving_averages, MovingAverageReport};
use crate::analysis::rsi::{analyze_rsi, RsiReport};
use crate::app_state::AppState;
use crate::error::AnalysisError;
use crate::types::Range;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/v1/analysis/:ticker/moving-averages",
            get(moving_averages),
        )
        .route("/api/v1/analysis/:ticker/rsi", get(rsi))
        .route("/api/v1/analysis/:ticker/macd", get(macd))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    server_time: i64,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Moving averages
// =============================================================================

fn default_short_period() -> usize {
    50
}

fn default_long_period() -> usize {
    200
}

#[derive(Debug, Deserialize)]
struct MovingAverageQuery {
    #[serde(default = "default_short_period")]
    short_period: usize,
    #[serde(default = "default_long_period")]
    long_period: usize,
    range: Option<Range>,
}

#[derive(Serialize)]
struct TickerReport<T: Serialize> {
    ticker: String,
    #[serde(flatten)]
    report: T,
}

async fn moving_averages(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<MovingAverageQuery>,
) -> Result<Json<TickerReport<MovingAverageReport>>, AnalysisError> {
    let range = query.range.unwrap_or(state.config.default_range);
    info!(
        %ticker,
        short_period = query.short_period,
        long_period = query.long_period,
        %range,
        "moving-average analysis requested"
    );

    let series = state.provider.fetch_series(&ticker, range).await?;
    let report = analyze_moving_averages(&series, query.short_period, query.long_period)?;

    Ok(Json(TickerReport { ticker, report }))
}

// =============================================================================
// RSI
// =============================================================================

fn default_rsi_period() -> usize {
    14
}

#[derive(Debug, Deserialize)]
struct RsiQuery {
    #[serde(default = "default_rsi_period")]
    period: usize,
    range: Option<Range>,
}

async fn rsi(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<RsiQuery>,
) -> Result<Json<TickerReport<RsiReport>>, AnalysisError> {
    let range = query.range.unwrap_or(state.config.default_range);
    info!(%ticker, period = query.period, %range, "RSI analysis requested");

    let series = state.provider.fetch_series(&ticker, range).await?;
    let report = analyze_rsi(&series, query.period)?;

    Ok(Json(TickerReport { ticker, report }))
}

// =============================================================================
// MACD
// =============================================================================

fn default_fast_period() -> usize {
    12
}

fn default_slow_period() -> usize {
    26
}

fn default_signal_period() -> usize {
    9
}

#[derive(Debug, Deserialize)]
struct MacdQuery {
    #[serde(default = "default_fast_period")]
    fast_period: usize,
    #[serde(default = "default_slow_period")]
    slow_period: usize,
    #[serde(default = "default_signal_period")]
    signal_period: usize,
    range: Option<Range>,
}

async fn macd(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<MacdQuery>,
) -> Result<Json<TickerReport<MacdReport>>, AnalysisError> {
    let range = query.range.unwrap_or(state.config.default_range);
    info!(
        %ticker,
        fast = query.fast_period,
        slow = query.slow_period,
        signal = query.signal_period,
        %range,
        "MACD analysis requested"
    );

    let series = state.provider.fetch_series(&ticker, range).await?;
    let report = analyze_macd(
        &series,
        MacdParams {
            fast: query.fast_period,
            slow: query.slow_period,
            signal: query.signal_period,
        },
    )?;

    Ok(Json(TickerReport { ticker, report }))
}
