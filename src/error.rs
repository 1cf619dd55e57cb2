// =============================================================================
// Error model — closed variant set shared by the engine and the REST layer
// =============================================================================
//
// Three kinds only:
//   InvalidSeries   — malformed input (empty, or dates not strictly ascending)
//   Computation     — an indicator cannot proceed (zero-length series)
//   DataUnavailable — the upstream chart provider failed; propagated unchanged
//
// Undersized windows are NOT errors: the affected report fields are simply
// absent (`None`) while the rest of the report stays populated.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("computation failed: {0}")]
    Computation(String),

    #[error("data unavailable: {0}")]
    DataUnavailable(String),
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidSeries(_) | Self::Computation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::DataUnavailable(_) => StatusCode::BAD_GATEWAY,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
