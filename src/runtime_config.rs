// =============================================================================
// Runtime Configuration — engine settings loaded at startup
// =============================================================================
//
// All fields carry `#[serde(default)]` so that adding new fields never breaks
// loading an older config file. Missing file => defaults with a warning.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Range;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_bind_addr() -> String {
    "0.0.0.0:8090".to_string()
}

fn default_provider_base_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level configuration for the Argus analysis server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Address the REST API listens on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the chart data provider (no trailing slash).
    #[serde(default = "default_provider_base_url")]
    pub provider_base_url: String,

    /// Per-request timeout for provider calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Range fetched when a request does not specify one.
    #[serde(default)]
    pub default_range: Range,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            provider_base_url: default_provider_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_range: Range::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "runtime config loaded");
        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = RuntimeConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8090");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.default_range, Range::OneYear);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "bind_addr": "127.0.0.1:9000" }"#).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.provider_base_url, default_provider_base_url());
        assert_eq!(config.default_range, Range::OneYear);
    }

    #[test]
    fn range_field_accepts_wire_strings() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "default_range": "6mo" }"#).unwrap();
        assert_eq!(config.default_range, Range::SixMonths);
    }
}
