//! Configuration loading and representation.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use storefront_observability::LogFormat;

pub const PROGRAM_NAME_VAR: &str = "STOREFRONT_PROGRAM_NAME";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";
pub const STORE_LATENCY_VAR: &str = "STOREFRONT_STORE_LATENCY_MS";

/// Process-level settings for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    /// Label printed in front of reported results.
    pub program_name: String,
    pub log_format: LogFormat,
    /// Simulated round-trip applied by the in-memory stores.
    pub store_latency: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            program_name: "storefront".to_string(),
            log_format: LogFormat::Pretty,
            store_latency: Duration::ZERO,
        }
    }
}

impl PipelineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unparsable values keep their default
    /// and are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup(PROGRAM_NAME_VAR).filter(|n| !n.trim().is_empty()) {
            config.program_name = name;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => warn!(var = LOG_FORMAT_VAR, error = %e, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(STORE_LATENCY_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.store_latency = Duration::from_millis(ms),
                Err(e) => warn!(var = STORE_LATENCY_VAR, value = %raw, error = %e, "ignoring invalid value"),
            }
        }

        config
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_store_latency(mut self, latency: Duration) -> Self {
        self.store_latency = latency;
        self
    }
}
