//! Metrics configuration.

use std::env;

/// Whether `/api/metrics` serves the Prometheus registry
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Load configuration from `METRICS_ENABLED`, defaulting to enabled
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(true);

        Self { enabled }
    }
}
