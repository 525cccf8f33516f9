//! Process-level error type.

use thiserror::Error;

/// Failures that prevent the widget server from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid backend URL `{url}`: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
