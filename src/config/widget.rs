//! Widget server and backend location.

use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Where the widget listens and which AQI backend it queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL of the AQI backend; requests go to `<base>/aqi/{city}`.
    pub backend_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let backend_url = env::var("AQI_BACKEND_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let host = env::var("WIDGET_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = env::var("WIDGET_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            backend_url,
            host,
            port,
        }
    }

    /// Point the widget at a different backend, keeping the listen address.
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
