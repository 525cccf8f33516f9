//! Client for the AQI backend's `/aqi/{city}` endpoint.

use crate::error::AppError;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;
use url::Url;

/// Why a backend call produced no usable JSON body
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("request to AQI backend failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("AQI backend returned {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("AQI backend returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Source of AQI payloads for a city
pub trait AqiBackend {
    /// Base URL shown to users when the backend is unreachable
    fn base_url(&self) -> &str;

    /// Fetch the raw JSON body for `city`. Non-2xx responses are errors.
    fn fetch(&self, city: &str) -> impl Future<Output = Result<Value, BackendError>> + Send;
}

/// reqwest-backed [`AqiBackend`]. One GET per call, no retries.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    display_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let invalid = |reason: String| AppError::InvalidBackendUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("aqi-widget/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            display_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `<base>/aqi/{city}` with the city percent-encoded as one path segment.
    pub fn endpoint(&self, city: &str) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidBaseUrl(self.display_url.clone()))?
            .pop_if_empty()
            .push("aqi")
            .push(city);
        Ok(url)
    }
}

impl AqiBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.display_url
    }

    async fn fetch(&self, city: &str) -> Result<Value, BackendError> {
        let url = self.endpoint(city)?;
        tracing::debug!(url = %url, "Querying AQI backend");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(BackendError::Transport)?;

        // reqwest exposes only the canonical reason phrase
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.json::<Value>().await.map_err(BackendError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_city() {
        let backend = HttpBackend::new("http://localhost:8080").unwrap();

        assert_eq!(
            backend.endpoint("New York").unwrap().as_str(),
            "http://localhost:8080/aqi/New%20York"
        );
        assert_eq!(
            backend.endpoint("a/b?c#d").unwrap().as_str(),
            "http://localhost:8080/aqi/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let backend = HttpBackend::new("http://gateway.local/air/").unwrap();
        assert_eq!(
            backend.endpoint("Paris").unwrap().as_str(),
            "http://gateway.local/air/aqi/Paris"
        );
        assert_eq!(backend.base_url(), "http://gateway.local/air");
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(AppError::InvalidBackendUrl { .. })
        ));
        assert!(matches!(
            HttpBackend::new("mailto:ops@example.com"),
            Err(AppError::InvalidBackendUrl { .. })
        ));
    }
}
