//! Security headers configuration.

use actix_web::http::header::{HeaderName, HeaderValue};
use std::env;

/// The widget page ships an inline stylesheet and submits its form to itself.
pub const DEFAULT_CSP: &str =
    "default-src 'none'; style-src 'unsafe-inline'; form-action 'self'; frame-ancestors 'none'";

/// Configuration for security headers middleware
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    /// `None` disables the Content-Security-Policy header
    pub csp_directives: Option<String>,
    pub frame_options: String,
    pub content_type_options: bool,
    pub referrer_policy: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp_directives: Some(DEFAULT_CSP.to_string()),
            frame_options: "DENY".to_string(),
            content_type_options: true,
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let csp_enabled = env::var("SECURITY_CSP_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let csp_directives = csp_enabled
            .then(|| env::var("CSP_DIRECTIVES").unwrap_or_else(|_| DEFAULT_CSP.to_string()));

        let frame_options = env::var("X_FRAME_OPTIONS").unwrap_or_else(|_| "DENY".to_string());

        let content_type_options = env::var("X_CONTENT_TYPE_OPTIONS")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let referrer_policy =
            env::var("REFERRER_POLICY").unwrap_or_else(|_| "no-referrer".to_string());

        Self {
            csp_directives,
            frame_options,
            content_type_options,
            referrer_policy,
        }
    }

    /// Resolve the configured values into response headers.
    ///
    /// Values that are not valid header text are dropped with a warning.
    pub fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let mut headers = Vec::new();

        if self.content_type_options {
            headers.push((
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ));
        }

        let configured = [
            ("x-frame-options", Some(self.frame_options.as_str())),
            ("referrer-policy", Some(self.referrer_policy.as_str())),
            ("content-security-policy", self.csp_directives.as_deref()),
        ];

        for (name, value) in configured {
            let Some(value) = value else { continue };
            match HeaderValue::from_str(value) {
                Ok(value) => headers.push((HeaderName::from_static(name), value)),
                Err(_) => tracing::warn!(header = name, "Ignoring invalid security header value"),
            }
        }

        headers
    }
}
