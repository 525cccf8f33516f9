//! Request metadata used in request logs.

use actix_web::HttpRequest;

/// Client-facing details of an incoming request
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub method: String,
    pub path: String,
}

impl ClientInfo {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            ip_address: extract_client_ip(req),
            user_agent: extract_user_agent(req),
            method: req.method().to_string(),
            path: req.path().to_string(),
        }
    }
}

/// Client IP, preferring proxy headers over the socket peer address.
///
/// Only the first hop of `X-Forwarded-For` is used.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    for header_name in ["X-Forwarded-For", "X-Real-IP"] {
        let first_hop = req
            .headers()
            .get(header_name)
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = first_hop {
            return ip.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("User-Agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}
