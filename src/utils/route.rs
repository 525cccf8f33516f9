//! Route label extraction for metrics.

use actix_web::HttpRequest;

/// Label for the route that served a request.
///
/// Uses the registered resource pattern so that arbitrary unmatched paths
/// do not each create a new metric series.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| "unmatched".to_string())
}
