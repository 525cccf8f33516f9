//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Reports that the widget server is up. Does not contact the AQI backend,
/// so a healthy widget may still show "Error contacting backend".
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the widget server in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
