//! JSON search endpoint and the search runner shared with the HTML pages.

use crate::{
    middleware::RequestId,
    models::{Page, SearchQuery},
    services::{AppMetrics, HttpBackend, search_city},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;
use std::time::Instant;

/// Run the search for `raw_city` against the configured backend.
///
/// Widget-level failures (blank input, unreachable backend, unknown city)
/// are reported through the page message, never as an HTTP error.
pub async fn run_search(req: &HttpRequest, raw_city: &str) -> Result<Page, Error> {
    let Some(backend) = req.app_data::<web::Data<HttpBackend>>() else {
        return Err(actix_web::error::ErrorServiceUnavailable(
            "AQI backend is not configured",
        ));
    };

    let started = Instant::now();
    let mut page = Page::new();
    let outcome = search_city(backend.get_ref(), raw_city, &mut page).await;

    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.record_search(outcome, started.elapsed());
    }

    tracing::info!(
        request_id = %RequestId::of(req),
        city = raw_city.trim(),
        outcome = outcome.as_str(),
        "Search completed"
    );

    Ok(page)
}

/// Search endpoint returning the page model as JSON
#[api_v2_operation(
    summary = "City AQI Search",
    description = "Queries the AQI backend for a city and returns the widget state: the message shown to the user, or the rendered results (AQI, band, advisory, pollutant readings, last update time).",
    tags("Search"),
    parameters(
        ("city" = Option<String>, Query, description = "City name (e.g., Paris)"),
    ),
    responses(
        (status = 200, description = "Widget state after the search", body = Page),
        (status = 503, description = "AQI backend not configured")
    )
)]
pub async fn api_search(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> Result<web::Json<Page>, Error> {
    let city = query.city.as_deref().unwrap_or_default();
    let page = run_search(&req, city).await?;
    Ok(web::Json(page))
}
