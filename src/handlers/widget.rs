//! Server-rendered widget pages.

use crate::{
    handlers::search::run_search,
    models::{Page, SearchQuery},
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

fn html_response(page: &Page) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.to_html())
}

/// Empty search form
#[api_v2_operation(
    summary = "Widget Page",
    description = "Returns the AQI search form with no message or results shown.",
    tags("Widget"),
    responses(
        (status = 200, description = "HTML page", content_type = "text/html")
    )
)]
pub async fn index() -> HttpResponse {
    html_response(&Page::new())
}

/// Search form submission
#[api_v2_operation(
    summary = "Widget Search Page",
    description = "Runs a city search and returns the widget page with either a message or the AQI results.",
    tags("Widget"),
    parameters(
        ("city" = Option<String>, Query, description = "City name (e.g., Paris)"),
    ),
    responses(
        (status = 200, description = "HTML page", content_type = "text/html"),
        (status = 503, description = "AQI backend not configured")
    )
)]
pub async fn search_page(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, Error> {
    let city = query.city.as_deref().unwrap_or_default();
    let page = run_search(&req, city).await?;
    Ok(html_response(&page))
}
