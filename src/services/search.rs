//! The search flow: validate input, query the backend, render or explain.

use crate::{
    models::{Page, PayloadVerdict},
    services::{
        backend::{AqiBackend, BackendError},
        render::render_results,
    },
};
pub const PROMPT_MESSAGE: &str = "Please enter a city name.";
pub const NOT_FOUND_MESSAGE: &str = "City not found or API returned error.";
pub const NO_DATA_MESSAGE: &str = "No data returned for this city.";

pub fn transport_message(base_url: &str) -> String {
    format!("Error contacting backend. Make sure backend is running on {base_url}")
}

pub fn status_message(code: u16, reason: &str) -> String {
    format!("Server returned {code} {reason}").trim_end().to_string()
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyInput,
    TransportError,
    HttpError,
    NotFound,
    NoData,
    Rendered,
}

impl SearchOutcome {
    pub const ALL: [SearchOutcome; 6] = [
        Self::EmptyInput,
        Self::TransportError,
        Self::HttpError,
        Self::NotFound,
        Self::NoData,
        Self::Rendered,
    ];

    /// Metric label
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::TransportError => "transport_error",
            Self::HttpError => "http_error",
            Self::NotFound => "not_found",
            Self::NoData => "no_data",
            Self::Rendered => "rendered",
        }
    }
}

/// Run one search for the city typed by the user and write the outcome
/// into `page`.
///
/// Blank input is answered with a prompt without contacting the backend.
/// Every other failure ends up as a message on the page.
pub async fn search_city<B: AqiBackend>(
    backend: &B,
    raw_city: &str,
    page: &mut Page,
) -> SearchOutcome {
    page.begin_search(raw_city);

    let city = raw_city.trim();
    if city.is_empty() {
        page.show_message(PROMPT_MESSAGE);
        return SearchOutcome::EmptyInput;
    }

    let body = match backend.fetch(city).await {
        Ok(body) => body,
        Err(BackendError::Status { code, reason }) => {
            tracing::warn!(city, code, "AQI backend returned an error status");
            page.show_message(status_message(code, &reason));
            return SearchOutcome::HttpError;
        }
        Err(e) => {
            tracing::error!(city, error = %e, "Failed to contact AQI backend");
            page.show_message(transport_message(backend.base_url()));
            return SearchOutcome::TransportError;
        }
    };

    match PayloadVerdict::of(&body) {
        PayloadVerdict::Rejected => {
            tracing::debug!(city, "AQI backend rejected the city");
            page.show_message(NOT_FOUND_MESSAGE);
            SearchOutcome::NotFound
        }
        PayloadVerdict::NoData => {
            page.show_message(NO_DATA_MESSAGE);
            SearchOutcome::NoData
        }
        PayloadVerdict::Data(data) => {
            render_results(page, city, data);
            SearchOutcome::Rendered
        }
    }
}
