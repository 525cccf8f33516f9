//! AQI Widget - a server-rendered air quality search page
//!
//! A user enters a city; the widget asks the AQI backend for
//! `/aqi/{city}`, classifies the AQI into one of six bands and renders the
//! pollutant readings. Every failure is reported as a message on the page.
//!
//! ## Architecture
//!
//! - `models/` - AQI bands, payload normalization and the page model
//! - `services/` - backend client, search flow, renderer, metrics
//! - `handlers/` - HTML and JSON endpoints and the app factory
//! - `middleware/` - security headers, request IDs, metrics collection
//! - `config/` - environment-driven configuration
//! - `utils/` - request metadata, route labels, HTML escaping
//!
//! ## Quick Start
//!
//! ```no_run
//! use aqi_widget::{create_app, AppState};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::from_env()?;
//!     let bind = state.widget.bind_address();
//!     HttpServer::new(move || create_app(state.clone())).bind(bind)?.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{LogFormat, LoggingConfig, MetricsConfig, SecurityHeadersConfig, WidgetConfig};
pub use error::AppError;
pub use handlers::{
    AppState, api_search, create_app, create_openapi_spec, get_metrics, health, index,
    run_search, search_page, version,
};
pub use middleware::{MetricsMiddleware, RequestId, RequestIdMiddleware, SecurityHeaders};
pub use models::{
    AqiCategory, AqiReading, HealthResponse, Page, PayloadVerdict, PollutantReading, QueryResult,
    ResultsPanel, SearchQuery, VersionResponse,
};
pub use services::{
    AppMetrics, AqiBackend, BackendError, HttpBackend, SearchOutcome, render_results,
    search_city,
};
