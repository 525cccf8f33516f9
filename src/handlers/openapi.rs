//! OpenAPI specification, shared state and app factory.

use crate::{
    config::{MetricsConfig, SecurityHeadersConfig, WidgetConfig},
    error::AppError,
    handlers::{api_search, get_metrics, health, index, search_page, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders},
    services::{AppMetrics, HttpBackend},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification for the widget server
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "AQI Widget".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Air quality search widget.\n\n\
                `GET /search?city=<name>` renders the widget page; `GET /api/search?city=<name>` \
                returns the same widget state as JSON. Each search makes one request to the AQI \
                backend at `<AQI_BACKEND_URL>/aqi/{city}`.\n\
                \n\
                **Outcomes** are reported in the `message` field, never as HTTP errors:\n\
                - blank city: `Please enter a city name.` (the backend is not contacted)\n\
                - backend unreachable or unreadable: `Error contacting backend. ...`\n\
                - backend non-2xx: `Server returned <code> <reason>`\n\
                - backend reports an error status: `City not found or API returned error.`\n\
                - no `data` in the payload: `No data returned for this city.`\n\
                \n\
                On success `results` holds the AQI, its band (Good through Hazardous), the \
                advisory, the pollutant readings and the observation time."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// State shared by every worker's app instance
#[derive(Clone)]
pub struct AppState {
    pub widget: WidgetConfig,
    pub security: SecurityHeadersConfig,
    pub backend: web::Data<HttpBackend>,
    pub metrics: web::Data<AppMetrics>,
    pub metrics_config: web::Data<MetricsConfig>,
}

impl AppState {
    /// Build state for `widget`, reading the remaining settings from the
    /// environment.
    pub fn new(widget: WidgetConfig) -> Result<Self, AppError> {
        Self::with_configs(widget, SecurityHeadersConfig::from_env(), MetricsConfig::from_env())
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(WidgetConfig::from_env())
    }

    pub fn with_configs(
        widget: WidgetConfig,
        security: SecurityHeadersConfig,
        metrics_config: MetricsConfig,
    ) -> Result<Self, AppError> {
        let backend = HttpBackend::new(&widget.backend_url)?;
        let metrics = AppMetrics::new()?;

        Ok(Self {
            widget,
            security,
            backend: web::Data::new(backend),
            metrics: web::Data::new(metrics),
            metrics_config: web::Data::new(metrics_config),
        })
    }
}

/// Creates the widget app with its middleware stack and routes
///
/// Used by `main` for each worker and directly by the integration tests.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(SecurityHeaders::new(&state.security))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(state.backend)
        .app_data(state.metrics)
        .app_data(state.metrics_config)
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/search").route(web::get().to(search_page)))
        .service(web::resource("/api/search").route(web::get().to(api_search)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
