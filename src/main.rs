use actix_web::HttpServer;
use aqi_widget::{AppError, AppState, LoggingConfig, create_app};

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    LoggingConfig::from_env().init()?;

    let state = AppState::from_env()?;
    let (host, port) = state.widget.bind_address();

    tracing::info!(
        host = %host,
        port,
        backend = %state.widget.backend_url,
        version = env!("CARGO_PKG_VERSION"),
        "Starting AQI widget"
    );

    HttpServer::new(move || create_app(state.clone()))
        .bind((host.as_str(), port))?
        .run()
        .await?;

    tracing::info!("AQI widget stopped");
    Ok(())
}
