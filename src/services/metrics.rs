//! Prometheus metrics for the widget server.

use crate::services::search::SearchOutcome;
use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

pub const BUILD_COMMIT: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

pub const BUILD_TIMESTAMP: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => "unknown",
};

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub searches_total: CounterVec,
    pub backend_request_duration_seconds: HistogramVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        let searches_total = CounterVec::new(
            Opts::new("aqi_searches_total", "City searches by outcome"),
            &["outcome"],
        )?;

        // Backend calls have no timeout, hence the long tail.
        let backend_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "aqi_backend_request_duration_seconds",
                "AQI backend round trip per search in seconds",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
            &["outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(searches_total.clone()))?;
        registry.register(Box::new(backend_request_duration_seconds.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[env!("CARGO_PKG_VERSION"), BUILD_COMMIT, BUILD_TIMESTAMP])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            searches_total,
            backend_request_duration_seconds,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        // Scrapes would otherwise dominate the series
        if route == "/api/metrics" {
            return;
        }

        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, status.as_str(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Count a search; its duration is observed only when the backend was
    /// contacted.
    pub fn record_search(&self, outcome: SearchOutcome, duration: Duration) {
        let label = outcome.as_str();
        self.searches_total.with_label_values(&[label]).inc();

        if outcome != SearchOutcome::EmptyInput {
            self.backend_request_duration_seconds
                .with_label_values(&[label])
                .observe(duration.as_secs_f64());
        }
    }

    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        encoder.encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_search_outcomes() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_search(SearchOutcome::Rendered, Duration::from_millis(120));
        metrics.record_search(SearchOutcome::Rendered, Duration::from_millis(80));
        metrics.record_search(SearchOutcome::NotFound, Duration::from_millis(40));

        assert_eq!(
            metrics.searches_total.with_label_values(&["rendered"]).get(),
            2.0
        );
        assert_eq!(
            metrics.searches_total.with_label_values(&["not_found"]).get(),
            1.0
        );

        let output = metrics.render().unwrap();
        assert!(output.contains("aqi_searches_total"));
        assert!(output.contains(
            r#"aqi_backend_request_duration_seconds_count{outcome="rendered"} 2"#
        ));
        assert!(!output.contains("aqi_search_duration_seconds"));
    }

    #[test]
    fn test_empty_input_has_no_backend_latency() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_search(SearchOutcome::EmptyInput, Duration::from_millis(1));

        assert_eq!(
            metrics.searches_total.with_label_values(&["empty_input"]).get(),
            1.0
        );
        assert_eq!(
            metrics
                .backend_request_duration_seconds
                .with_label_values(&["empty_input"])
                .get_sample_count(),
            0
        );
    }

    #[test]
    fn test_metrics_endpoint_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", "/api/metrics", 200, Duration::from_millis(1));
        metrics.record_request("GET", "/search", 200, Duration::from_millis(1));

        assert_eq!(
            metrics
                .http_requests_total
                .with_label_values(&["GET", "200", "/api/metrics"])
                .get(),
            0.0
        );
        assert_eq!(
            metrics
                .http_requests_total
                .with_label_values(&["GET", "200", "/search"])
                .get(),
            1.0
        );
    }
}
