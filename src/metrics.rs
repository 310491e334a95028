//! Prometheus metrics registry and instruments.
//!
//! Operational metrics only. The admin visit counter lives in
//! [`crate::hits`] and is injected through application state.

use lazy_static::lazy_static;
use prometheus::core::Collector;
use prometheus::{HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirpy_http_requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("metric can be created");
    pub static ref HTTP_REQUEST_DURATION_SECONDS: prometheus::HistogramVec = prometheus::HistogramVec::new(
        HistogramOpts::new(
            "chirpy_http_request_duration_seconds",
            "HTTP request duration in seconds"
        ).buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["method", "endpoint"]
    ).expect("metric can be created");

    // Database Metrics
    pub static ref DB_QUERIES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirpy_db_queries_total", "Total number of database queries"),
        &["operation", "table"]
    ).expect("metric can be created");

    // Content Metrics
    pub static ref CHIRPS_CREATED_TOTAL: IntCounter = IntCounter::new(
        "chirpy_chirps_created_total",
        "Total number of chirps created"
    ).expect("metric can be created");
    pub static ref CHIRPS_CENSORED_TOTAL: IntCounter = IntCounter::new(
        "chirpy_chirps_censored_total",
        "Total number of chirps that had at least one word masked"
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirpy_errors_total", "Total number of errors"),
        &["error_type"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
///
/// Safe to call more than once; repeat registrations are ignored.
pub fn init_metrics() {
    register("HTTP_REQUESTS_TOTAL", Box::new(HTTP_REQUESTS_TOTAL.clone()));
    register(
        "HTTP_REQUEST_DURATION_SECONDS",
        Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()),
    );
    register("DB_QUERIES_TOTAL", Box::new(DB_QUERIES_TOTAL.clone()));
    register("CHIRPS_CREATED_TOTAL", Box::new(CHIRPS_CREATED_TOTAL.clone()));
    register("CHIRPS_CENSORED_TOTAL", Box::new(CHIRPS_CENSORED_TOTAL.clone()));
    register("ERRORS_TOTAL", Box::new(ERRORS_TOTAL.clone()));

    tracing::info!("Metrics registry initialized");
}

fn register(name: &str, collector: Box<dyn Collector>) {
    match REGISTRY.register(collector) {
        Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
        Err(error) => tracing::warn!(metric = name, %error, "Failed to register metric"),
    }
}

/// Count a finished request and record its latency
pub fn observe_request(method: &str, endpoint: &str, status: u16, elapsed: std::time::Duration) {
    let status = status.to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, endpoint])
        .observe(elapsed.as_secs_f64());
}
