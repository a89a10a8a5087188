//! Logging utilities for the surfsup server.
//!
//! This module provides structured logging functionality to make logs more
//! searchable, analyzable, and useful for production deployments.

use std::time::Instant;
use tracing::{error, info, warn, Level};

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::dates::DateWindow;
use crate::error::SurfsUpError;
use crate::store::StoreStats;

/// Creates the tracing layer for HTTP request/response logging
pub fn create_http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    let response_formatter = DefaultOnResponse::new()
        .level(Level::DEBUG)
        .latency_unit(LatencyUnit::Micros);

    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(response_formatter)
}

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

/// Log the shape of the dataset found at startup, warning when the observed
/// dates disagree with the configured window
pub fn log_store_stats(database: &str, stats: &StoreStats, window: &DateWindow) {
    info!(
        operation = "store_probe",
        database = database,
        station_count = stats.station_count,
        measurement_count = stats.measurement_count,
        first_date = ?stats.first_date,
        last_date = ?stats.last_date,
        "Measurement store opened"
    );

    if stats.first_date != Some(window.earliest) || stats.last_date != Some(window.latest) {
        warn!(
            configured_earliest = %window.earliest,
            configured_latest = %window.latest,
            first_date = ?stats.first_date,
            last_date = ?stats.last_date,
            "Observed date range differs from the configured dataset window"
        );
    }
}

/// Log the completion of a request
pub fn log_request_success(endpoint: &str, request_id: &str, start_time: Instant, items: usize) {
    info!(
        endpoint = endpoint,
        request_id = request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        items = items,
        "Request successful"
    );
}

/// Log an error that occurred during request processing
pub fn log_request_error(
    error: &SurfsUpError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) {
    error!(
        error = %error,
        endpoint = endpoint,
        request_id = request_id,
        params = params.unwrap_or("none"),
        "Request processing error"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_request_id() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        let stats = StoreStats {
            station_count: 9,
            measurement_count: 19550,
            first_date: NaiveDate::from_ymd_opt(2010, 1, 1),
            last_date: NaiveDate::from_ymd_opt(2017, 8, 23),
        };
        log_store_stats("hawaii.sqlite", &stats, &DateWindow::default());
        log_request_success("/api/v1.0/stations", "abc", Instant::now(), 9);
        log_request_error(
            &SurfsUpError::Server {
                message: "boom".to_string(),
            },
            "/api/v1.0/tobs",
            "abc",
            None,
        );
    }
}
