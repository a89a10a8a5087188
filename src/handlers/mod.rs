//! HTTP request handlers for the surfsup API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod summary;
pub mod tobs;

pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use summary::{range_summary_handler, start_summary_handler};
pub use tobs::tobs_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::SurfsUpError;
use crate::logging::log_request_error;

/// Turn a failed request into a JSON error response carrying the request id.
///
/// Date validation never produces an error, so anything that reaches here is
/// a server-side failure and is answered with 500.
pub(crate) fn error_response(
    error: SurfsUpError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
