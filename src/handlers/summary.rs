//! Temperature summary endpoint handlers.
//!
//! `/api/v1.0/:start` summarizes every observation from `start` to the end of
//! the dataset, `/api/v1.0/:start/:end` the inclusive window between the two.
//! Malformed or out-of-range dates are answered with an explanatory text
//! rather than an error status, including segments that are not valid UTF-8.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::handlers::error_response;
use crate::logging::{generate_request_id, log_request_success};
use crate::report::{
    check_range, check_start, summary_text, SummaryRequest, RANGE_FORMAT_ERROR, START_FORMAT_ERROR,
};
use crate::state::AppState;

const START_ENDPOINT: &str = "/api/v1.0/:start";
const RANGE_ENDPOINT: &str = "/api/v1.0/:start/:end";

/// Handle GET /api/v1.0/:start requests
pub async fn start_summary_handler(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let Path(start) = match path {
        Ok(path) => path,
        Err(rejection) => {
            debug!(
                endpoint = START_ENDPOINT,
                request_id = %request_id,
                rejection = %rejection,
                "Unreadable date segment"
            );
            return Html(START_FORMAT_ERROR).into_response();
        }
    };

    debug!(
        endpoint = START_ENDPOINT,
        request_id = %request_id,
        start = %start,
        "Processing temperature summary request"
    );

    let request = check_start(&start, &state.window());
    respond(&state, request, START_ENDPOINT, &request_id, start_time, &start).await
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn range_summary_handler(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    let Path((start, end)) = match path {
        Ok(path) => path,
        Err(rejection) => {
            debug!(
                endpoint = RANGE_ENDPOINT,
                request_id = %request_id,
                rejection = %rejection,
                "Unreadable date segment"
            );
            return Html(RANGE_FORMAT_ERROR).into_response();
        }
    };

    debug!(
        endpoint = RANGE_ENDPOINT,
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing temperature summary request"
    );

    let request = check_range(&start, &end, &state.window());
    let params = format!("start={}, end={}", start, end);
    respond(&state, request, RANGE_ENDPOINT, &request_id, start_time, &params).await
}

async fn respond(
    state: &AppState,
    request: SummaryRequest,
    endpoint: &str,
    request_id: &str,
    start_time: Instant,
    params: &str,
) -> Response {
    match request {
        SummaryRequest::Rejected(message) => {
            debug!(
                endpoint = endpoint,
                request_id = %request_id,
                params = params,
                "Rejected summary request"
            );
            Html(message).into_response()
        }
        SummaryRequest::Valid { start, end } => match summarize(state, start, end).await {
            Ok(text) => {
                log_request_success(endpoint, request_id, start_time, 1);
                Html(text).into_response()
            }
            Err(error) => error_response(error, endpoint, request_id, Some(params)),
        },
    }
}

async fn summarize(state: &AppState, start: NaiveDate, end: Option<NaiveDate>) -> Result<String> {
    let mut session = state.session().await?;
    let stats = session.temperature_stats(start, end).await?;
    session.close().await?;

    let to = end.unwrap_or(state.config.dataset.latest_date);
    Ok(summary_text(start, to, stats))
}
