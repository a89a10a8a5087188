//! Precipitation endpoint handler.
//!
//! Returns every precipitation reading of the trailing window, grouped by date.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::handlers::error_response;
use crate::logging::{generate_request_id, log_request_success};
use crate::report::{group_precipitation, PrecipitationReport};
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match load_precipitation(&state).await {
        Ok(report) => {
            log_request_success(ENDPOINT, &request_id, start_time, report.len());
            Json(report).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn load_precipitation(state: &AppState) -> Result<PrecipitationReport> {
    let since = state.config.dataset.trailing_start();

    let mut session = state.session().await?;
    let rows = session.precipitation_since(since).await?;
    session.close().await?;

    Ok(group_precipitation(rows))
}
