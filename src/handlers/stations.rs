//! Station listing endpoint handler.

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
use crate::report::{station_entries, StationEntry};
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match load_stations(&state).await {
        Ok(entries) => {
            log_request_success(ENDPOINT, &request_id, start_time, entries.len());
            Json(entries).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn load_stations(state: &AppState) -> Result<Vec<StationEntry>> {
    let mut session = state.session().await?;
    let stations = session.stations().await?;
    session.close().await?;

    Ok(station_entries(stations))
}
