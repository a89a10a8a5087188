//! Temperature observation endpoint handler.
//!
//! Returns the trailing window of observed temperatures for the station with
//! the most measurements. When several stations share the highest count, the
//! first one the store returns wins.

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
use crate::report::{temperature_entries, TemperatureEntry};
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing temperature observation request"
    );

    match load_observations(&state).await {
        Ok(entries) => {
            log_request_success(ENDPOINT, &request_id, start_time, entries.len());
            Json(entries).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn load_observations(state: &AppState) -> Result<Vec<TemperatureEntry>> {
    let since = state.config.dataset.trailing_start();

    let mut session = state.session().await?;
    let most_active = session.most_active_station().await?;
    debug!(
        station = %most_active.station,
        measurements = most_active.count,
        "Selected most active station"
    );
    let rows = session.temperatures_since(&most_active.station, since).await?;
    session.close().await?;

    Ok(temperature_entries(rows))
}
