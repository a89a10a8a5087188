//! Route table of the report API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    index_handler, precipitation_handler, range_summary_handler, start_summary_handler,
    stations_handler, tobs_handler,
};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the router serving every report endpoint
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(start_summary_handler))
        .route("/api/v1.0/:start/:end", get(range_summary_handler))
        .layer(
            ServiceBuilder::new()
                .layer(create_http_trace_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
