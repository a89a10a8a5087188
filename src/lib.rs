//! # surfsup
//!
//! A read-only HTTP report server over a historical climate observation
//! dataset: daily precipitation and temperature readings per station.
//!
//! ## Endpoints
//!
//! - `/api/v1.0/precipitation`: trailing-year precipitation grouped by date
//! - `/api/v1.0/stations`: every recording station
//! - `/api/v1.0/tobs`: trailing-year temperatures of the most active station
//! - `/api/v1.0/<start>` and `/api/v1.0/<start>/<end>`: min, max and average
//!   observed temperature over a date window
//!
//! ## Architecture
//!
//! - **Store Layer**: read-only SQLite sessions, one per request
//! - **Report Layer**: date validation and shaping of rows into responses
//! - **API Layer**: axum handlers and the route table

pub mod config;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod report;
pub mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{Result, SurfsUpError};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_request_error,
    log_request_success, log_store_stats,
};
pub use router::build_router;
pub use state::AppState;
pub use store::{Session, Store};
