//! surfsup - A read-only climate report server
//!
//! This is the main entry point for the surfsup application.

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use surfsup::{
    build_router, init_tracing, log_store_stats, AppState, Config, Result, Store, SurfsUpError,
};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, database_path) = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting surfsup v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Opening measurement store: {:?}", database_path);

    let store = Store::open(&database_path).map_err(|e| {
        error!("Failed to open measurement store: {}", e);
        e
    })?;

    // Fail fast if the tables are missing or unreadable
    let stats = store.probe().await.map_err(|e| {
        error!("Measurement store is not readable: {}", e);
        e
    })?;
    log_store_stats(
        &store.path().display().to_string(),
        &stats,
        &config.dataset.window(),
    );

    let state = AppState::new_shared(config.clone(), store);
    let app = build_router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SurfsUpError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
