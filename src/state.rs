//! Application state management for surfsup.
//!
//! This module defines the shared state passed to all handlers. It is
//! immutable: each request opens its own store session from it.

use std::sync::Arc;

use crate::config::Config;
use crate::dates::DateWindow;
use crate::error::Result;
use crate::store::{Session, Store};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Measurement store
    pub store: Store,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: Store) -> Self {
        Self { config, store }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: Store) -> Arc<Self> {
        Arc::new(Self::new(config, store))
    }

    /// Dates that report requests may ask about
    pub fn window(&self) -> DateWindow {
        self.config.dataset.window()
    }

    /// Open a store session for a single request
    pub async fn session(&self) -> Result<Session> {
        self.store.session().await
    }
}
