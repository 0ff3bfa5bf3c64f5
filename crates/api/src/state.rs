use std::sync::Arc;

use pagesmith_core::components::ComponentRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is constructed once in `main` and injected here;
/// nothing reaches for ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagesmith_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Component registry, immutable after startup and shared across
    /// concurrent renders without locking.
    pub registry: Arc<ComponentRegistry>,
}
