use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Handlers hold no other mutable shared state; everything lives in the
/// database behind the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tourbase_db::DbPool,
    /// Server configuration (JWT secret, upload paths, CORS).
    pub config: Arc<ServerConfig>,
}
