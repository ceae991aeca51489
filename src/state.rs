//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Store handle handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
