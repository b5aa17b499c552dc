//! Shared handler state.

use sea_orm::DatabaseConnection;

/// State shared with every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
