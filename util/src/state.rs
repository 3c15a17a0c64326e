//! Application state container shared across Axum route handlers.
//!
//! This struct holds shared resources, currently the SQLite connection pool.
//! It is cheap to clone and is passed into route handlers via Axum's `State<T>` extractor.

use sqlx::SqlitePool;

/// Central application state shared across the server.
///
/// Holds a thread-safe SQLite pool for use with sqlx.
#[derive(Clone)]
pub struct AppState {
    db: SqlitePool,
}

impl AppState {
    /// Creates a new `AppState` with the given connection pool.
    ///
    /// # Arguments
    ///
    /// * `db` - A sqlx `SqlitePool`, typically created once in `main`.
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `SqlitePool`.
    ///
    /// This is ideal when the caller does not need ownership.
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Returns a cloned copy of the connection pool.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> SqlitePool {
        self.db.clone()
    }
}
