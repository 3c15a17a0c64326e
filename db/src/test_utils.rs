use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Opens a fresh in-memory SQLite pool with the schema applied.
///
/// A single connection is used so every query sees the same in-memory
/// database for the lifetime of the pool.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    crate::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}
