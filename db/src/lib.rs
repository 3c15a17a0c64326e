pub mod models;
pub mod test_utils;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use util::config;

/// Opens the SQLite pool named by `DATABASE_PATH`.
///
/// The variable may hold a full `sqlite:` DSN or a plain file path. Plain
/// paths get their parent directory created first, since SQLite will not
/// create intermediate directories on its own.
pub async fn connect() -> SqlitePool {
    let path_or_url = config::database_path();

    let options = if path_or_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(&path_or_url)
            .expect("Invalid DATABASE_PATH DSN")
            .create_if_missing(true)
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        SqliteConnectOptions::new()
            .filename(&path_or_url)
            .create_if_missing(true)
    };

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database")
}

/// Creates the `asignaturas` table if it does not exist yet.
///
/// Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS asignaturas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            descripcion TEXT,
            creditos INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
