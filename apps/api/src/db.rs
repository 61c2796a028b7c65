use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{error, info};

/// Opens a single-connection SQLite pool on the file at `path`,
/// creating the file if it does not exist yet.
pub async fn open_store(path: &str) -> Result<SqlitePool> {
    info!("Opening SQLite store at {path}...");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(path))
        .await?;

    info!("Connected to SQLite store at {path}");
    Ok(pool)
}

/// Like [`open_store`], but never fails: when the store cannot be opened the
/// error is logged and a lazily-connecting pool is returned instead, so the
/// failure surfaces on each request rather than aborting startup.
pub async fn open_store_or_lazy(path: &str) -> SqlitePool {
    match open_store(path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Database connection failed for {path}: {e}");
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_lazy_with(connect_options(path))
        }
    }
}

fn connect_options(path: &str) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
}

/// In-memory store for tests. One connection that never idles out, so every
/// query sees the same database.
#[cfg(test)]
pub async fn memory_store() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}
