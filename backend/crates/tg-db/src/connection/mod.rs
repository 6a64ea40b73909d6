pub mod store_connector;
pub mod store_settings;

use crate::{DbError, Result, StoreSettings};

use tg_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Build a pool for the database file at `path` without opening a connection.
///
/// Connections are opened on first use, so the caller can start serving
/// before the store is reachable.
pub fn create_lazy_pool(path: &Path, settings: &StoreSettings) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
            message: format!("Failed to create database directory: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(lazy_pool_with(options, settings))
}

/// Lazy pool over arbitrary connect options
pub fn lazy_pool_with(options: SqliteConnectOptions, settings: &StoreSettings) -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .connect_lazy_with(options)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

/// Run `fut`, failing with `DbError::Timeout` once `limit` elapses
pub(crate) async fn bounded<T, F>(limit: Duration, operation: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(DbError::Timeout {
            operation,
            secs: limit.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
