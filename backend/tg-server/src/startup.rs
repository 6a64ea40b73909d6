//! Startup steps that run before and alongside the HTTP server.

use crate::{ServerResult, logger};

use tg_config::{Config, Environment};
use tg_db::{DbError, StoreConnector};

use std::path::{Path, PathBuf};

use log::{info, warn};
use tokio::sync::broadcast;

/// How the store looked after the first connection attempt
#[derive(Debug)]
pub enum StoreStartup {
    Connected,
    /// Serving without the store; the watcher keeps reconnecting
    Degraded(DbError),
}

/// Start the logger, then validate the config.
///
/// Validation warnings (a short signing secret, for one) are only visible
/// once a sink is installed, so the order matters.
pub fn bootstrap(config: &Config, config_dir: &Path) -> ServerResult<()> {
    logger::initialize(
        config.logging.level,
        log_file_path(config, config_dir),
        config.logging.colored,
    )?;

    config.validate()?;
    Ok(())
}

/// `<config_dir>/<logging.dir>/<logging.file>`, or `None` for stdout
pub fn log_file_path(config: &Config, config_dir: &Path) -> Option<PathBuf> {
    config
        .logging
        .file
        .as_ref()
        .map(|file| config_dir.join(&config.logging.dir).join(file))
}

/// First connection attempt.
///
/// In production an unreachable store is fatal. Elsewhere the server keeps
/// running and store-backed routes answer 503 until the watcher reconnects.
pub async fn initial_connect(
    connector: &StoreConnector,
    environment: Environment,
) -> ServerResult<StoreStartup> {
    match connector.connect().await {
        Ok(()) => {
            info!("Store connected");
            Ok(StoreStartup::Connected)
        }
        Err(e) if environment.is_production() => Err(e.into()),
        Err(e) => {
            warn!("Store unreachable at startup, serving degraded: {}", e);
            Ok(StoreStartup::Degraded(e))
        }
    }
}

/// Initial connect, then watch the store until shutdown is signalled.
///
/// Returns early only when the initial connect is fatal.
pub async fn supervise_store(
    connector: &StoreConnector,
    environment: Environment,
    shutdown: broadcast::Receiver<()>,
) -> ServerResult<()> {
    initial_connect(connector, environment).await?;
    connector.watch(shutdown).await;
    Ok(())
}
