//! Owns the pool lifecycle and is the only writer of `DependencyHealth`.
//!
//! ```text
//! connect():  Connecting -> Connected | Disconnected
//! ping:       Connected -> Disconnected on failure
//!             Disconnected -> Connecting -> Connected on recovery
//! close():    Disconnecting -> Disconnected
//! ```

use crate::connection::{bounded, run_migrations};
use crate::{DependencyHealth, DependencyHealthState, Result, StoreSettings};

use log::{debug, info, warn};
use sqlx::SqlitePool;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

pub struct StoreConnector {
    pool: SqlitePool,
    health: DependencyHealth,
    settings: StoreSettings,
}

impl StoreConnector {
    pub fn new(pool: SqlitePool, health: DependencyHealth, settings: StoreSettings) -> Self {
        Self {
            pool,
            health,
            settings,
        }
    }

    pub fn health(&self) -> &DependencyHealth {
        &self.health
    }

    /// Establish connectivity and apply migrations, bounded by the connect timeout.
    pub async fn connect(&self) -> Result<()> {
        self.health.transition(DependencyHealthState::Connecting);

        let result = bounded(self.settings.connect_timeout, "connect", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            run_migrations(&self.pool).await
        })
        .await;

        match result {
            Ok(()) => {
                self.health.transition(DependencyHealthState::Connected);
                Ok(())
            }
            Err(e) => {
                self.health.transition(DependencyHealthState::Disconnected);
                Err(e)
            }
        }
    }

    /// Single liveness round trip
    pub async fn ping(&self) -> Result<()> {
        bounded(self.settings.connect_timeout, "ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }

    /// One check cycle: detect a drop, or attempt recovery. Returns the resulting state.
    pub async fn check(&self) -> DependencyHealthState {
        match self.health.current_state() {
            DependencyHealthState::Connected => {
                if let Err(e) = self.ping().await {
                    warn!("Store liveness ping failed: {}", e);
                    self.health.transition(DependencyHealthState::Disconnected);
                }
            }
            DependencyHealthState::Disconnected => match self.connect().await {
                Ok(()) => info!("Store connection re-established"),
                Err(e) => debug!("Store still unreachable: {}", e),
            },
            DependencyHealthState::Connecting | DependencyHealthState::Disconnecting => {}
        }

        self.health.current_state()
    }

    /// Ping periodically until shutdown is signalled
    pub async fn watch(&self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.settings.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    debug!("Store watcher stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.check().await;
                }
            }
        }
    }

    /// Tear down the pool. Store access fails fast from here on.
    pub async fn close(&self) {
        self.health.transition(DependencyHealthState::Disconnecting);
        self.pool.close().await;
        self.health.transition(DependencyHealthState::Disconnected);
        info!("Store connection closed");
    }
}
