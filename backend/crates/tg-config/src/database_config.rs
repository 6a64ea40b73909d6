use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_OPERATION_TIMEOUT_SECS, DEFAULT_CHECK_INTERVAL_SECS,
    MAX_DB_MAX_CONNECTIONS,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// Bound on acquiring a connection, and on the initial connect
    pub connect_timeout_secs: u64,
    /// Bound on any single store operation
    pub operation_timeout_secs: u64,
    /// Interval between liveness checks
    pub check_interval_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections == 0 || self.max_connections > MAX_DB_MAX_CONNECTIONS {
            return Err(ConfigError::database(format!(
                "database.max_connections must be 1-{}, got {}",
                MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        for (name, value) in [
            ("connect_timeout_secs", self.connect_timeout_secs),
            ("operation_timeout_secs", self.operation_timeout_secs),
            ("check_interval_secs", self.check_interval_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::database(format!(
                    "database.{name} must be greater than 0"
                )));
            }
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}
