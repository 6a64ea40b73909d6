mod auth_config;
mod config;
mod database_config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "TG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".taskgate";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "taskgate.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 45;
const DEFAULT_CHECK_INTERVAL_SECS: u64 = 10;

const DEFAULT_TOKEN_TTL_DAYS: u64 = 7;
const MAX_TOKEN_TTL_DAYS: u64 = 365;
const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const RECOMMENDED_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
