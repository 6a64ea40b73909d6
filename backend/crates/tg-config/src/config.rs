use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` into the process environment if present
    /// 2. Resolve the config directory (TG_CONFIG_DIR, else ./.taskgate/) and create it
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // A missing .env is the normal case
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: TG_CONFIG_DIR env var > ./.taskgate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Never logs the signing secret.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        if self.server.cors_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.server.cors_origins.join(", "));
        }
        info!(
            "  database: {} (pool={}, connect={}s, operation={}s, check={}s)",
            self.database.path,
            self.database.max_connections,
            self.database.connect_timeout_secs,
            self.database.operation_timeout_secs,
            self.database.check_interval_secs
        );
        info!(
            "  auth: HS256 secret {}, ttl={}d, bcrypt cost={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_days,
            self.auth.bcrypt_cost
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TG_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("TG_ENV", &mut self.server.environment);
        Self::apply_env_list("TG_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("TG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "TG_DATABASE_CONNECT_TIMEOUT_SECS",
            &mut self.database.connect_timeout_secs,
        );
        Self::apply_env_parse(
            "TG_DATABASE_OPERATION_TIMEOUT_SECS",
            &mut self.database.operation_timeout_secs,
        );
        Self::apply_env_parse(
            "TG_DATABASE_CHECK_INTERVAL_SECS",
            &mut self.database.check_interval_secs,
        );

        // Auth
        Self::apply_env_option_string("TG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("TG_AUTH_TOKEN_TTL_DAYS", &mut self.auth.token_ttl_days);
        Self::apply_env_parse("TG_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        // Logging
        Self::apply_env_parse("TG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TG_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the current setting in place
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated, blank entries dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
