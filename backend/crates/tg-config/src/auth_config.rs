use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_TTL_DAYS, MAX_BCRYPT_COST,
    MAX_TOKEN_TTL_DAYS, MIN_BCRYPT_COST, RECOMMENDED_SECRET_LENGTH,
};

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC signing secret for bearer tokens. Required.
    pub jwt_secret: Option<String>,
    pub token_ttl_days: u64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ConfigError::auth("auth.jwt_secret is required (set TG_AUTH_JWT_SECRET)")
            })?;

        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            warn!(
                "auth.jwt_secret is shorter than {} characters; use a longer secret in production",
                RECOMMENDED_SECRET_LENGTH
            );
        }

        if self.token_ttl_days == 0 || self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_days must be 1-{}, got {}",
                MAX_TOKEN_TTL_DAYS, self.token_ttl_days
            )));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }
}
