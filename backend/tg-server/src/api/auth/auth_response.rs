use crate::{AuthOutcome, UserDto};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Signup and login response: the identity plus its bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AuthOutcome> for AuthResponse {
    fn from(outcome: AuthOutcome) -> Self {
        Self {
            user: UserDto::from(outcome.user),
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
        }
    }
}
