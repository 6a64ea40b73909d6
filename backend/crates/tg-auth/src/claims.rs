use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bearer token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds); the token is valid through this instant
    pub exp: i64,
    /// Unique token id, so two tokens issued within one second still differ
    pub jti: String,
}

impl Claims {
    pub fn new(subject: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            sub: subject.to_string(),
            iat,
            exp,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse `sub` back into a user id
    #[track_caller]
    pub fn subject(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::MalformedToken {
            message: "sub is not a valid user id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
