use tg_auth::AuthError;
use tg_core::ErrorLocation;
use tg_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Credential store unavailable {location}")]
    ServiceUnavailable { location: ErrorLocation },

    #[error("Email already registered {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Unknown email and wrong password are deliberately indistinguishable
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Credential store failure: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Token issuance failed: {source} {location}")]
    Token {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<DbError> for GateError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            DbError::UniqueViolation { .. } => Self::DuplicateEmail { location },
            source if source.is_unavailable() => Self::ServiceUnavailable { location },
            source => Self::Store { source, location },
        }
    }
}

impl From<AuthError> for GateError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Token {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
