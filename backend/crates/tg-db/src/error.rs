use tg_auth::AuthError;
use tg_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on '{field}' {location}")]
    UniqueViolation {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store operation '{operation}' timed out after {secs}s {location}")]
    Timeout {
        operation: &'static str,
        secs: u64,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Map an insert/update failure, turning a uniqueness rejection into
    /// `UniqueViolation` on `field`
    #[track_caller]
    pub fn from_write(source: sqlx::Error, field: &'static str) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            return Self::UniqueViolation {
                field,
                location: ErrorLocation::from(Location::caller()),
            };
        }
        Self::from(source)
    }

    /// Row decoding failure
    #[track_caller]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The store could not be reached in time; callers answer "try later"
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable {
                    message: source.to_string(),
                    location,
                }
            }
            source => Self::Sqlx { source, location },
        }
    }
}

impl From<AuthError> for DbError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::PasswordHash {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
