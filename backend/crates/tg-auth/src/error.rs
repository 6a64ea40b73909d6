use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token signing secret is missing or empty {location}")]
    MissingSigningSecret { location: ErrorLocation },

    #[error("Token signature does not match {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    Encode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {source} {location}")]
    PasswordHash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Password hashing task failed: {message} {location}")]
    HashTask {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Short classification for log lines. Never includes token contents.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingSigningSecret { .. } => "missing_secret",
            Self::InvalidSignature { .. } => "invalid_signature",
            Self::Expired { .. } => "expired",
            Self::MalformedToken { .. } => "malformed",
            Self::Encode { .. } => "encode",
            Self::PasswordHash { .. } => "password_hash",
            Self::HashTask { .. } => "hash_task",
        }
    }

    /// True for the failures a presented token can produce on verification
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignature { .. } | Self::Expired { .. } | Self::MalformedToken { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
