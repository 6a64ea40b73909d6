//! Issues and verifies HS256 bearer tokens.
//!
//! Expiry is checked here against an explicit `now` rather than by the
//! JWT library, so the boundary is exact: a token verifies at `exp` and
//! fails one second later.

use crate::{AuthError, Claims, DEFAULT_TOKEN_TTL_DAYS, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// A freshly signed token and its absolute expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service keyed with `secret`. An empty secret is rejected.
    #[track_caller]
    pub fn new(secret: &[u8]) -> AuthErrorResult<Self> {
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AuthError::MissingSigningSecret {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::days(DEFAULT_TOKEN_TTL_DAYS),
        })
    }

    /// Override the token lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthErrorResult<IssuedToken> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    #[track_caller]
    pub fn issue_at(&self, subject: Uuid, now: DateTime<Utc>) -> AuthErrorResult<IssuedToken> {
        let expires_at = now + self.ttl;
        let claims = Claims::new(subject, now.timestamp(), expires_at.timestamp());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::Encode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(IssuedToken { token, expires_at })
    }

    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` as if the current time were `now`, returning the subject
    #[track_caller]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Uuid> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        if now.timestamp() > claims.exp {
            return Err(AuthError::Expired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.subject()
    }
}
