pub mod claims;
pub mod error;
pub mod password_hasher;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
pub use token_service::{IssuedToken, TokenService};

/// Default bearer token lifetime
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
