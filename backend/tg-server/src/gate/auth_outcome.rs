use tg_auth::IssuedToken;
use tg_core::User;

/// Result of a successful signup or login
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub token: IssuedToken,
}
