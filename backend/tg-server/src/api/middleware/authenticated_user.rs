use tg_core::User;

/// Request extension inserted by `require_auth` once the bearer token
/// has verified and its subject still exists
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);
