pub mod authenticated_user;
pub mod require_auth;
