//! Bearer-token authorization for protected routes.
//!
//! Every rejection after the header check carries the same 401 body, so a
//! caller cannot tell a forged token from an expired one or from a token
//! whose user has since been deleted. The reason is logged server-side.

use crate::api::error::{INVALID_TOKEN_MESSAGE, MISSING_TOKEN_MESSAGE};
use crate::{ApiError, AppState, AuthenticatedUser};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use log::{debug, warn};

const BEARER_SCHEME: &str = "Bearer";

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(req.headers()) else {
        debug!("Rejected {}: no bearer token", req.uri().path());
        return Err(ApiError::unauthorized(MISSING_TOKEN_MESSAGE));
    };

    let user_id = state.tokens.verify(token).map_err(|e| {
        warn!("Rejected {}: token {}", req.uri().path(), e.kind());
        ApiError::unauthorized(INVALID_TOKEN_MESSAGE)
    })?;

    // Token is good, but the identity re-check needs the store
    state.require_store()?;

    let Some(user) = state.credentials.find_by_id(user_id).await? else {
        warn!("Rejected {}: subject {} no longer exists", req.uri().path(), user_id);
        return Err(ApiError::unauthorized(INVALID_TOKEN_MESSAGE));
    };

    req.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(req).await)
}

/// Extract `<token>` from `Authorization: Bearer <token>`
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    Some(token.trim()).filter(|token| !token.is_empty())
}
