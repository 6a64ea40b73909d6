//! Axum extractor for the identity attached by `require_auth`

use crate::{ApiError, AuthenticatedUser};

use tg_core::User;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The authenticated user of the current request.
///
/// Only usable on routes behind `require_auth`; elsewhere it rejects
/// with 401.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .map(|AuthenticatedUser(user)| CurrentUser(user.clone()))
                .ok_or_else(|| {
                    log::error!("CurrentUser extracted on a route without require_auth");
                    ApiError::unauthorized(crate::api::error::MISSING_TOKEN_MESSAGE)
                })
        }
    }
}
