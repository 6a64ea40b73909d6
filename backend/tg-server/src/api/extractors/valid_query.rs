use crate::ApiError;

use std::panic::Location;

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use error_location::ErrorLocation;

/// `Query<T>` whose rejection is a 400 `VALIDATION_ERROR` in the API's
/// error shape
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ValidQuery(value)),
            Err(rejection) => Err(ApiError::Validation {
                message: rejection.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
