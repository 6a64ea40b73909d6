use crate::ApiError;

use std::panic::Location;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use error_location::ErrorLocation;

/// `Json<T>` whose rejection is a 400 `VALIDATION_ERROR` in the API's
/// error shape instead of axum's plain-text body
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(ApiError::Validation {
                message: rejection.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
