//! REST API error types
//!
//! Every failure leaves the server as `{"error": {code, message, field?}}`
//! with a matching status code.

use crate::GateError;

use tg_core::CoreError;
use tg_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";
pub const MISSING_TOKEN_MESSAGE: &str = "No token provided, authorization denied";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Service temporarily unavailable, please try again later";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 503
    #[error("Service unavailable {location}")]
    ServiceUnavailable { location: ErrorLocation },

    /// 500; `message` is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: &str) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn service_unavailable() -> Self {
        Self::ServiceUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => log::error!("{}", self),
            StatusCode::SERVICE_UNAVAILABLE => log::warn!("{}", self),
            _ => log::debug!("{}", self),
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, field, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field,
            },
            ApiError::ServiceUnavailable { .. } => ApiErrorBody {
                code: "SERVICE_UNAVAILABLE".into(),
                message: SERVICE_UNAVAILABLE_MESSAGE.into(),
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: "Internal server error".into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field().map(str::to_string);
        let message = match e {
            CoreError::Validation { message, .. } => message,
            CoreError::InvalidTaskStatus { value, .. } => format!(
                "Invalid status: {value}. Valid values: pending, in-progress, completed"
            ),
            CoreError::InvalidTaskPriority { value, .. } => {
                format!("Invalid priority: {value}. Valid values: low, medium, high")
            }
            CoreError::Uuid { source, .. } => format!("Invalid UUID format: {source}"),
        };

        ApiError::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::UniqueViolation { field, .. } => ApiError::Conflict {
                message: format!("{field} already in use"),
                field: Some(field.to_string()),
                location,
            },
            e if e.is_unavailable() => {
                log::warn!("Store unavailable: {}", e);
                ApiError::ServiceUnavailable { location }
            }
            e => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

impl From<GateError> for ApiError {
    #[track_caller]
    fn from(e: GateError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            GateError::ServiceUnavailable { .. } => ApiError::ServiceUnavailable { location },
            GateError::DuplicateEmail { .. } => ApiError::Conflict {
                message: "User already exists".to_string(),
                field: Some("email".to_string()),
                location,
            },
            GateError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: INVALID_CREDENTIALS_MESSAGE.to_string(),
                location,
            },
            e @ (GateError::Store { .. } | GateError::Token { .. }) => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
