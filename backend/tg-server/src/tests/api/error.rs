use crate::{ApiError, GateError};

use tg_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_unauthorized_returns_401_without_field() {
    let (status, json) = body_json(ApiError::unauthorized("Invalid or expired token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, json) = body_json(ApiError::Internal {
        message: "disk I/O error at /var/lib/taskgate.db".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_service_unavailable_returns_503() {
    let (status, json) = body_json(ApiError::service_unavailable()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[test]
fn test_unique_violation_maps_to_conflict() {
    let error = ApiError::from(DbError::UniqueViolation {
        field: "email",
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_store_timeout_maps_to_service_unavailable() {
    let error = ApiError::from(DbError::Timeout {
        operation: "find_user_by_email",
        secs: 45,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_other_store_error_maps_to_internal() {
    let error = ApiError::from(DbError::Migration {
        message: "checksum mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_gate_unique_violation_becomes_duplicate_email() {
    let gate_error = GateError::from(DbError::UniqueViolation {
        field: "email",
        location: ErrorLocation::from(Location::caller()),
    });
    assert!(matches!(gate_error, GateError::DuplicateEmail { .. }));

    let error = ApiError::from(gate_error);
    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_gate_unavailable_store_becomes_service_unavailable() {
    let gate_error = GateError::from(DbError::Unavailable {
        message: "pool timed out".into(),
        location: ErrorLocation::from(Location::caller()),
    });
    assert!(matches!(gate_error, GateError::ServiceUnavailable { .. }));
}

#[test]
fn test_invalid_credentials_maps_to_401() {
    let error = ApiError::from(GateError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_invalid_task_status_maps_to_validation_on_status() {
    let core_error = "archived".parse::<tg_core::TaskStatus>().unwrap_err();

    match ApiError::from(core_error) {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("status"));
            assert!(message.contains("archived"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
