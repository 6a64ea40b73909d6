//! Integration tests for health and readiness endpoints
mod common;

use crate::common::{create_test_app_state, send, test_router};

use tg_db::DependencyHealthState;
use tg_server::build_router;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_is_200_and_reports_store_state() {
    let state = create_test_app_state().await;
    let app = test_router(&state);

    for uri in ["/", "/health"] {
        let (status, json) = send(&app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["components"]["database"], "connected");
    }

    state.health.transition(DependencyHealthState::Disconnected);
    let (status, json) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["components"]["database"], "disconnected");
}

#[tokio::test]
async fn test_dbstatus_follows_store_state() {
    let state = create_test_app_state().await;
    let app = test_router(&state);

    let (status, json) = send(&app, "GET", "/dbstatus", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["connected"], true);

    state.health.transition(DependencyHealthState::Connecting);
    let (status, json) = send(&app, "GET", "/dbstatus", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "connecting");
    assert_eq!(json["connected"], false);
}

#[tokio::test]
async fn test_ready_requires_store_but_live_does_not() {
    let state = create_test_app_state().await;
    let app = test_router(&state);

    let (status, _) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);

    state.health.transition(DependencyHealthState::Disconnected);

    let (status, _) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, "GET", "/live", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_configured_origin_only() {
    let state = create_test_app_state().await;
    let app = build_router(state, &["https://app.example.com".to_string()]);

    let cases = [
        ("https://app.example.com", true),
        ("https://evil.example.com", false),
    ];

    for (origin, allowed) in cases {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some(),
            allowed,
            "origin {origin}"
        );
    }
}
