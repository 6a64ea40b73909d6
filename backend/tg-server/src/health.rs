use crate::AppState;

use tg_db::DependencyHealthState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / and GET /health - service health with store state.
///
/// Always 200: the process is up even when the store is not.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = state.health.current_state();

    let health = json!({
        "status": "healthy",
        "message": "Task manager API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database.as_str(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /dbstatus - store connectivity; 503 unless connected
pub async fn db_status(State(state): State<AppState>) -> Response {
    let database = state.health.current_state();
    let connected = database == DependencyHealthState::Connected;

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": database.as_str(),
        "connected": connected,
    });

    (status, Json(body)).into_response()
}

/// GET /live - liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness check; traffic is useless until the store is up
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.health.is_connected() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}
