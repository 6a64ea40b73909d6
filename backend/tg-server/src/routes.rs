use crate::{
    AppState, create_task, delete_profile, delete_task, get_profile, get_task, health, list_tasks,
    login, require_auth, signup, update_profile, update_task,
};

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// `cors_origins` empty allows any origin.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    // Protected: bearer token required, identity re-resolved per request
    let protected = Router::new()
        .route(
            "/profile",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Auth endpoints
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        // Health check endpoints
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/dbstatus", get(health::db_status))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .merge(protected)
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
