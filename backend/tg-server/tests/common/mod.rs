#![allow(dead_code)]

//! Test infrastructure for tg-server API tests

pub mod fake_store;

pub use fake_store::FakeCredentialStore;

use tg_auth::{PasswordHasher, TokenService};
use tg_db::{
    CredentialStore, DependencyHealth, DependencyHealthState, SqlCredentialStore, TaskRepository,
    run_migrations,
};
use tg_server::{AppState, AuthenticationGate, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret-0123456789";
pub const TEST_PASSWORD: &str = "s3cret-pass";
pub const TEST_BCRYPT_COST: u32 = 4;
pub const TEST_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_BCRYPT_COST).expect("Failed to build hasher")
}

pub fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(TEST_SECRET).expect("Failed to build token service"))
}

pub fn connected_health() -> DependencyHealth {
    DependencyHealth::with_state(DependencyHealthState::Connected)
}

/// AppState over a real in-memory store, marked connected
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let store = Arc::new(SqlCredentialStore::new(
        pool.clone(),
        test_hasher(),
        TEST_OPERATION_TIMEOUT,
    ));
    app_state_with(store, connected_health(), pool)
}

/// AppState over any credential store with an explicit health handle
pub fn app_state_with(
    credentials: Arc<dyn CredentialStore>,
    health: DependencyHealth,
    pool: SqlitePool,
) -> AppState {
    let tokens = test_tokens();
    let gate = Arc::new(AuthenticationGate::new(
        health.clone(),
        Arc::clone(&credentials),
        Arc::clone(&tokens),
        test_hasher(),
    ));

    AppState {
        health,
        tokens,
        credentials,
        tasks: Arc::new(TaskRepository::new(pool, TEST_OPERATION_TIMEOUT)),
        gate,
    }
}

pub fn test_router(state: &AppState) -> Router {
    build_router(state.clone(), &[])
}

/// Send one request through the router; returns status and JSON body
/// (`Value::Null` for non-JSON bodies)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Sign up through the API; returns (token, user id)
pub async fn signup(app: &Router, email: &str) -> (String, String) {
    let (status, json) = send(
        app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD, "name": "Test User" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {json}");

    (
        json["token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_str().unwrap().to_string(),
    )
}

pub async fn create_task(app: &Router, token: &str, body: Value) -> Value {
    let (status, json) = send(app, "POST", "/tasks", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create task failed: {json}");
    json["task"].clone()
}
