//! Signup and login handlers

use crate::{ApiResult, AppState, AuthResponse, LoginRequest, SignupRequest, ValidJson};

use tg_core::NewUser;
use tg_core::validation::{
    MIN_PASSWORD_LENGTH, require_min_length, require_non_empty, validate_email,
};

use axum::{Json, extract::State, http::StatusCode};

/// POST /auth/signup
///
/// Register a new user and return it with a bearer token
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    validate_email("email", &req.email)?;
    require_min_length("password", &req.password, MIN_PASSWORD_LENGTH)?;
    require_non_empty("name", &req.name)?;

    let outcome = state
        .gate
        .signup(NewUser {
            email: req.email,
            secret: req.password,
            name: req.name.trim().to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(outcome))))
}

/// POST /auth/login
///
/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    validate_email("email", &req.email)?;
    require_non_empty("password", &req.password)?;

    let outcome = state.gate.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse::from(outcome)))
}
