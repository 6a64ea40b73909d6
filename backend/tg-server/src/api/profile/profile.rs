//! Profile handlers for the authenticated user

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, DeleteResponse, ProfileResponse,
    UpdateProfileRequest, UserDto, ValidJson,
};

use tg_core::validation::{require_non_empty, validate_email};

use axum::{Json, extract::State};
use log::info;

/// GET /profile
pub async fn get_profile(CurrentUser(user): CurrentUser) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileResponse {
        user: UserDto::from(user),
    }))
}

/// PUT /profile
///
/// Partial update of name, bio and email. A taken email is a 409.
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidJson(req): ValidJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    if let Some(ref email) = req.email {
        validate_email("email", email)?;
    }
    if let Some(ref name) = req.name {
        require_non_empty("name", name)?;
    }

    state.require_store()?;

    let updated = state
        .credentials
        .update_profile(user.id, req.into())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user.id)))?;

    Ok(Json(ProfileResponse {
        user: UserDto::from(updated),
    }))
}

/// DELETE /profile
///
/// Remove the caller and all of their tasks. Outstanding tokens for the
/// account stop working because the middleware re-resolves the subject.
pub async fn delete_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<DeleteResponse>> {
    state.require_store()?;

    if !state.credentials.delete(user.id).await? {
        return Err(ApiError::not_found(format!("User {} not found", user.id)));
    }

    info!("User {} deleted their account", user.id);

    Ok(Json(DeleteResponse {
        deleted_id: user.id.to_string(),
    }))
}
