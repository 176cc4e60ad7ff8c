//! Account management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use learnhub_entity::user::UserRole;

use crate::dto::request::{
    UpdateAvatarRequest, UpdateInfoRequest, UpdatePasswordRequest, UpdateRoleRequest, validate,
};
use crate::dto::response::{MessageResponse, ProfileResponse, UserResponse, UsersResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// `PUT /api/v1/users/me`
pub async fn update_info(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateInfoRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    validate(&req)?;
    let profile = state
        .user_service
        .update_info(&user.0, &req.name, &req.email)
        .await?;
    Ok(Json(ProfileResponse {
        success: true,
        user: profile,
    }))
}

/// `PUT /api/v1/users/password`
pub async fn update_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate(&req)?;
    state
        .user_service
        .update_password(&user.0, &req.old_password, &req.new_password)
        .await?;
    Ok(Json(MessageResponse::ok("Password updated successfully")))
}

/// `PUT /api/v1/users/avatar`
pub async fn update_avatar(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateAvatarRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    validate(&req)?;
    let profile = state
        .user_service
        .update_avatar(&user.0, &req.avatar)
        .await?;
    Ok(Json(ProfileResponse {
        success: true,
        user: profile,
    }))
}

/// `GET /api/v1/users` (admin)
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}

/// `PUT /api/v1/users/{id}/role` (admin)
pub async fn update_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    validate(&req)?;
    let role: UserRole = req.role.parse()?;
    let user = state.user_service.update_role(id, role).await?;
    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}
