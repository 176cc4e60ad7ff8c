//! Admin notification handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::NotificationsResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// `GET /api/v1/notifications` (admin)
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let notifications = state.notification_service.list().await?;
    Ok(Json(NotificationsResponse {
        success: true,
        notifications,
    }))
}

/// `PUT /api/v1/notifications/{id}` (admin)
///
/// Marks the notification read and returns the refreshed list.
pub async fn mark_read(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let notifications = state.notification_service.mark_read(id).await?;
    Ok(Json(NotificationsResponse {
        success: true,
        notifications,
    }))
}
