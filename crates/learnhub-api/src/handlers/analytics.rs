//! Analytics handlers. Admin only.

use axum::Json;
use axum::extract::State;

use crate::dto::response::SeriesResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// `GET /api/v1/analytics/users`
pub async fn users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SeriesResponse>, ApiError> {
    let analytics = state.analytics_service.users_series().await?;
    Ok(Json(SeriesResponse {
        success: true,
        analytics,
    }))
}

/// `GET /api/v1/analytics/courses`
pub async fn courses(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SeriesResponse>, ApiError> {
    let analytics = state.analytics_service.courses_series().await?;
    Ok(Json(SeriesResponse {
        success: true,
        analytics,
    }))
}

/// `GET /api/v1/analytics/orders`
pub async fn orders(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SeriesResponse>, ApiError> {
    let analytics = state.analytics_service.orders_series().await?;
    Ok(Json(SeriesResponse {
        success: true,
        analytics,
    }))
}
