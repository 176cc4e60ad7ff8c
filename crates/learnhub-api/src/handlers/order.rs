//! Purchase order handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{OrderRequest, validate};
use crate::dto::response::{OrderResponse, OrdersResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// `POST /api/v1/orders`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    validate(&req)?;
    let order = state
        .order_service
        .create(&user.0, req.course_id, req.payment_info)
        .await?;
    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// `GET /api/v1/orders` (admin)
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = state.order_service.list().await?;
    Ok(Json(OrdersResponse {
        success: true,
        orders,
    }))
}
