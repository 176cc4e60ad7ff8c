//! Site layout handlers.

use axum::Json;
use axum::extract::{Path, State};

use learnhub_entity::layout::LayoutKind;

use crate::dto::request::LayoutRequest;
use crate::dto::response::LayoutResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// `POST /api/v1/layouts` (admin)
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let layout = state.layout_service.create(req.into_input()?).await?;
    Ok(Json(LayoutResponse {
        success: true,
        layout,
    }))
}

/// `PUT /api/v1/layouts` (admin)
pub async fn edit(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let layout = state.layout_service.edit(req.into_input()?).await?;
    Ok(Json(LayoutResponse {
        success: true,
        layout,
    }))
}

/// `GET /api/v1/layouts/{kind}` (admin)
pub async fn get(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(kind): Path<String>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let kind: LayoutKind = kind.parse()?;
    let layout = state.layout_service.get(kind).await?;
    Ok(Json(LayoutResponse {
        success: true,
        layout,
    }))
}
