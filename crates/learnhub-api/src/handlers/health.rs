//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use learnhub_core::traits::cache::CacheProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// `GET /api/v1/health`
///
/// Probes the database and cache. Returns 503 when either store is
/// unreachable so load balancers can rotate the instance out.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();
    let cache = matches!(state.cache.health_check().await, Ok(true));

    let status = if database && cache {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            success: database && cache,
            database,
            cache,
        }),
    )
}
