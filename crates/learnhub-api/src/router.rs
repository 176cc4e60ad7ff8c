//! Route table.

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};

use crate::dto::response::MessageResponse;
use crate::handlers;
use crate::state::AppState;

/// Assemble the full application router under `/api/v1`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(course_routes())
        .merge(order_routes())
        .merge(notification_routes())
        .merge(layout_routes())
        .merge(analytics_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api/v1", api)
        .fallback(not_found)
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/activate", post(handlers::auth::activate))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/social", post(handlers::auth::social_auth))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list))
        .route("/users/me", put(handlers::user::update_info))
        .route("/users/password", put(handlers::user::update_password))
        .route("/users/avatar", put(handlers::user::update_avatar))
        .route("/users/{id}/role", put(handlers::user::update_role))
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(handlers::course::list_public).post(handlers::course::create),
        )
        .route(
            "/courses/{id}",
            get(handlers::course::get_public)
                .put(handlers::course::edit)
                .delete(handlers::course::delete),
        )
        .route("/courses/{id}/content", get(handlers::course::content))
        .route("/courses/{id}/questions", post(handlers::course::add_question))
        .route("/courses/{id}/answers", post(handlers::course::add_answer))
        .route("/courses/{id}/reviews", post(handlers::course::add_review))
        .route(
            "/courses/{id}/reviews/{review_id}/replies",
            post(handlers::course::add_reply),
        )
        .route("/admin/courses", get(handlers::course::list_admin))
}

fn order_routes() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(handlers::order::list).post(handlers::order::create),
    )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route("/notifications/{id}", put(handlers::notification::mark_read))
}

fn layout_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/layouts",
            post(handlers::layout::create).put(handlers::layout::edit),
        )
        .route("/layouts/{kind}", get(handlers::layout::get))
}

fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/users", get(handlers::analytics::users))
        .route("/analytics/courses", get(handlers::analytics::courses))
        .route("/analytics/orders", get(handlers::analytics::orders))
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(MessageResponse {
            success: false,
            message: "Route not found".to_string(),
        }),
    )
        .into_response()
}
