//! Course catalog, content and thread handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::request::{
    AnswerRequest, CourseRequest, QuestionRequest, ReplyRequest, ReviewRequest, validate,
};
use crate::dto::response::{
    ContentResponse, CourseDetailResponse, CoursePublicResponse, CourseResponse, CoursesResponse,
    MessageResponse,
};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// `POST /api/v1/courses` (admin)
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    validate(&req)?;
    let course = state.course_service.create(req.into()).await?;
    Ok(Json(CourseResponse {
        success: true,
        course,
    }))
}

/// `PUT /api/v1/courses/{id}` (admin)
pub async fn edit(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    validate(&req)?;
    let course = state.course_service.edit(id, req.into()).await?;
    Ok(Json(CourseResponse {
        success: true,
        course,
    }))
}

/// `GET /api/v1/courses/{id}` (public)
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoursePublicResponse>, ApiError> {
    let course = state.course_service.get_public(id).await?;
    Ok(Json(CoursePublicResponse {
        success: true,
        course,
    }))
}

/// `GET /api/v1/courses` (public)
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<CoursesResponse>, ApiError> {
    let courses = state.course_service.list_public().await?;
    Ok(Json(CoursesResponse {
        success: true,
        courses,
    }))
}

/// `GET /api/v1/courses/{id}/content` (owner or admin)
pub async fn content(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentResponse>, ApiError> {
    let content = state.course_service.content(&user.0, id).await?;
    Ok(Json(ContentResponse {
        success: true,
        content,
    }))
}

/// `POST /api/v1/courses/{id}/questions` (owner or admin)
pub async fn add_question(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    validate(&req)?;
    let course = state
        .course_service
        .add_question(&user.0, id, req.section_id, &req.question)
        .await?;
    Ok(Json(CourseDetailResponse {
        success: true,
        course,
    }))
}

/// `POST /api/v1/courses/{id}/answers` (owner or admin)
pub async fn add_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    validate(&req)?;
    let course = state
        .course_service
        .add_answer(&user.0, id, req.section_id, req.question_id, &req.answer)
        .await?;
    Ok(Json(CourseDetailResponse {
        success: true,
        course,
    }))
}

/// `POST /api/v1/courses/{id}/reviews` (owner or admin)
pub async fn add_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    validate(&req)?;
    let course = state
        .course_service
        .add_review(&user.0, id, req.rating, &req.comment)
        .await?;
    Ok(Json(CourseDetailResponse {
        success: true,
        course,
    }))
}

/// `POST /api/v1/courses/{id}/reviews/{review_id}/replies` (admin)
pub async fn add_reply(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((id, review_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    validate(&req)?;
    let course = state
        .course_service
        .add_reply(&admin.0, id, review_id, &req.comment)
        .await?;
    Ok(Json(CourseDetailResponse {
        success: true,
        course,
    }))
}

/// `GET /api/v1/admin/courses` (admin)
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<CoursesResponse>, ApiError> {
    let courses = state.course_service.list_admin().await?;
    Ok(Json(CoursesResponse {
        success: true,
        courses,
    }))
}

/// `DELETE /api/v1/courses/{id}` (admin)
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.course_service.delete(id).await?;
    Ok(Json(MessageResponse::ok("Course deleted successfully")))
}
