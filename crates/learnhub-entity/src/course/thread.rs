//! Question and review thread models.
//!
//! Threads are owned child tables keyed by generated UUIDs. The author's
//! display name is denormalized so threads render without a join against
//! the users table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A question asked under a content section.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseQuestion {
    /// Unique question identifier.
    pub id: Uuid,
    /// The section the question was asked under.
    pub section_id: Uuid,
    /// Author account.
    pub user_id: Uuid,
    /// Author display name at the time of posting.
    pub user_name: String,
    /// Question text.
    pub question: String,
    /// When the question was posted.
    pub created_at: DateTime<Utc>,
}

/// A reply to a question.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionAnswer {
    /// Unique answer identifier.
    pub id: Uuid,
    /// The question being answered.
    pub question_id: Uuid,
    /// Author account.
    pub user_id: Uuid,
    /// Author display name at the time of posting.
    pub user_name: String,
    /// Answer text.
    pub answer: String,
    /// When the answer was posted.
    pub created_at: DateTime<Utc>,
}

/// A course-level review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseReview {
    /// Unique review identifier.
    pub id: Uuid,
    /// Reviewed course.
    pub course_id: Uuid,
    /// Author account.
    pub user_id: Uuid,
    /// Author display name at the time of posting.
    pub user_name: String,
    /// Star rating, 0 to 5.
    pub rating: f64,
    /// Review text.
    pub comment: String,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
}

/// A staff reply to a review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewReply {
    /// Unique reply identifier.
    pub id: Uuid,
    /// The review being replied to.
    pub review_id: Uuid,
    /// Author account.
    pub user_id: Uuid,
    /// Author display name at the time of posting.
    pub user_name: String,
    /// Reply text.
    pub comment: String,
    /// When the reply was posted.
    pub created_at: DateTime<Utc>,
}
