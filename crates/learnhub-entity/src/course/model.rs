//! Course and section entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A titled bullet point (benefit or prerequisite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub title: String,
}

/// An external link attached to a content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLink {
    pub title: String,
    pub url: String,
}

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique course identifier.
    pub id: Uuid,
    /// Course title.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Price in the platform currency.
    pub price: f64,
    /// Optional strike-through price.
    pub estimated_price: Option<f64>,
    /// Thumbnail identifier on the media host.
    pub thumbnail_public_id: Option<String>,
    /// Thumbnail delivery URL.
    pub thumbnail_url: Option<String>,
    /// Comma-separated tags.
    pub tags: String,
    /// Difficulty level.
    pub level: String,
    /// Promo video URL.
    pub demo_url: String,
    /// What learners get out of the course.
    pub benefits: Json<Vec<CourseItem>>,
    /// What learners should know beforehand.
    pub prerequisites: Json<Vec<CourseItem>>,
    /// Average review rating.
    pub ratings: f64,
    /// Number of purchases.
    pub purchased: i64,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A content section (one video lesson) inside a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseSection {
    /// Unique section identifier.
    pub id: Uuid,
    /// Owning course.
    pub course_id: Uuid,
    /// Section title.
    pub title: String,
    /// Section description.
    pub description: String,
    /// Video URL (restricted to owners).
    pub video_url: String,
    /// Video length in minutes.
    pub video_length: f64,
    /// Player used to render the video.
    pub video_player: String,
    /// Instructor suggestion shown to owners.
    pub suggestion: String,
    /// External links for the section.
    pub links: Json<Vec<CourseLink>>,
    /// Order of the section within the course.
    pub position: i32,
    /// When the section was created.
    pub created_at: DateTime<Utc>,
}
