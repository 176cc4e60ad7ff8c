//! Composite course views assembled from the child tables.
//!
//! `CourseDetail` is the full aggregate served to owners and admins.
//! `CoursePublic` is the catalog view cached for anonymous reads: it strips
//! video URLs, suggestions, links and question threads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Course, CourseSection};
use super::thread::{CourseQuestion, CourseReview, QuestionAnswer, ReviewReply};

/// A question with its answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionThread {
    pub question: CourseQuestion,
    pub answers: Vec<QuestionAnswer>,
}

/// A review with its staff replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewThread {
    pub review: CourseReview,
    pub replies: Vec<ReviewReply>,
}

/// A section with its question threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContent {
    pub section: CourseSection,
    pub questions: Vec<QuestionThread>,
}

/// The full course aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course: Course,
    pub sections: Vec<SectionContent>,
    pub reviews: Vec<ReviewThread>,
}

/// A section as visible to non-owners: no video URL, suggestion or links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPreview {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_length: f64,
    pub video_player: String,
    pub position: i32,
}

impl From<&CourseSection> for SectionPreview {
    fn from(section: &CourseSection) -> Self {
        Self {
            id: section.id,
            title: section.title.clone(),
            description: section.description.clone(),
            video_length: section.video_length,
            video_player: section.video_player.clone(),
            position: section.position,
        }
    }
}

/// The catalog view of a course, safe to serve without authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePublic {
    pub course: Course,
    pub sections: Vec<SectionPreview>,
    pub reviews: Vec<ReviewThread>,
}

impl From<CourseDetail> for CoursePublic {
    fn from(detail: CourseDetail) -> Self {
        Self {
            sections: detail
                .sections
                .iter()
                .map(|content| SectionPreview::from(&content.section))
                .collect(),
            course: detail.course,
            reviews: detail.reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn sample_detail() -> CourseDetail {
        let course_id = Uuid::new_v4();
        let section = CourseSection {
            id: Uuid::new_v4(),
            course_id,
            title: "Intro".to_string(),
            description: "Welcome".to_string(),
            video_url: "https://cdn.example.com/secret.mp4".to_string(),
            video_length: 12.5,
            video_player: "vdocipher".to_string(),
            suggestion: "Watch at 1x".to_string(),
            links: Json(vec![]),
            position: 0,
            created_at: Utc::now(),
        };
        let question = CourseQuestion {
            id: Uuid::new_v4(),
            section_id: section.id,
            user_id: Uuid::new_v4(),
            user_name: "Ada".to_string(),
            question: "Which IDE?".to_string(),
            created_at: Utc::now(),
        };
        CourseDetail {
            course: Course {
                id: course_id,
                name: "Rust 101".to_string(),
                description: "Learn Rust".to_string(),
                price: 49.0,
                estimated_price: Some(99.0),
                thumbnail_public_id: None,
                thumbnail_url: None,
                tags: "rust,beginner".to_string(),
                level: "beginner".to_string(),
                demo_url: "https://cdn.example.com/demo.mp4".to_string(),
                benefits: Json(vec![]),
                prerequisites: Json(vec![]),
                ratings: 0.0,
                purchased: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            sections: vec![SectionContent {
                section,
                questions: vec![QuestionThread {
                    question,
                    answers: vec![],
                }],
            }],
            reviews: vec![],
        }
    }

    #[test]
    fn test_public_view_strips_restricted_fields() {
        let public = CoursePublic::from(sample_detail());
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("secret.mp4"));
        assert!(!json.contains("Watch at 1x"));
        assert!(!json.contains("Which IDE?"));
        assert!(json.contains("Intro"));
    }

    #[test]
    fn test_public_view_keeps_section_order() {
        let public = CoursePublic::from(sample_detail());
        assert_eq!(public.sections.len(), 1);
        assert_eq!(public.sections[0].position, 0);
    }
}
