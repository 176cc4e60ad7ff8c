//! Request DTOs with validation rules.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::course::{CourseItem, CourseLink};
use learnhub_entity::layout::{Category, FaqItem};
use learnhub_service::course::{CourseInput, SectionInput};
use learnhub_service::layout::LayoutInput;

/// Run validator rules, mapping failures into a 400.
pub fn validate(req: &impl Validate) -> AppResult<()> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

// ── Auth ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ActivateRequest {
    #[validate(length(min = 1))]
    pub activation_token: String,
    #[validate(length(equal = 4))]
    pub activation_code: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SocialAuthRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub avatar: Option<String>,
}

// ── Account ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInfoRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(length(min = 1))]
    pub avatar: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1))]
    pub role: String,
}

// ── Courses ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CourseItemDto {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CourseLinkDto {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SectionDto {
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub video_length: f64,
    #[serde(default)]
    pub video_player: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub links: Vec<CourseLinkDto>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub benefits: Vec<CourseItemDto>,
    #[serde(default)]
    pub prerequisites: Vec<CourseItemDto>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionDto>,
}

impl From<CourseRequest> for CourseInput {
    fn from(req: CourseRequest) -> Self {
        CourseInput {
            name: req.name,
            description: req.description,
            price: req.price,
            estimated_price: req.estimated_price,
            tags: req.tags,
            level: req.level,
            demo_url: req.demo_url,
            benefits: req
                .benefits
                .into_iter()
                .map(|b| CourseItem { title: b.title })
                .collect(),
            prerequisites: req
                .prerequisites
                .into_iter()
                .map(|p| CourseItem { title: p.title })
                .collect(),
            thumbnail: req.thumbnail,
            sections: req
                .sections
                .into_iter()
                .map(|s| SectionInput {
                    id: s.id,
                    title: s.title,
                    description: s.description,
                    video_url: s.video_url,
                    video_length: s.video_length,
                    video_player: s.video_player,
                    suggestion: s.suggestion,
                    links: s
                        .links
                        .into_iter()
                        .map(|l| CourseLink {
                            title: l.title,
                            url: l.url,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRequest {
    pub section_id: Uuid,
    #[validate(length(min = 1))]
    pub question: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    pub section_id: Uuid,
    pub question_id: Uuid,
    #[validate(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[validate(length(min = 1))]
    pub comment: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplyRequest {
    #[validate(length(min = 1))]
    pub comment: String,
}

// ── Orders ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct OrderRequest {
    pub course_id: Uuid,
    pub payment_info: Option<serde_json::Value>,
}

// ── Layouts ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FaqItemDto {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDto {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct BannerDto {
    pub image: String,
    pub title: String,
    pub sub_title: String,
}

/// Carries the payload for whichever layout kind is named.
#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub kind: String,
    pub banner: Option<BannerDto>,
    pub faq: Option<Vec<FaqItemDto>>,
    pub categories: Option<Vec<CategoryDto>>,
}

impl LayoutRequest {
    /// Convert into the service input, checking the payload matches the
    /// declared kind.
    pub fn into_input(self) -> AppResult<LayoutInput> {
        let kind: learnhub_entity::layout::LayoutKind = self.kind.parse()?;
        match kind {
            learnhub_entity::layout::LayoutKind::Banner => {
                let banner = self
                    .banner
                    .ok_or_else(|| AppError::validation("Banner payload is required"))?;
                Ok(LayoutInput::Banner {
                    image: banner.image,
                    title: banner.title,
                    sub_title: banner.sub_title,
                })
            }
            learnhub_entity::layout::LayoutKind::Faq => {
                let items = self
                    .faq
                    .ok_or_else(|| AppError::validation("FAQ payload is required"))?;
                Ok(LayoutInput::Faq(
                    items
                        .into_iter()
                        .map(|f| FaqItem {
                            question: f.question,
                            answer: f.answer,
                        })
                        .collect(),
                ))
            }
            learnhub_entity::layout::LayoutKind::Categories => {
                let items = self
                    .categories
                    .ok_or_else(|| AppError::validation("Categories payload is required"))?;
                Ok(LayoutInput::Categories(
                    items
                        .into_iter()
                        .map(|c| Category { title: c.title })
                        .collect(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter42".to_string(),
        };
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_layout_request_kind_mismatch() {
        let req = LayoutRequest {
            kind: "faq".to_string(),
            banner: None,
            faq: None,
            categories: Some(vec![CategoryDto {
                title: "Rust".to_string(),
            }]),
        };
        assert!(req.into_input().is_err());
    }

    #[test]
    fn test_layout_request_faq() {
        let req = LayoutRequest {
            kind: "faq".to_string(),
            banner: None,
            faq: Some(vec![FaqItemDto {
                question: "Q?".to_string(),
                answer: "A.".to_string(),
            }]),
            categories: None,
        };
        assert!(matches!(req.into_input().unwrap(), LayoutInput::Faq(items) if items.len() == 1));
    }
}
