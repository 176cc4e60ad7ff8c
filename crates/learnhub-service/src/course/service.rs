//! Course catalog: admin CRUD, cached public reads, owner-gated content
//! and the question / review threads.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sqlx::types::Json;
use tracing::info;
use uuid::Uuid;

use learnhub_cache::provider::CacheManager;
use learnhub_cache::{keys, read_through};
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::cache::CacheProvider;
use learnhub_core::traits::mail::MailTransport;
use learnhub_core::traits::media::MediaStore;
use learnhub_database::repositories::course::CourseRepository;
use learnhub_database::repositories::notification::NotificationRepository;
use learnhub_database::repositories::user::UserRepository;
use learnhub_entity::course::view::{CourseDetail, CoursePublic, SectionContent};
use learnhub_entity::course::{
    Course, CourseItem, CourseLink, CourseQuestion, CourseReview, CourseSection, QuestionAnswer,
    ReviewReply,
};
use learnhub_mail::templates;
use learnhub_mail::MailManager;
use learnhub_media::MediaManager;

use crate::context::RequestContext;

/// TTL for the single-course cache entry refreshed after a review.
const REVIEW_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Editable course fields as accepted from the admin surface.
#[derive(Debug, Clone)]
pub struct CourseInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub estimated_price: Option<f64>,
    pub tags: String,
    pub level: String,
    pub demo_url: String,
    pub benefits: Vec<CourseItem>,
    pub prerequisites: Vec<CourseItem>,
    /// Base64 data URI for a new thumbnail, or an existing http(s) URL to
    /// keep the current one on edit.
    pub thumbnail: Option<String>,
    pub sections: Vec<SectionInput>,
}

/// One content section in a course submission.
#[derive(Debug, Clone)]
pub struct SectionInput {
    /// Present when editing an existing section.
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_length: f64,
    pub video_player: String,
    pub suggestion: String,
    pub links: Vec<CourseLink>,
}

/// Course service.
#[derive(Debug, Clone)]
pub struct CourseService {
    courses: CourseRepository,
    users: UserRepository,
    notifications: NotificationRepository,
    mail: MailManager,
    media: MediaManager,
    cache: Arc<CacheManager>,
}

impl CourseService {
    /// Create a new course service.
    pub fn new(
        courses: CourseRepository,
        users: UserRepository,
        notifications: NotificationRepository,
        mail: MailManager,
        media: MediaManager,
        cache: Arc<CacheManager>,
    ) -> Self {
        Self {
            courses,
            users,
            notifications,
            mail,
            media,
            cache,
        }
    }

    /// Create a course with its sections. Admin only.
    pub async fn create(&self, input: CourseInput) -> AppResult<Course> {
        let (thumbnail_public_id, thumbnail_url) = match input.thumbnail.as_deref() {
            Some(data_uri) => {
                let asset = self.media.upload("courses", data_uri).await?;
                (Some(asset.public_id), Some(asset.url))
            }
            None => (None, None),
        };

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            estimated_price: input.estimated_price,
            thumbnail_public_id,
            thumbnail_url,
            tags: input.tags,
            level: input.level,
            demo_url: input.demo_url,
            benefits: Json(input.benefits),
            prerequisites: Json(input.prerequisites),
            ratings: 0.0,
            purchased: 0,
            created_at: now,
            updated_at: now,
        };
        self.courses.insert(&course).await?;

        for (position, section) in input.sections.into_iter().enumerate() {
            self.courses
                .insert_section(&build_section(course.id, section, position as i32))
                .await?;
        }

        info!(course_id = %course.id, name = %course.name, "Course created");
        Ok(course)
    }

    /// Edit a course. Sections with an id are updated in place; sections
    /// without one are appended. Admin only.
    pub async fn edit(&self, course_id: Uuid, input: CourseInput) -> AppResult<Course> {
        let mut course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        if let Some(thumbnail) = input.thumbnail.as_deref() {
            // An http(s) value means the client kept the existing image.
            if !thumbnail.starts_with("http") {
                if let Some(public_id) = &course.thumbnail_public_id {
                    self.media.destroy(public_id).await?;
                }
                let asset = self.media.upload("courses", thumbnail).await?;
                course.thumbnail_public_id = Some(asset.public_id);
                course.thumbnail_url = Some(asset.url);
            }
        }

        course.name = input.name;
        course.description = input.description;
        course.price = input.price;
        course.estimated_price = input.estimated_price;
        course.tags = input.tags;
        course.level = input.level;
        course.demo_url = input.demo_url;
        course.benefits = Json(input.benefits);
        course.prerequisites = Json(input.prerequisites);
        self.courses.update(&course).await?;

        for (position, section) in input.sections.into_iter().enumerate() {
            match section.id {
                Some(id) => {
                    let mut existing = self
                        .courses
                        .section_by_id(id)
                        .await?
                        .ok_or_else(|| AppError::validation("Invalid section id"))?;
                    if existing.course_id != course_id {
                        return Err(AppError::validation("Invalid section id"));
                    }
                    existing.title = section.title;
                    existing.description = section.description;
                    existing.video_url = section.video_url;
                    existing.video_length = section.video_length;
                    existing.video_player = section.video_player;
                    existing.suggestion = section.suggestion;
                    existing.links = Json(section.links);
                    existing.position = position as i32;
                    self.courses.update_section(&existing).await?;
                }
                None => {
                    self.courses
                        .insert_section(&build_section(course_id, section, position as i32))
                        .await?;
                }
            }
        }

        info!(course_id = %course.id, "Course edited");
        Ok(course)
    }

    /// Public view of a single course, cached without expiry.
    pub async fn get_public(&self, course_id: Uuid) -> AppResult<CoursePublic> {
        read_through(&self.cache, &keys::course_by_id(course_id), || async {
            let detail = self
                .courses
                .find_detail(course_id)
                .await?
                .ok_or_else(|| AppError::not_found("Course not found"))?;
            Ok(CoursePublic::from(detail))
        })
        .await
    }

    /// Public course list, cached without expiry.
    pub async fn list_public(&self) -> AppResult<Vec<Course>> {
        read_through(&self.cache, &keys::course_list(), || async {
            self.courses.find_all().await
        })
        .await
    }

    /// Full section content for a course the caller owns.
    pub async fn content(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
    ) -> AppResult<Vec<SectionContent>> {
        self.check_eligibility(ctx, course_id)?;
        let detail = self
            .courses
            .find_detail(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;
        Ok(detail.sections)
    }

    /// Ask a question under a section. Raises an admin notification.
    pub async fn add_question(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        section_id: Uuid,
        question: &str,
    ) -> AppResult<CourseDetail> {
        self.check_eligibility(ctx, course_id)?;
        let section = self.find_section(course_id, section_id).await?;

        self.courses
            .insert_question(&CourseQuestion {
                id: Uuid::new_v4(),
                section_id,
                user_id: ctx.user_id(),
                user_name: ctx.name().to_string(),
                question: question.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        self.notifications
            .insert(
                ctx.user_id(),
                "New Question Received",
                &format!("You have a new question in {}", section.title),
            )
            .await?;

        self.require_detail(course_id).await
    }

    /// Answer a question. The question author is notified: in-app when
    /// they answered themselves, by email otherwise.
    pub async fn add_answer(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        section_id: Uuid,
        question_id: Uuid,
        answer: &str,
    ) -> AppResult<CourseDetail> {
        self.check_eligibility(ctx, course_id)?;
        let section = self.find_section(course_id, section_id).await?;
        let question = self
            .courses
            .question_by_id(question_id)
            .await?
            .filter(|q| q.section_id == section_id)
            .ok_or_else(|| AppError::validation("Invalid question id"))?;

        self.courses
            .insert_answer(&QuestionAnswer {
                id: Uuid::new_v4(),
                question_id,
                user_id: ctx.user_id(),
                user_name: ctx.name().to_string(),
                answer: answer.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        if ctx.user_id() == question.user_id {
            self.notifications
                .insert(
                    ctx.user_id(),
                    "New Question Reply Received",
                    &format!("You have a new question reply in {}", section.title),
                )
                .await?;
        } else {
            let author = self
                .users
                .find_by_id(question.user_id)
                .await?
                .ok_or_else(|| AppError::not_found("User not found"))?;
            let course = self
                .courses
                .find_by_id(course_id)
                .await?
                .ok_or_else(|| AppError::not_found("Course not found"))?;
            self.mail
                .send(&templates::question_reply(
                    &author.email,
                    &author.name,
                    &course.name,
                    &question.question,
                ))
                .await?;
        }

        self.require_detail(course_id).await
    }

    /// Leave a review, recomputing the course's rating aggregate. The
    /// cached course entry is refreshed with a bounded TTL.
    pub async fn add_review(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        rating: f64,
        comment: &str,
    ) -> AppResult<CourseDetail> {
        self.check_eligibility(ctx, course_id)?;
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.courses
            .insert_review(&CourseReview {
                id: Uuid::new_v4(),
                course_id,
                user_id: ctx.user_id(),
                user_name: ctx.name().to_string(),
                rating,
                comment: comment.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        let average = self.courses.average_rating(course_id).await?;
        self.courses.update_ratings(course_id, average).await?;

        self.notifications
            .insert(
                ctx.user_id(),
                "New Review Received",
                &format!("{} has given a review in {}", ctx.name(), course.name),
            )
            .await?;

        let detail = self.require_detail(course_id).await?;
        self.cache
            .set_json(
                &keys::course_by_id(course_id),
                &CoursePublic::from(detail.clone()),
                REVIEW_REFRESH_TTL,
            )
            .await?;
        Ok(detail)
    }

    /// Reply to a review. Admin only.
    pub async fn add_reply(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        review_id: Uuid,
        comment: &str,
    ) -> AppResult<CourseDetail> {
        let review = self
            .courses
            .review_by_id(review_id)
            .await?
            .filter(|r| r.course_id == course_id)
            .ok_or_else(|| AppError::not_found("Review not found"))?;

        self.courses
            .insert_reply(&ReviewReply {
                id: Uuid::new_v4(),
                review_id: review.id,
                user_id: ctx.user_id(),
                user_name: ctx.name().to_string(),
                comment: comment.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        self.require_detail(course_id).await
    }

    /// List all course rows. Admin only.
    pub async fn list_admin(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    /// Delete a course and drop its cache entry. Admin only.
    pub async fn delete(&self, course_id: Uuid) -> AppResult<()> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.courses.delete(course_id).await?;
        self.cache.delete(&keys::course_by_id(course_id)).await?;
        info!(course_id = %course_id, "Course deleted");
        Ok(())
    }

    /// Owners and admins may reach restricted course content.
    fn check_eligibility(&self, ctx: &RequestContext, course_id: Uuid) -> AppResult<()> {
        if ctx.is_admin() || ctx.owns_course(course_id) {
            return Ok(());
        }
        Err(AppError::not_found(
            "You are not eligible to access this course",
        ))
    }

    async fn find_section(&self, course_id: Uuid, section_id: Uuid) -> AppResult<CourseSection> {
        self.courses
            .section_by_id(section_id)
            .await?
            .filter(|s| s.course_id == course_id)
            .ok_or_else(|| AppError::validation("Invalid section id"))
    }

    async fn require_detail(&self, course_id: Uuid) -> AppResult<CourseDetail> {
        self.courses
            .find_detail(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))
    }
}

fn build_section(course_id: Uuid, input: SectionInput, position: i32) -> CourseSection {
    CourseSection {
        id: Uuid::new_v4(),
        course_id,
        title: input.title,
        description: input.description,
        video_url: input.video_url,
        video_length: input.video_length,
        video_player: input.video_player,
        suggestion: input.suggestion,
        links: Json(input.links),
        position,
        created_at: Utc::now(),
    }
}
