//! Course repository: the course row, its sections, and the question /
//! review threads hanging off them.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::course::view::{CourseDetail, QuestionThread, ReviewThread, SectionContent};
use learnhub_entity::course::{
    Course, CourseQuestion, CourseReview, CourseSection, QuestionAnswer, ReviewReply,
};

/// Repository for courses and their owned child collections.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a course row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find course", e))
    }

    /// List all course rows, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))
    }

    /// Load the full aggregate: course, ordered sections, question threads
    /// and review threads.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<CourseDetail>> {
        let Some(course) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let sections = sqlx::query_as::<_, CourseSection>(
            "SELECT * FROM course_sections WHERE course_id = $1 ORDER BY position, created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load sections", e))?;

        let questions = sqlx::query_as::<_, CourseQuestion>(
            "SELECT q.* FROM course_questions q
             JOIN course_sections s ON q.section_id = s.id
             WHERE s.course_id = $1 ORDER BY q.created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load questions", e))?;

        let answers = sqlx::query_as::<_, QuestionAnswer>(
            "SELECT a.* FROM question_answers a
             JOIN course_questions q ON a.question_id = q.id
             JOIN course_sections s ON q.section_id = s.id
             WHERE s.course_id = $1 ORDER BY a.created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load answers", e))?;

        let reviews = sqlx::query_as::<_, CourseReview>(
            "SELECT * FROM course_reviews WHERE course_id = $1 ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load reviews", e))?;

        let replies = sqlx::query_as::<_, ReviewReply>(
            "SELECT p.* FROM review_replies p
             JOIN course_reviews r ON p.review_id = r.id
             WHERE r.course_id = $1 ORDER BY p.created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load replies", e))?;

        Ok(Some(assemble_detail(
            course, sections, questions, answers, reviews, replies,
        )))
    }

    /// Insert a course row.
    pub async fn insert(&self, course: &Course) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO courses (id, name, description, price, estimated_price,
                 thumbnail_public_id, thumbnail_url, tags, level, demo_url,
                 benefits, prerequisites, ratings, purchased, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.price)
        .bind(course.estimated_price)
        .bind(&course.thumbnail_public_id)
        .bind(&course.thumbnail_url)
        .bind(&course.tags)
        .bind(&course.level)
        .bind(&course.demo_url)
        .bind(&course.benefits)
        .bind(&course.prerequisites)
        .bind(course.ratings)
        .bind(course.purchased)
        .bind(course.created_at)
        .bind(course.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert course", e))?;
        Ok(())
    }

    /// Update a course row's editable fields.
    pub async fn update(&self, course: &Course) -> AppResult<()> {
        sqlx::query(
            "UPDATE courses SET name = $2, description = $3, price = $4, estimated_price = $5,
                 thumbnail_public_id = $6, thumbnail_url = $7, tags = $8, level = $9,
                 demo_url = $10, benefits = $11, prerequisites = $12, updated_at = $13
             WHERE id = $1",
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.price)
        .bind(course.estimated_price)
        .bind(&course.thumbnail_public_id)
        .bind(&course.thumbnail_url)
        .bind(&course.tags)
        .bind(&course.level)
        .bind(&course.demo_url)
        .bind(&course.benefits)
        .bind(&course.prerequisites)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update course", e))?;
        Ok(())
    }

    /// Delete a course. Child collections cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete course", e))?;
        Ok(())
    }

    /// Bump the purchase counter.
    pub async fn increment_purchased(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE courses SET purchased = purchased + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment purchases", e)
            })?;
        Ok(())
    }

    // ── Sections ───────────────────────────────────────────────

    /// Find a section by primary key.
    pub async fn section_by_id(&self, id: Uuid) -> AppResult<Option<CourseSection>> {
        sqlx::query_as::<_, CourseSection>("SELECT * FROM course_sections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find section", e))
    }

    /// Insert a content section.
    pub async fn insert_section(&self, section: &CourseSection) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO course_sections (id, course_id, title, description, video_url,
                 video_length, video_player, suggestion, links, position, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(section.id)
        .bind(section.course_id)
        .bind(&section.title)
        .bind(&section.description)
        .bind(&section.video_url)
        .bind(section.video_length)
        .bind(&section.video_player)
        .bind(&section.suggestion)
        .bind(&section.links)
        .bind(section.position)
        .bind(section.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert section", e))?;
        Ok(())
    }

    /// Update a content section.
    pub async fn update_section(&self, section: &CourseSection) -> AppResult<()> {
        sqlx::query(
            "UPDATE course_sections SET title = $2, description = $3, video_url = $4,
                 video_length = $5, video_player = $6, suggestion = $7, links = $8, position = $9
             WHERE id = $1",
        )
        .bind(section.id)
        .bind(&section.title)
        .bind(&section.description)
        .bind(&section.video_url)
        .bind(section.video_length)
        .bind(&section.video_player)
        .bind(&section.suggestion)
        .bind(&section.links)
        .bind(section.position)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update section", e))?;
        Ok(())
    }

    // ── Threads ────────────────────────────────────────────────

    /// Insert a question under a section.
    pub async fn insert_question(&self, question: &CourseQuestion) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO course_questions (id, section_id, user_id, user_name, question, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(question.id)
        .bind(question.section_id)
        .bind(question.user_id)
        .bind(&question.user_name)
        .bind(&question.question)
        .bind(question.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert question", e))?;
        Ok(())
    }

    /// Find a question by primary key.
    pub async fn question_by_id(&self, id: Uuid) -> AppResult<Option<CourseQuestion>> {
        sqlx::query_as::<_, CourseQuestion>("SELECT * FROM course_questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find question", e))
    }

    /// Insert an answer to a question.
    pub async fn insert_answer(&self, answer: &QuestionAnswer) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO question_answers (id, question_id, user_id, user_name, answer, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(answer.id)
        .bind(answer.question_id)
        .bind(answer.user_id)
        .bind(&answer.user_name)
        .bind(&answer.answer)
        .bind(answer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert answer", e))?;
        Ok(())
    }

    /// Insert a course review.
    pub async fn insert_review(&self, review: &CourseReview) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO course_reviews (id, course_id, user_id, user_name, rating, comment, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(review.id)
        .bind(review.course_id)
        .bind(review.user_id)
        .bind(&review.user_name)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert review", e))?;
        Ok(())
    }

    /// Find a review by primary key.
    pub async fn review_by_id(&self, id: Uuid) -> AppResult<Option<CourseReview>> {
        sqlx::query_as::<_, CourseReview>("SELECT * FROM course_reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    /// Insert a staff reply to a review.
    pub async fn insert_reply(&self, reply: &ReviewReply) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO review_replies (id, review_id, user_id, user_name, comment, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(reply.id)
        .bind(reply.review_id)
        .bind(reply.user_id)
        .bind(&reply.user_name)
        .bind(&reply.comment)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert reply", e))?;
        Ok(())
    }

    /// Average rating across a course's reviews, 0 when there are none.
    pub async fn average_rating(&self, course_id: Uuid) -> AppResult<f64> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(AVG(rating), 0) FROM course_reviews WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to average ratings", e))
    }

    /// Store the recomputed rating aggregate.
    pub async fn update_ratings(&self, course_id: Uuid, ratings: f64) -> AppResult<()> {
        sqlx::query("UPDATE courses SET ratings = $2, updated_at = $3 WHERE id = $1")
            .bind(course_id)
            .bind(ratings)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update ratings", e))?;
        Ok(())
    }
}

/// Group flat child rows into the nested aggregate.
fn assemble_detail(
    course: Course,
    sections: Vec<CourseSection>,
    questions: Vec<CourseQuestion>,
    answers: Vec<QuestionAnswer>,
    reviews: Vec<CourseReview>,
    replies: Vec<ReviewReply>,
) -> CourseDetail {
    let mut answers_by_question: HashMap<Uuid, Vec<QuestionAnswer>> = HashMap::new();
    for answer in answers {
        answers_by_question
            .entry(answer.question_id)
            .or_default()
            .push(answer);
    }

    let mut threads_by_section: HashMap<Uuid, Vec<QuestionThread>> = HashMap::new();
    for question in questions {
        let answers = answers_by_question.remove(&question.id).unwrap_or_default();
        threads_by_section
            .entry(question.section_id)
            .or_default()
            .push(QuestionThread { question, answers });
    }

    let sections = sections
        .into_iter()
        .map(|section| {
            let questions = threads_by_section.remove(&section.id).unwrap_or_default();
            SectionContent { section, questions }
        })
        .collect();

    let mut replies_by_review: HashMap<Uuid, Vec<ReviewReply>> = HashMap::new();
    for reply in replies {
        replies_by_review
            .entry(reply.review_id)
            .or_default()
            .push(reply);
    }

    let reviews = reviews
        .into_iter()
        .map(|review| {
            let replies = replies_by_review.remove(&review.id).unwrap_or_default();
            ReviewThread { review, replies }
        })
        .collect();

    CourseDetail {
        course,
        sections,
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn course(id: Uuid) -> Course {
        Course {
            id,
            name: "Rust 101".to_string(),
            description: String::new(),
            price: 10.0,
            estimated_price: None,
            thumbnail_public_id: None,
            thumbnail_url: None,
            tags: String::new(),
            level: String::new(),
            demo_url: String::new(),
            benefits: Json(vec![]),
            prerequisites: Json(vec![]),
            ratings: 0.0,
            purchased: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn section(id: Uuid, course_id: Uuid, position: i32) -> CourseSection {
        CourseSection {
            id,
            course_id,
            title: format!("Section {position}"),
            description: String::new(),
            video_url: String::new(),
            video_length: 0.0,
            video_player: String::new(),
            suggestion: String::new(),
            links: Json(vec![]),
            position,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_assemble_groups_threads_under_their_rows() {
        let course_id = Uuid::new_v4();
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let q1 = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let detail = assemble_detail(
            course(course_id),
            vec![section(s1, course_id, 0), section(s2, course_id, 1)],
            vec![CourseQuestion {
                id: q1,
                section_id: s1,
                user_id,
                user_name: "Ada".to_string(),
                question: "Why?".to_string(),
                created_at: Utc::now(),
            }],
            vec![QuestionAnswer {
                id: Uuid::new_v4(),
                question_id: q1,
                user_id,
                user_name: "Grace".to_string(),
                answer: "Because.".to_string(),
                created_at: Utc::now(),
            }],
            vec![],
            vec![],
        );

        assert_eq!(detail.sections.len(), 2);
        assert_eq!(detail.sections[0].questions.len(), 1);
        assert_eq!(detail.sections[0].questions[0].answers.len(), 1);
        assert!(detail.sections[1].questions.is_empty());
    }

    #[test]
    fn test_assemble_attaches_replies_to_reviews() {
        let course_id = Uuid::new_v4();
        let review_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let detail = assemble_detail(
            course(course_id),
            vec![],
            vec![],
            vec![],
            vec![CourseReview {
                id: review_id,
                course_id,
                user_id,
                user_name: "Ada".to_string(),
                rating: 4.0,
                comment: "Solid".to_string(),
                created_at: Utc::now(),
            }],
            vec![ReviewReply {
                id: Uuid::new_v4(),
                review_id,
                user_id,
                user_name: "Staff".to_string(),
                comment: "Thanks!".to_string(),
                created_at: Utc::now(),
            }],
        );

        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].replies.len(), 1);
    }
}
