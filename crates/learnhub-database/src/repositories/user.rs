//! User repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::user::model::CreateUser;
use learnhub_entity::user::{User, UserRole};

/// Repository for account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert a new account.
    pub async fn insert(&self, params: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, avatar_url, is_verified, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.password_hash)
        .bind(&params.avatar_url)
        .bind(params.is_verified)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert user", e))
    }

    /// Update name and email.
    pub async fn update_profile(&self, id: Uuid, name: &str, email: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, email = $3, updated_at = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))
    }

    /// Replace the stored password hash.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = $3 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;
        Ok(())
    }

    /// Replace the avatar asset.
    pub async fn update_avatar(
        &self,
        id: Uuid,
        public_id: &str,
        url: &str,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET avatar_public_id = $2, avatar_url = $3, updated_at = $4
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(public_id)
        .bind(url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update avatar", e))
    }

    /// Change an account's role.
    pub async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(role)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update role", e))
    }

    /// List all accounts, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Ids of the courses an account owns, in purchase order.
    pub async fn course_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT course_id FROM user_courses WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list owned courses", e)
        })
    }

    /// Record course ownership after a purchase.
    pub async fn grant_course(&self, user_id: Uuid, course_id: Uuid) -> AppResult<()> {
        sqlx::query("INSERT INTO user_courses (user_id, course_id, created_at) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(course_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to grant course", e))?;
        Ok(())
    }
}
