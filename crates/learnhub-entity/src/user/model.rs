//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// An account on the platform.
///
/// The password hash never leaves the server: it is skipped during
/// serialization, so API responses and the cache mirror both omit it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash. `None` for accounts created via social auth.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    /// Avatar identifier on the media host.
    pub avatar_public_id: Option<String>,
    /// Avatar delivery URL.
    pub avatar_url: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Whether the activation code was confirmed.
    pub is_verified: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

/// An account together with the courses it owns.
///
/// This is the value mirrored into the cache at login and attached to
/// every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// The account record.
    #[serde(flatten)]
    pub user: User,
    /// Ids of purchased courses.
    pub courses: Vec<Uuid>,
}

impl UserProfile {
    /// Build a profile from an account and its owned course ids.
    pub fn new(user: User, courses: Vec<Uuid>) -> Self {
        Self { user, courses }
    }

    /// Check whether the account owns the given course.
    pub fn owns_course(&self, course_id: Uuid) -> bool {
        self.courses.contains(&course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
            avatar_public_id: None,
            avatar_url: None,
            role: UserRole::User,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_profile_roundtrips_without_hash() {
        let course_id = Uuid::new_v4();
        let profile = UserProfile::new(sample_user(), vec![course_id]);
        let json = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.user.email, "ada@example.com");
        assert!(restored.user.password_hash.is_none());
        assert!(restored.owns_course(course_id));
    }

    #[test]
    fn test_owns_course() {
        let profile = UserProfile::new(sample_user(), vec![]);
        assert!(!profile.owns_course(Uuid::new_v4()));
    }
}
