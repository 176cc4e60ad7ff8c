//! Per-request identity resolved from the session mirror.

use uuid::Uuid;

use learnhub_entity::user::{UserProfile, UserRole};

/// The authenticated caller attached to a request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The mirrored profile looked up during authorization.
    pub profile: UserProfile,
}

impl RequestContext {
    /// Wrap a resolved profile.
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    /// Caller's account id.
    pub fn user_id(&self) -> Uuid {
        self.profile.user.id
    }

    /// Caller's display name.
    pub fn name(&self) -> &str {
        &self.profile.user.name
    }

    /// Caller's email address.
    pub fn email(&self) -> &str {
        &self.profile.user.email
    }

    /// Caller's role.
    pub fn role(&self) -> UserRole {
        self.profile.user.role
    }

    /// Whether the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.profile.user.role.is_admin()
    }

    /// Whether the caller owns the given course.
    pub fn owns_course(&self, course_id: Uuid) -> bool {
        self.profile.owns_course(course_id)
    }
}
