//! Cache key builders for all LearnHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use uuid::Uuid;

/// Cache key for the account mirror written at login.
pub fn user_by_id(user_id: Uuid) -> String {
    format!("user:{user_id}")
}

/// Cache key for the public view of a single course.
pub fn course_by_id(course_id: Uuid) -> String {
    format!("course:{course_id}")
}

/// Cache key for the public course list.
pub fn course_list() -> String {
    "course:all".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key() {
        let id = Uuid::nil();
        assert_eq!(
            user_by_id(id),
            "user:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_course_keys() {
        let id = Uuid::nil();
        assert_eq!(
            course_by_id(id),
            "course:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(course_list(), "course:all");
    }
}
