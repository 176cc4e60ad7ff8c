//! Response DTOs.
//!
//! Every body carries a `success` flag so clients can branch without
//! inspecting the status code.

use serde::Serialize;

use learnhub_entity::analytics::MonthlySeries;
use learnhub_entity::course::{Course, CourseDetail, CoursePublic, SectionContent};
use learnhub_entity::layout::Layout;
use learnhub_entity::notification::Notification;
use learnhub_entity::order::Order;
use learnhub_entity::user::{User, UserProfile};

/// A bare acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Returned by login, activation and social auth. The tokens also travel
/// in cookies; the access token is duplicated in the body for clients
/// that prefer an Authorization header.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserProfile,
    pub access_token: String,
}

/// Returned by register: the opaque activation token the client must
/// present together with the mailed code.
#[derive(Debug, Serialize)]
pub struct ActivationResponse {
    pub success: bool,
    pub activation_token: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub success: bool,
    pub course: Course,
}

#[derive(Debug, Serialize)]
pub struct CoursePublicResponse {
    pub success: bool,
    pub course: CoursePublic,
}

#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub success: bool,
    pub course: CourseDetail,
}

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub success: bool,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub success: bool,
    pub content: Vec<SectionContent>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub success: bool,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub success: bool,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub success: bool,
    pub analytics: MonthlySeries,
}

/// Liveness report for the service and its backing stores.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub database: bool,
    pub cache: bool,
}
