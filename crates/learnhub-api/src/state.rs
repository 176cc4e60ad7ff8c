//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use learnhub_auth::session::manager::SessionManager;
use learnhub_cache::provider::CacheManager;
use learnhub_core::config::AppConfig;

use learnhub_service::analytics::service::AnalyticsService;
use learnhub_service::course::service::CourseService;
use learnhub_service::layout::service::LayoutService;
use learnhub_service::notification::service::NotificationService;
use learnhub_service::order::service::OrderService;
use learnhub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Account service
    pub user_service: Arc<UserService>,
    /// Course service
    pub course_service: Arc<CourseService>,
    /// Order service
    pub order_service: Arc<OrderService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// Layout service
    pub layout_service: Arc<LayoutService>,
    /// Analytics service
    pub analytics_service: Arc<AnalyticsService>,
}
