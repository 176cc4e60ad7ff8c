//! Purchase flow: ownership check, order row, confirmation mail, course
//! grant and the admin notification.

use tracing::info;
use uuid::Uuid;

use learnhub_auth::session::SessionManager;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::mail::MailTransport;
use learnhub_database::repositories::course::CourseRepository;
use learnhub_database::repositories::notification::NotificationRepository;
use learnhub_database::repositories::order::OrderRepository;
use learnhub_database::repositories::user::UserRepository;
use learnhub_entity::order::Order;
use learnhub_mail::templates;
use learnhub_mail::MailManager;

use crate::context::RequestContext;

/// Order service.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: OrderRepository,
    users: UserRepository,
    courses: CourseRepository,
    notifications: NotificationRepository,
    mail: MailManager,
    sessions: SessionManager,
}

impl OrderService {
    /// Create a new order service.
    pub fn new(
        orders: OrderRepository,
        users: UserRepository,
        courses: CourseRepository,
        notifications: NotificationRepository,
        mail: MailManager,
        sessions: SessionManager,
    ) -> Self {
        Self {
            orders,
            users,
            courses,
            notifications,
            mail,
            sessions,
        }
    }

    /// Purchase a course for the caller.
    ///
    /// Ownership is checked against the database, not the session mirror,
    /// so a stale mirror cannot enable a double purchase through this
    /// path. Two simultaneous purchases of the same course can still both
    /// pass the check.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        payment_info: Option<serde_json::Value>,
    ) -> AppResult<Order> {
        let owned = self.users.course_ids(ctx.user_id()).await?;
        if owned.contains(&course_id) {
            return Err(AppError::validation(
                "You have already purchased this course",
            ));
        }

        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        let order = self
            .orders
            .insert(ctx.user_id(), course_id, payment_info)
            .await?;

        let order_ref: String = course.id.to_string().chars().take(6).collect();
        let date = order.created_at.format("%B %d, %Y").to_string();
        self.mail
            .send(&templates::order_confirmation(
                ctx.email(),
                ctx.name(),
                &order_ref,
                &course.name,
                course.price,
                &date,
            ))
            .await?;

        self.users.grant_course(ctx.user_id(), course_id).await?;

        let mut profile = ctx.profile.clone();
        profile.courses.push(course_id);
        self.sessions.mirror(&profile).await?;

        self.notifications
            .insert(
                ctx.user_id(),
                "New Order",
                &format!("You have a new order from {}", course.name),
            )
            .await?;

        self.courses.increment_purchased(course_id).await?;

        info!(order_id = %order.id, user_id = %ctx.user_id(), course_id = %course_id, "Order placed");
        Ok(order)
    }

    /// List all orders, newest first. Admin only.
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.orders.find_all().await
    }
}
