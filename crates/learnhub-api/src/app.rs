//! Application assembly and server lifecycle.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use learnhub_auth::{ActivationCodec, SessionManager};
use learnhub_cache::provider::CacheManager;
use learnhub_core::config::AppConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_database::repositories::analytics::AnalyticsRepository;
use learnhub_database::repositories::course::CourseRepository;
use learnhub_database::repositories::layout::LayoutRepository;
use learnhub_database::repositories::notification::NotificationRepository;
use learnhub_database::repositories::order::OrderRepository;
use learnhub_database::repositories::user::UserRepository;
use learnhub_mail::MailManager;
use learnhub_media::MediaManager;
use learnhub_service::analytics::AnalyticsService;
use learnhub_service::course::CourseService;
use learnhub_service::layout::LayoutService;
use learnhub_service::notification::NotificationService;
use learnhub_service::order::OrderService;
use learnhub_service::user::UserService;
use learnhub_worker::jobs::NotificationSweepJob;
use learnhub_worker::scheduler::CronScheduler;

use crate::middleware::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Build the Axum application from an assembled state.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_mb * 1024 * 1024;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Wire every component and build the shared state.
pub async fn build_state(config: Arc<AppConfig>, db_pool: PgPool) -> AppResult<AppState> {
    let cache = Arc::new(CacheManager::new(&config.cache).await?);
    let mail = MailManager::new(&config.mail)?;
    let media = MediaManager::new(&config.media)?;

    let users = UserRepository::new(db_pool.clone());
    let courses = CourseRepository::new(db_pool.clone());
    let orders = OrderRepository::new(db_pool.clone());
    let notifications = NotificationRepository::new(db_pool.clone());
    let layouts = LayoutRepository::new(db_pool.clone());
    let analytics = AnalyticsRepository::new(db_pool.clone());

    let activation = ActivationCodec::new(&config.auth);
    let session_manager = SessionManager::new(&config.auth, cache.clone());

    let user_service = UserService::new(
        users.clone(),
        activation,
        session_manager.clone(),
        mail.clone(),
        media.clone(),
        config.auth.password_min_length,
    );
    let course_service = CourseService::new(
        courses.clone(),
        users.clone(),
        notifications.clone(),
        mail.clone(),
        media.clone(),
        cache.clone(),
    );
    let order_service = OrderService::new(
        orders,
        users,
        courses,
        notifications.clone(),
        mail,
        session_manager.clone(),
    );
    let notification_service = NotificationService::new(notifications);
    let layout_service = LayoutService::new(layouts, media);
    let analytics_service = AnalyticsService::new(analytics);

    Ok(AppState {
        config,
        db_pool,
        cache,
        session_manager: Arc::new(session_manager),
        user_service: Arc::new(user_service),
        course_service: Arc::new(course_service),
        order_service: Arc::new(order_service),
        notification_service: Arc::new(notification_service),
        layout_service: Arc::new(layout_service),
        analytics_service: Arc::new(analytics_service),
    })
}

/// Run the HTTP server until shutdown, with the background scheduler
/// alongside it when enabled.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let config = Arc::new(config);
    let state = build_state(config.clone(), db_pool.clone()).await?;
    let app = build_app(state);

    let mut scheduler = None;
    if config.worker.enabled {
        let sched = CronScheduler::new().await?;
        let sweep = NotificationSweepJob::new(
            NotificationRepository::new(db_pool),
            config.worker.notification_retention_days as u32,
        );
        sched
            .register_notification_sweep(sweep, &config.worker.sweep_schedule)
            .await?;
        sched.start().await?;
        scheduler = Some(sched);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(mut sched) = scheduler {
        sched.shutdown().await?;
    }

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
