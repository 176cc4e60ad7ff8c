//! LearnHub server entry point.
//!
//! Loads configuration, connects to the database, runs migrations and
//! hands off to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use learnhub_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("LEARNHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Starting LearnHub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = learnhub_database::connection::connect_with_retry(&config.database).await;

    tracing::info!("Running database migrations...");
    if let Err(e) = learnhub_database::migration::run_migrations(&db_pool).await {
        tracing::error!("Migration failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = learnhub_api::run_server(config, db_pool).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing from the logging configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
