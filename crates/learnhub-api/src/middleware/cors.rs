//! CORS layer construction.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use learnhub_core::config::server::CorsConfig;

/// Build the CORS layer from configuration.
///
/// A lone `"*"` origin allows everyone but cannot carry credentials;
/// explicit origins get `Access-Control-Allow-Credentials` so the
/// session cookies flow. The two modes cannot be combined.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = config.allowed_origins.iter().any(|origin| origin == "*");

    if wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_builds_without_credentials() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
        };
        let _ = build_cors_layer(&config);
    }

    #[test]
    fn test_explicit_origins_with_credentials() {
        let config = CorsConfig {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "not a header value\u{7f}".to_string(),
            ],
        };
        let _ = build_cors_layer(&config);
    }
}
