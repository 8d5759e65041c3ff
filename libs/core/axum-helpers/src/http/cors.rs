use axum::http::{HeaderValue, Method, header};
use core_config::server::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Builds the CORS layer for the configured origins.
///
/// An empty origin list accepts any origin. Origins that are not valid header
/// values are skipped with a warning; if none survive, the layer falls back to
/// accepting any origin.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_permissive() {
        info!("CORS configured to allow any origin");
        return create_permissive_cors_layer();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        warn!("No valid CORS origins configured, allowing any origin");
        return create_permissive_cors_layer();
    }

    info!(origins = ?config.allowed_origins, "CORS configured with allowed origins");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Accepts any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
