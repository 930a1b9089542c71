//! Routes and middleware.

use crate::AppState;
use crate::handlers::{
    get_optimized_image, health_check, list_images, route_not_found, upload_images,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use lumen_error::ConfigError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Creates the API router.
///
/// Image routes live under `/api/images`; `/health` sits at the root.
/// Unmatched paths get the JSON error body.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.limits().body_limit();

    let images = Router::new()
        .route("/upload", post(upload_images))
        .route("/", get(list_images))
        .route("/:id/optimized", get(get_optimized_image))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/images", images)
        .fallback(route_not_found)
        .with_state(state)
}

/// Wrap a router with CORS, security headers and compression.
///
/// Only `origin` may make credentialed cross-origin requests.
pub fn with_middleware(router: Router, origin: &str) -> Result<Router, ConfigError> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ConfigError::new(format!("Invalid CORS origin {}: {}", origin, e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(router
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-xss-protection"),
            HeaderValue::from_static("0"),
        ))
        .layer(CompressionLayer::new())
        .layer(cors))
}
