//! HTTP service for Lumen image uploads.
//!
//! Accepts multipart uploads, stores each file at the media provider,
//! persists one metadata record per file and serves optimized and
//! responsive delivery URLs.
//!
//! # Routes
//!
//! - `POST /api/images/upload`: multipart upload, up to 10 images of 10 MB
//! - `GET /api/images`: every record, newest first
//! - `GET /api/images/:id/optimized`: a URL chosen by `width`, `height`,
//!   `quality`, `format` and `size` query parameters
//! - `GET /health`: liveness check
//!
//! # Example
//!
//! ```rust,no_run
//! use lumen_cdn::{CloudinaryClient, UrlBuilder};
//! use lumen_database::MemoryImageRepository;
//! use lumen_server::{AppState, ServerConfig, create_router};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(
//!     Arc::new(CloudinaryClient::new(config.cdn().clone())),
//!     Arc::new(MemoryImageRepository::new()),
//!     UrlBuilder::new(config.cdn()),
//!     *config.limits(),
//! );
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod handlers;
mod multipart;
mod orchestrator;
mod query;
mod response;
mod router;
mod state;

pub use config::{
    DEFAULT_PORT, DEVELOPMENT_ORIGIN, Environment, ServerConfig, ServerConfigBuilder,
    ServerConfigBuilderError, UploadLimits, UploadLimitsBuilder, UploadLimitsBuilderError,
};
pub use error::{
    ApiError, ErrorBody, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE, ROUTE_NOT_FOUND_MESSAGE,
    UPLOAD_FAILED_MESSAGE,
};
pub use handlers::{
    get_optimized_image, health_check, list_images, route_not_found, upload_images,
};
pub use multipart::read_uploads;
pub use orchestrator::UploadOrchestrator;
pub use query::{OptimizeOptions, OptimizeQuery, select_url};
pub use response::{ApiResponse, ImageResponse, OptimizedImage};
pub use router::{create_router, with_middleware};
pub use state::AppState;
