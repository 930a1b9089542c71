//! Media provider integration for Lumen.
//!
//! This crate owns everything that speaks the provider's conventions:
//!
//! - **URL building**: deterministic delivery URLs from an asset id and
//!   transformation parameters
//! - **Responsive variants**: the fixed thumbnail/small/medium/large/original
//!   presets, on-demand custom URLs and modern-format URLs
//! - **Storage adapter**: signed uploads with the universal ingest preset
//! - **Metadata lookup**: authoritative width/height/format/bytes per asset
//!
//! # Example
//!
//! ```rust
//! use lumen_cdn::{CdnConfigBuilder, UrlBuilder};
//!
//! let config = CdnConfigBuilder::default()
//!     .cloud_name("demo")
//!     .api_key("key")
//!     .api_secret("secret")
//!     .build()
//!     .unwrap();
//! let urls = UrlBuilder::new(&config);
//!
//! let variants = urls.generate_variants("my-images/1700000000000-42");
//! assert!(variants.thumbnail.contains("c_fill"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod ingest;
mod provider;
mod signing;
mod transform;
mod url;
mod variants;

pub use client::{CloudinaryClient, ResourceResponse};
pub use config::{
    CdnConfig, CdnConfigBuilder, CdnConfigBuilderError, DEFAULT_API_BASE, DEFAULT_DELIVERY_HOST,
    DEFAULT_UPLOAD_FOLDER,
};
pub use ingest::{ALLOWED_FORMATS, generate_public_id, ingest_transformation, upload_params};
pub use lumen_error::{CdnError, CdnErrorKind};
pub use provider::{MediaProvider, PendingUpload};
pub use signing::sign_params;
pub use transform::{Crop, TransformParams, TransformParamsBuilder};
pub use url::UrlBuilder;
pub use variants::{
    AUTO_FORMAT, CustomUrlOptions, DEFAULT_QUALITY, ECO_QUALITY, MODERN_FORMAT_WIDTH,
    ModernFormats, variant_params,
};

/// Result type for provider operations.
pub type CdnResult<T> = Result<T, CdnError>;
