//! Core data types for the Lumen image service.
//!
//! This crate provides the domain types shared by the provider client, the
//! metadata store and the HTTP layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dimensions;
mod metadata;
mod record;
mod telemetry;
mod upload;
mod variant;

pub use dimensions::Dimensions;
pub use metadata::ResourceMetadata;
pub use record::{ImageRecord, NewImageRecord, compression_ratio};
pub use telemetry::{LogFormat, init_telemetry};
pub use upload::{UploadedFile, UploadedFileBuilder};
pub use variant::{ResponsiveUrls, VariantName};
