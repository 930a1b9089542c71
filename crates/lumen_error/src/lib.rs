//! Error types for the Lumen image service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lumen_error::{LumenResult, CdnError, CdnErrorKind};
//!
//! fn fetch_metadata() -> LumenResult<u64> {
//!     Err(CdnError::new(CdnErrorKind::Http("Connection refused".into())))?
//! }
//!
//! assert!(fetch_metadata().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdn;
mod config;
mod database;
mod error;
mod upload;

pub use cdn::{CdnError, CdnErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{LumenError, LumenErrorKind, LumenResult};
pub use upload::{UploadError, UploadErrorKind};
