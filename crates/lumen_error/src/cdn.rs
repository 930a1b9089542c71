//! Media provider (CDN) error types.

/// Error kinds for calls against the media provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CdnErrorKind {
    /// Transport-level failure reaching the provider
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider answered with a non-success status
    #[display("Provider returned {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// A field the service depends on was absent from the response
    #[display("Provider response missing field '{}'", _0)]
    MissingField(String),
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use lumen_error::{CdnError, CdnErrorKind};
///
/// let err = CdnError::new(CdnErrorKind::MissingField("width".to_string()));
/// assert!(format!("{}", err).contains("width"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("CDN Error: {} at line {} in {}", kind, line, file)]
pub struct CdnError {
    /// The error kind
    pub kind: CdnErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CdnError {
    /// Create a new CdnError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CdnErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
