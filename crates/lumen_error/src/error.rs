//! Top-level error wrapper types.

use crate::{CdnError, ConfigError, DatabaseError, UploadError};

/// Every error condition the service can raise.
///
/// # Examples
///
/// ```
/// use lumen_error::{LumenError, LumenErrorKind, UploadError, UploadErrorKind};
///
/// let err: LumenError = UploadError::new(UploadErrorKind::NoFiles).into();
/// assert!(matches!(err.kind(), LumenErrorKind::Upload(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LumenErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Media provider error
    #[from(CdnError)]
    Cdn(CdnError),
    /// Metadata store error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Rejected upload request
    #[from(UploadError)]
    Upload(UploadError),
}

/// Lumen error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lumen_error::{LumenResult, ConfigError};
///
/// fn might_fail() -> LumenResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lumen Error: {}", _0)]
pub struct LumenError(Box<LumenErrorKind>);

impl LumenError {
    /// Create a new error from a kind.
    pub fn new(kind: LumenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LumenErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LumenErrorKind
impl<T> From<T> for LumenError
where
    T: Into<LumenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lumen operations.
pub type LumenResult<T> = std::result::Result<T, LumenError>;
