//! Client-side upload errors.
//!
//! Every kind here is the caller's fault and maps to a 4xx response.

/// Reasons an upload request is rejected before reaching the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// Request carried no file parts
    #[display("No images uploaded. Please include image files in your request.")]
    NoFiles,
    /// A single file exceeded the per-file byte limit
    #[display("File too large. Maximum size is {}MB per file.", max_megabytes)]
    FileTooLarge {
        /// Configured per-file limit in megabytes
        max_megabytes: usize,
    },
    /// More file parts than allowed
    #[display("Too many files. Maximum {} files allowed.", max_files)]
    TooManyFiles {
        /// Configured file-count limit
        max_files: usize,
    },
    /// A file part arrived under an unusable field name
    #[display("Unexpected field name. Make sure your form field is named correctly.")]
    UnexpectedField,
    /// A file part whose content type is not `image/*`
    #[display("Only image files are allowed (jpg, png, jpeg, webp).")]
    NotAnImage,
    /// The multipart body itself could not be parsed
    #[display("Malformed multipart body: {}", _0)]
    Malformed(String),
}

/// Upload rejection with location tracking.
///
/// # Examples
///
/// ```
/// use lumen_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::TooManyFiles { max_files: 10 });
/// assert_eq!(err.kind.to_string(), "Too many files. Maximum 10 files allowed.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new UploadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
