//! Mapping of service errors onto HTTP responses.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lumen_error::{LumenError, UploadError, UploadErrorKind};
use serde::Serialize;

/// Message returned for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
/// Message returned when the upload pipeline fails server-side.
pub const UPLOAD_FAILED_MESSAGE: &str = "Server error during file upload. Please try again.";
/// Message returned for unknown image ids.
pub const NOT_FOUND_MESSAGE: &str = "Image not found";
/// Message returned for paths no route matches.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// JSON body shared by every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human-readable reason
    pub message: String,
}

/// Error returned from request handlers.
///
/// Client errors carry their message to the caller; internal errors are
/// logged in full and answered with a fixed, generic message.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// Rejected upload
    #[display("{}", _0.kind)]
    Upload(UploadError),
    /// Malformed request
    #[display("{}", _0)]
    BadRequest(String),
    /// Unknown resource
    #[display("{}", _0)]
    NotFound(String),
    /// Failure inside the service or one of its dependencies
    #[display("{}", message)]
    Internal {
        /// Message shown to the client
        message: &'static str,
        /// Underlying error, logged only
        source: LumenError,
    },
}

impl ApiError {
    /// Internal error answered with the generic message.
    pub fn internal(source: impl Into<LumenError>) -> Self {
        Self::Internal {
            message: INTERNAL_ERROR_MESSAGE,
            source: source.into(),
        }
    }

    /// Internal error raised by the upload pipeline.
    pub fn upload_failed(source: impl Into<LumenError>) -> Self {
        Self::Internal {
            message: UPLOAD_FAILED_MESSAGE,
            source: source.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upload(err) => match err.kind {
                UploadErrorKind::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        Self::Upload(err)
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Upload(UploadError::new(UploadErrorKind::Malformed(
            rejection.body_text(),
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal { source, .. } => {
                tracing::error!(error = %source, "Request failed");
            }
            other => {
                tracing::debug!(status = status.as_u16(), reason = %other, "Request rejected");
            }
        }

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
