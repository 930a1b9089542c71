//! Multipart extraction with upload limits.

use crate::UploadLimits;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use lumen_cdn::PendingUpload;
use lumen_error::{UploadError, UploadErrorKind};

/// Read every file part of a multipart body.
///
/// File parts are accepted under any field name; text fields are skipped.
/// Rejects the request on the first part that breaks a limit, is not an
/// image, or lacks a field name. An empty result is returned as-is; the
/// caller decides whether zero files is an error.
#[tracing::instrument(skip_all)]
pub async fn read_uploads(
    multipart: &mut Multipart,
    limits: &UploadLimits,
) -> Result<Vec<PendingUpload>, UploadError> {
    let too_large = || {
        UploadError::new(UploadErrorKind::FileTooLarge {
            max_megabytes: limits.max_file_megabytes(),
        })
    };
    let mut uploads = Vec::new();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limits))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            tracing::trace!(name = ?field.name(), "Skipping text field");
            continue;
        };
        if field.name().is_none_or(str::is_empty) {
            return Err(UploadError::new(UploadErrorKind::UnexpectedField));
        }

        if uploads.len() >= *limits.max_files() {
            return Err(UploadError::new(UploadErrorKind::TooManyFiles {
                max_files: *limits.max_files(),
            }));
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            tracing::debug!(%filename, %content_type, "Rejecting non-image upload");
            return Err(UploadError::new(UploadErrorKind::NotAnImage));
        }

        let mut data = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, limits))?
        {
            if data.len() + chunk.len() > *limits.max_file_size() {
                tracing::debug!(%filename, "Rejecting oversized upload");
                return Err(too_large());
            }
            data.extend_from_slice(&chunk);
        }

        tracing::debug!(%filename, bytes = data.len(), "Received file");
        uploads.push(PendingUpload {
            data,
            filename: Some(filename).filter(|name| !name.is_empty()),
            content_type,
        });
    }

    Ok(uploads)
}

fn multipart_error(err: MultipartError, limits: &UploadLimits) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::new(UploadErrorKind::FileTooLarge {
            max_megabytes: limits.max_file_megabytes(),
        })
    } else {
        UploadError::new(UploadErrorKind::Malformed(err.body_text()))
    }
}
