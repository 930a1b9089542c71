//! Request handlers for the image API.

use crate::{
    ApiError, ApiResponse, AppState, ImageResponse, NOT_FOUND_MESSAGE, OptimizeOptions,
    OptimizeQuery, OptimizedImage, ROUTE_NOT_FOUND_MESSAGE, read_uploads, select_url,
};
use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State, multipart::MultipartRejection,
        rejection::QueryRejection,
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures::future::try_join_all;
use lumen_error::{UploadError, UploadErrorKind};
use serde_json::json;
use tracing::instrument;

/// `POST /api/images/upload`
///
/// Stores every file part at the provider, then hands the stored files to
/// the orchestrator and answers 201 with the persisted records.
#[instrument(skip_all)]
pub async fn upload_images(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let uploads = read_uploads(&mut multipart, state.limits()).await?;
    if uploads.is_empty() {
        return Err(UploadError::new(UploadErrorKind::NoFiles).into());
    }

    let provider = state.provider();
    let stored = try_join_all(uploads.into_iter().map(|upload| provider.upload(upload)))
        .await
        .map_err(ApiError::upload_failed)?;

    let records = state
        .orchestrator()
        .process_upload(stored)
        .await
        .map_err(ApiError::upload_failed)?;

    let count = records.len();
    tracing::info!(count, "Upload complete");
    let data: Vec<ImageResponse> = records.into_iter().map(ImageResponse::from).collect();
    let body = ApiResponse::new(data)
        .with_message(format!("Successfully uploaded {} image(s)", count));
    Ok((StatusCode::CREATED, Json(body)))
}

/// `GET /api/images`
#[instrument(skip_all)]
pub async fn list_images(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .repository()
        .find_all()
        .await
        .map_err(ApiError::internal)?;

    let count = records.len();
    let data: Vec<ImageResponse> = records.into_iter().map(ImageResponse::from).collect();
    Ok(Json(ApiResponse::new(data).with_count(count)))
}

/// `GET /api/images/:id/optimized`
///
/// Explicit dimensions yield a one-off URL; otherwise the named variant is
/// served, falling back to the stored URL.
#[instrument(skip_all, fields(id = %id))]
pub async fn get_optimized_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<OptimizeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let options = OptimizeOptions::try_from(query)?;

    let record = state
        .repository()
        .find_by_id(&id)
        .await
        .map_err(ApiError::internal)?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    let optimized_url = select_url(&record, &options, state.urls());
    let formats = state.urls().modern_formats(&record.public_id, options.width);
    tracing::debug!(%optimized_url, custom = options.is_custom(), "Selected URL");

    Ok(Json(ApiResponse::new(OptimizedImage {
        id: record.id,
        original_name: record.original_name,
        optimized_url,
        dimensions: record.dimensions,
        format: record.format,
        responsive_urls: record.responsive_urls,
        formats,
    })))
}

/// Answers unmatched paths with the JSON error body.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string())
}

/// `GET /health`
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
