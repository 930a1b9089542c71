//! JSON response bodies.

use chrono::{DateTime, Utc};
use lumen_cdn::ModernFormats;
use lumen_core::{Dimensions, ImageRecord, ResponsiveUrls};
use serde::Serialize;
use uuid::Uuid;

/// Success envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    pub data: T,
    /// Number of items in `data`, for list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Bare success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            count: None,
        }
    }

    /// Attach a summary message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an item count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// A stored image as returned by the upload and list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub url: String,
    pub public_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_urls: Option<ResponsiveUrls>,
    /// Percentage saved by optimization, `null` when not computable
    pub compression_ratio: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ImageRecord> for ImageResponse {
    fn from(record: ImageRecord) -> Self {
        let compression_ratio = record.compression_ratio();
        Self {
            id: record.id,
            url: record.url,
            public_id: record.public_id,
            original_name: record.original_name,
            size: record.size,
            optimized_size: record.optimized_size,
            dimensions: record.dimensions,
            format: record.format,
            responsive_urls: record.responsive_urls,
            compression_ratio,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Body of the optimized-URL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedImage {
    pub id: Uuid,
    pub original_name: Option<String>,
    /// URL selected by the query options
    pub optimized_url: String,
    pub dimensions: Option<Dimensions>,
    pub format: Option<String>,
    pub responsive_urls: Option<ResponsiveUrls>,
    /// Explicit webp/avif/jpg URLs
    pub formats: ModernFormats,
}
