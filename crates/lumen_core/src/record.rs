//! Persisted image metadata records.

use crate::{Dimensions, ResourceMetadata, ResponsiveUrls, UploadedFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An image record that has not been persisted yet.
///
/// Provider-derived fields stay `None` when the metadata lookup for the file
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImageRecord {
    /// Canonical retrieval URL of the original optimized asset
    pub url: String,
    /// Provider-assigned asset identifier
    pub public_id: String,
    /// Client-supplied filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Byte size of the upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Byte size reported by the provider after transformation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_size: Option<u64>,
    /// Provider-reported dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Provider-reported format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Precomputed variant URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_urls: Option<ResponsiveUrls>,
}

impl NewImageRecord {
    /// Record carrying only what the storage adapter reported.
    pub fn from_upload(file: &UploadedFile, responsive_urls: ResponsiveUrls) -> Self {
        Self {
            url: file.url().clone(),
            public_id: file.public_id().clone(),
            original_name: file.original_name().clone(),
            size: Some(*file.size()),
            optimized_size: None,
            dimensions: None,
            format: None,
            responsive_urls: Some(responsive_urls),
        }
    }

    /// Fill the provider-derived fields from a metadata lookup.
    pub fn with_metadata(mut self, metadata: &ResourceMetadata) -> Self {
        self.dimensions = Some(metadata.dimensions());
        self.format = Some(metadata.format.clone());
        self.optimized_size = Some(metadata.bytes);
        self
    }
}

/// A persisted image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Canonical retrieval URL of the original optimized asset
    pub url: String,
    /// Provider-assigned asset identifier
    pub public_id: String,
    /// Client-supplied filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Byte size of the upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Byte size reported by the provider after transformation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_size: Option<u64>,
    /// Provider-reported dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Provider-reported format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Precomputed variant URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_urls: Option<ResponsiveUrls>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ImageRecord {
    /// Percentage saved by the provider's optimization, see [`compression_ratio`].
    pub fn compression_ratio(&self) -> Option<i64> {
        compression_ratio(self.size, self.optimized_size)
    }
}

/// Percentage reduction from `size` to `optimized_size`.
///
/// Returns `None` unless both sizes are known and non-zero. The result is
/// negative when the optimized asset is larger than the upload. Halves round
/// toward positive infinity, so -2.5 becomes -2.
///
/// # Examples
///
/// ```
/// use lumen_core::compression_ratio;
///
/// assert_eq!(compression_ratio(Some(1000), Some(400)), Some(60));
/// assert_eq!(compression_ratio(Some(200), Some(205)), Some(-2));
/// assert_eq!(compression_ratio(Some(1000), None), None);
/// ```
pub fn compression_ratio(size: Option<u64>, optimized_size: Option<u64>) -> Option<i64> {
    match (size, optimized_size) {
        (Some(size), Some(optimized)) if size > 0 && optimized > 0 => {
            // floor(saved * 100 / size + 1/2), kept in integers so ties are exact
            let size = i128::from(size);
            let saved = (size - i128::from(optimized)) * 100;
            let ratio = (2 * saved + size).div_euclid(2 * size);
            i64::try_from(ratio).ok()
        }
        _ => None,
    }
}
