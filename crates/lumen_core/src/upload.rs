//! Files handed over by the storage adapter.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A file that has already been stored at the provider.
///
/// # Examples
///
/// ```
/// use lumen_core::UploadedFileBuilder;
///
/// let file = UploadedFileBuilder::default()
///     .public_id("my-images/1700000000000-42")
///     .url("https://res.cloudinary.com/demo/image/upload/my-images/1700000000000-42.webp")
///     .size(2048u64)
///     .original_name(Some("cat.png".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(file.public_id(), "my-images/1700000000000-42");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UploadedFile {
    /// Provider-assigned asset identifier
    public_id: String,
    /// URL the provider reported for the stored asset
    url: String,
    /// Byte size of the uploaded payload
    size: u64,
    /// Client-supplied filename
    #[builder(default)]
    #[serde(default)]
    original_name: Option<String>,
}
