//! Provider resource metadata.

use crate::Dimensions;
use serde::{Deserialize, Serialize};

/// Authoritative facts about a stored asset, fetched from the provider after upload.
///
/// Only the fields the service consumes are modelled. A provider response
/// lacking any of them is treated as a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Stored format, e.g. "webp" or "jpg"
    pub format: String,
    /// Stored byte size after the ingest transformation
    pub bytes: u64,
}

impl ResourceMetadata {
    /// Width and height as a [`Dimensions`] pair.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
