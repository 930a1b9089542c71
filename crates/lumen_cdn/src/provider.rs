//! Media provider trait.

use crate::CdnResult;
use lumen_core::{ResourceMetadata, UploadedFile};

/// An image payload waiting to be stored at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// Raw file bytes
    pub data: Vec<u8>,
    /// Client-supplied filename
    pub filename: Option<String>,
    /// Content type declared by the client
    pub content_type: String,
}

impl PendingUpload {
    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Remote service that stores assets and reports their metadata.
///
/// Implementations talk to the provider over the network; the service treats
/// each call as independent and never retries.
#[async_trait::async_trait]
pub trait MediaProvider: Send + Sync {
    /// Store a payload and return the provider-assigned identity.
    ///
    /// The returned file carries the identifier, the stored URL and the byte
    /// size of the uploaded payload.
    async fn upload(&self, upload: PendingUpload) -> CdnResult<UploadedFile>;

    /// Fetch authoritative metadata for a stored asset.
    ///
    /// Fails when the provider is unreachable, answers with an error, or
    /// omits any of width, height, format or bytes.
    async fn resource(&self, public_id: &str) -> CdnResult<ResourceMetadata>;

    /// Short name used in logs.
    fn provider_name(&self) -> &'static str;
}
