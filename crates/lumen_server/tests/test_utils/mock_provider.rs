//! Mock media provider for testing.

use async_trait::async_trait;
use lumen_cdn::{CdnConfig, CdnConfigBuilder, CdnError, CdnErrorKind, CdnResult, MediaProvider, PendingUpload};
use lumen_core::{ImageRecord, NewImageRecord, ResourceMetadata, UploadedFile, UploadedFileBuilder};
use lumen_database::{DatabaseError, DatabaseErrorKind, DatabaseResult, ImageRepository};
use std::sync::Mutex;

/// Account used by every test.
pub fn test_cdn_config() -> CdnConfig {
    CdnConfigBuilder::default()
        .cloud_name("demo")
        .api_key("key")
        .api_secret("secret")
        .build()
        .unwrap()
}

/// A stored file as the storage adapter would report it.
#[allow(dead_code)]
pub fn uploaded(public_id: &str, size: u64) -> UploadedFile {
    UploadedFileBuilder::default()
        .public_id(public_id)
        .url(format!(
            "https://res.cloudinary.com/demo/image/upload/v1/{}.webp",
            public_id
        ))
        .size(size)
        .original_name(Some(format!("{}.png", public_id.rsplit('/').next().unwrap_or(public_id))))
        .build()
        .unwrap()
}

/// Provider that stores nothing and answers from memory.
///
/// Assets are named `my-images/{file stem}`. Metadata lookups fail for any
/// id containing `broken`; uploads fail when `fail_uploads` is set. Reported
/// optimized bytes are 40% of the uploaded payload.
#[derive(Debug, Default)]
pub struct MockProvider {
    fail_uploads: bool,
    uploads: Mutex<Vec<(String, u64)>>,
    lookups: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose uploads always fail.
    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    /// Record a stored size so lookups can report 40% of it.
    pub fn remember(&self, public_id: &str, size: u64) {
        self.uploads.lock().unwrap().push((public_id.to_string(), size));
    }

    /// Number of uploads received.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// Ids looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaProvider for MockProvider {
    async fn upload(&self, upload: PendingUpload) -> CdnResult<UploadedFile> {
        if self.fail_uploads {
            return Err(CdnError::new(CdnErrorKind::Http(
                "connection refused".to_string(),
            )));
        }
        let filename = upload.filename.clone().unwrap_or_else(|| "unnamed".to_string());
        let stem = filename.split('.').next().unwrap_or(&filename).to_string();
        let public_id = format!("my-images/{}", stem);
        self.remember(&public_id, upload.size());

        Ok(UploadedFileBuilder::default()
            .public_id(public_id.clone())
            .url(format!(
                "https://res.cloudinary.com/demo/image/upload/v1/{}.webp",
                public_id
            ))
            .size(upload.size())
            .original_name(upload.filename)
            .build()
            .unwrap())
    }

    async fn resource(&self, public_id: &str) -> CdnResult<ResourceMetadata> {
        self.lookups.lock().unwrap().push(public_id.to_string());
        if public_id.contains("broken") {
            return Err(CdnError::new(CdnErrorKind::Api {
                status: 404,
                message: format!("Resource not found - {}", public_id),
            }));
        }
        let size = self
            .uploads
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == public_id)
            .map(|(_, size)| *size)
            .unwrap_or(1000);
        Ok(ResourceMetadata {
            width: 800,
            height: 600,
            format: "webp".to_string(),
            bytes: size * 4 / 10,
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Repository whose every call fails.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingRepository;

#[async_trait]
impl ImageRepository for FailingRepository {
    async fn insert_many(&self, _records: Vec<NewImageRecord>) -> DatabaseResult<Vec<ImageRecord>> {
        Err(DatabaseError::new(DatabaseErrorKind::Query(
            "duplicate key value violates unique constraint".to_string(),
        )))
    }

    async fn find_all(&self) -> DatabaseResult<Vec<ImageRecord>> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection(
            "connection reset".to_string(),
        )))
    }

    async fn find_by_id(&self, _id: &str) -> DatabaseResult<Option<ImageRecord>> {
        Err(DatabaseError::new(DatabaseErrorKind::Connection(
            "connection reset".to_string(),
        )))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
