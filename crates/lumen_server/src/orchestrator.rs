//! Upload-and-metadata pipeline.

use futures::future::join_all;
use lumen_cdn::{MediaProvider, UrlBuilder};
use lumen_core::{ImageRecord, NewImageRecord, UploadedFile};
use lumen_database::ImageRepository;
use lumen_error::{LumenResult, UploadError, UploadErrorKind};
use std::sync::Arc;
use tracing::instrument;

/// Turns stored uploads into persisted image records.
///
/// For each file the provider is asked for authoritative metadata and the
/// responsive variants are generated. Lookups run concurrently and fail
/// independently: a failed lookup yields a record without the
/// provider-derived fields instead of failing the batch. All records are
/// then written with a single batch insert.
#[derive(Clone)]
pub struct UploadOrchestrator {
    provider: Arc<dyn MediaProvider>,
    repository: Arc<dyn ImageRepository>,
    urls: UrlBuilder,
}

impl UploadOrchestrator {
    /// Create a new orchestrator.
    pub fn new(
        provider: Arc<dyn MediaProvider>,
        repository: Arc<dyn ImageRepository>,
        urls: UrlBuilder,
    ) -> Self {
        Self {
            provider,
            repository,
            urls,
        }
    }

    /// Build and persist one record per file.
    ///
    /// # Errors
    ///
    /// Returns an error if `files` is empty or the batch insert fails.
    /// Metadata lookup failures never surface here.
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn process_upload(&self, files: Vec<UploadedFile>) -> LumenResult<Vec<ImageRecord>> {
        if files.is_empty() {
            return Err(UploadError::new(UploadErrorKind::NoFiles).into());
        }

        let drafts = join_all(files.iter().map(|file| self.describe(file))).await;
        let enriched = drafts.iter().filter(|d| d.dimensions.is_some()).count();
        tracing::debug!(
            enriched,
            degraded = drafts.len() - enriched,
            "Resolved provider metadata"
        );

        let records = self.repository.insert_many(drafts).await?;
        tracing::info!(
            count = records.len(),
            backend = self.repository.backend_name(),
            "Persisted image records"
        );
        Ok(records)
    }

    async fn describe(&self, file: &UploadedFile) -> NewImageRecord {
        let responsive_urls = self.urls.generate_variants(file.public_id());
        let record = NewImageRecord::from_upload(file, responsive_urls);

        match self.provider.resource(file.public_id()).await {
            Ok(metadata) => record.with_metadata(&metadata),
            Err(e) => {
                tracing::warn!(
                    public_id = %file.public_id(),
                    original_name = ?file.original_name(),
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Metadata lookup failed, storing record without provider details"
                );
                record
            }
        }
    }
}
