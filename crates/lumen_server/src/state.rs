//! Shared request state.

use crate::{UploadLimits, UploadOrchestrator};
use lumen_cdn::{MediaProvider, UrlBuilder};
use lumen_database::ImageRepository;
use std::sync::Arc;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn MediaProvider>,
    repository: Arc<dyn ImageRepository>,
    orchestrator: UploadOrchestrator,
    urls: UrlBuilder,
    limits: UploadLimits,
}

impl AppState {
    /// Wire the provider and repository into a new state.
    pub fn new(
        provider: Arc<dyn MediaProvider>,
        repository: Arc<dyn ImageRepository>,
        urls: UrlBuilder,
        limits: UploadLimits,
    ) -> Self {
        let orchestrator =
            UploadOrchestrator::new(Arc::clone(&provider), Arc::clone(&repository), urls.clone());
        Self {
            provider,
            repository,
            orchestrator,
            urls,
            limits,
        }
    }

    /// Media provider.
    pub fn provider(&self) -> &dyn MediaProvider {
        self.provider.as_ref()
    }

    /// Metadata store.
    pub fn repository(&self) -> &dyn ImageRepository {
        self.repository.as_ref()
    }

    /// Upload pipeline.
    pub fn orchestrator(&self) -> &UploadOrchestrator {
        &self.orchestrator
    }

    /// Delivery URL builder.
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Upload limits.
    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }
}
