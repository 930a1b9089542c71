//! In-process implementation of ImageRepository.

use crate::{DatabaseResult, ImageRepository};
use async_trait::async_trait;
use chrono::Utc;
use lumen_core::{ImageRecord, NewImageRecord};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Image repository held in memory.
///
/// Used when no database is configured and in tests. Contents are lost when
/// the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageRepository {
    records: Arc<RwLock<Vec<ImageRecord>>>,
}

impl MemoryImageRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ImageRepository for MemoryImageRepository {
    async fn insert_many(&self, records: Vec<NewImageRecord>) -> DatabaseResult<Vec<ImageRecord>> {
        let now = Utc::now();
        let inserted: Vec<ImageRecord> = records
            .into_iter()
            .map(|record| ImageRecord {
                id: Uuid::new_v4(),
                url: record.url,
                public_id: record.public_id,
                original_name: record.original_name,
                size: record.size,
                optimized_size: record.optimized_size,
                dimensions: record.dimensions,
                format: record.format,
                responsive_urls: record.responsive_urls,
                created_at: now,
                updated_at: now,
            })
            .collect();

        self.records.write().await.extend(inserted.iter().cloned());
        tracing::debug!(count = inserted.len(), "Inserted image records");
        Ok(inserted)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<ImageRecord>> {
        // Reverse insertion order first so equal timestamps stay newest-first.
        let mut records: Vec<ImageRecord> = self.records.read().await.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ImageRecord>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
