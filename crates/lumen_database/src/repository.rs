//! Image metadata store trait.

use crate::DatabaseResult;
use lumen_core::{ImageRecord, NewImageRecord};

/// Store for image metadata records.
///
/// Implementations assign ids and timestamps on insert. No transactional
/// guarantee beyond a single call: `insert_many` either persists the whole
/// batch or fails.
#[async_trait::async_trait]
pub trait ImageRepository: Send + Sync {
    /// Persist a batch of records, returning them with ids and timestamps.
    async fn insert_many(&self, records: Vec<NewImageRecord>) -> DatabaseResult<Vec<ImageRecord>>;

    /// All records, newest first.
    async fn find_all(&self) -> DatabaseResult<Vec<ImageRecord>>;

    /// Look up one record.
    ///
    /// Returns `Ok(None)` when nothing matches, including when `id` is not a
    /// well-formed identifier.
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<ImageRecord>>;

    /// Backend name used in logs.
    fn backend_name(&self) -> &'static str;
}
