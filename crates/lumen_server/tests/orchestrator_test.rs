mod test_utils;

use lumen_cdn::UrlBuilder;
use lumen_database::{ImageRepository, MemoryImageRepository};
use lumen_error::{LumenErrorKind, UploadErrorKind};
use lumen_server::UploadOrchestrator;
use std::sync::Arc;
use test_utils::{FailingRepository, MockProvider, test_cdn_config, uploaded};

fn orchestrator(
    provider: Arc<MockProvider>,
    repository: Arc<dyn ImageRepository>,
) -> UploadOrchestrator {
    UploadOrchestrator::new(provider, repository, UrlBuilder::new(&test_cdn_config()))
}

#[tokio::test]
async fn test_one_record_per_file_with_metadata() {
    let provider = Arc::new(MockProvider::new());
    provider.remember("my-images/a", 1000);
    provider.remember("my-images/b", 2000);
    let repository = Arc::new(MemoryImageRepository::new());

    let records = orchestrator(provider.clone(), repository.clone())
        .process_upload(vec![uploaded("my-images/a", 1000), uploaded("my-images/b", 2000)])
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].public_id, "my-images/a");
    assert_eq!(records[1].public_id, "my-images/b");
    assert_eq!(records[0].optimized_size, Some(400));
    assert_eq!(records[0].format.as_deref(), Some("webp"));
    assert_eq!(records[0].dimensions.map(|d| d.width), Some(800));
    assert_eq!(records[0].compression_ratio(), Some(60));
    assert_eq!(records[0].original_name.as_deref(), Some("a.png"));
    assert_eq!(repository.len().await, 2);
    assert_eq!(provider.lookups().len(), 2);
}

#[tokio::test]
async fn test_failed_lookup_degrades_only_that_record() {
    let provider = Arc::new(MockProvider::new());
    let repository = Arc::new(MemoryImageRepository::new());

    let records = orchestrator(provider, repository)
        .process_upload(vec![
            uploaded("my-images/good", 1000),
            uploaded("my-images/broken", 1000),
        ])
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let good = &records[0];
    assert!(good.dimensions.is_some());
    assert!(good.format.is_some());
    assert!(good.optimized_size.is_some());

    let degraded = &records[1];
    assert_eq!(degraded.public_id, "my-images/broken");
    assert!(degraded.dimensions.is_none());
    assert!(degraded.format.is_none());
    assert!(degraded.optimized_size.is_none());
    assert_eq!(degraded.size, Some(1000));
    assert_eq!(degraded.original_name.as_deref(), Some("broken.png"));
    let variants = degraded.responsive_urls.as_ref().unwrap();
    assert!(variants.thumbnail.contains("my-images/broken"));
    assert!(degraded.compression_ratio().is_none());
}

#[tokio::test]
async fn test_variants_are_generated_from_public_id() {
    let provider = Arc::new(MockProvider::new());
    let repository = Arc::new(MemoryImageRepository::new());
    let urls = UrlBuilder::new(&test_cdn_config());

    let records = orchestrator(provider, repository)
        .process_upload(vec![uploaded("my-images/a", 10)])
        .await
        .unwrap();

    assert_eq!(
        records[0].responsive_urls.as_ref(),
        Some(&urls.generate_variants("my-images/a"))
    );
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let provider = Arc::new(MockProvider::new());
    let repository = Arc::new(MemoryImageRepository::new());

    let err = orchestrator(provider.clone(), repository.clone())
        .process_upload(Vec::new())
        .await
        .unwrap_err();

    match err.kind() {
        LumenErrorKind::Upload(e) => assert_eq!(e.kind, UploadErrorKind::NoFiles),
        other => panic!("unexpected error: {other}"),
    }
    assert!(repository.is_empty().await);
    assert!(provider.lookups().is_empty());
}

#[tokio::test]
async fn test_batch_insert_failure_fails_request() {
    let provider = Arc::new(MockProvider::new());

    let err = orchestrator(provider, Arc::new(FailingRepository))
        .process_upload(vec![uploaded("my-images/a", 10)])
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), LumenErrorKind::Database(_)));
}
