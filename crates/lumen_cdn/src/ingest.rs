//! Storage-adapter upload options.
//!
//! Every file is stored under a fixed folder with a generated identifier and
//! a universal ingest transformation applied server-side.

use crate::{Crop, TransformParams};
use chrono::Utc;
use rand::Rng;
use std::collections::BTreeMap;

/// Formats the provider accepts at ingest.
pub const ALLOWED_FORMATS: &[&str] = &["jpg", "png", "jpeg", "webp", "avif"];

/// Generate a unique asset identifier: `{unix_millis}-{random below 1e9}`.
pub fn generate_public_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Transformation applied to every upload at ingest time.
///
/// Caps width at 1200 without upscaling, smart quality, automatic format
/// and DPR, progressive and immutable-cache flags.
pub fn ingest_transformation() -> TransformParams {
    TransformParams::builder()
        .width(1200)
        .crop(Crop::Limit)
        .quality("auto:good")
        .fetch_format("auto")
        .flag("progressive")
        .flag("immutable_cache")
        .dpr("auto")
        .build()
}

/// Form parameters sent with a signed upload, before signing.
pub fn upload_params(folder: &str, public_id: &str, timestamp: i64) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("folder".to_string(), folder.to_string());
    params.insert("public_id".to_string(), public_id.to_string());
    params.insert("allowed_formats".to_string(), ALLOWED_FORMATS.join(","));
    params.insert(
        "transformation".to_string(),
        ingest_transformation().transformation(),
    );
    params.insert("use_filename".to_string(), "false".to_string());
    params.insert("unique_filename".to_string(), "true".to_string());
    params.insert("overwrite".to_string(), "false".to_string());
    params.insert("timestamp".to_string(), timestamp.to_string());
    params
}
