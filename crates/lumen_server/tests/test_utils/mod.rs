//! Test utilities for lumen_server tests.
//!
//! Provides a mock media provider, a failing repository and request helpers.

pub mod mock_provider;

#[allow(unused_imports)]
pub use mock_provider::{FailingRepository, MockProvider, test_cdn_config, uploaded};

/// Multipart boundary used by [`multipart_body`].
#[allow(dead_code)]
pub const BOUNDARY: &str = "lumen-test-boundary";

/// A file part for [`multipart_body`].
#[allow(dead_code)]
pub struct Part<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: &'a str,
    pub data: Vec<u8>,
}

#[allow(dead_code)]
impl<'a> Part<'a> {
    /// An image file part under the `images` field.
    pub fn image(filename: &'a str, data: Vec<u8>) -> Self {
        Self {
            field: "images",
            filename: Some(filename),
            content_type: "image/png",
            data,
        }
    }
}

/// Encode parts as a `multipart/form-data` body delimited by [`BOUNDARY`].
#[allow(dead_code)]
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match part.filename {
            Some(filename) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.field, filename
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.field),
        };
        body.extend_from_slice(disposition.as_bytes());
        if part.filename.is_some() {
            body.extend_from_slice(format!("Content-Type: {}\r\n", part.content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
