//! Deterministic delivery URL construction.

use crate::{CdnConfig, TransformParams};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in asset identifiers.
const ASSET_ID: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'/')
    .remove(b':');

/// Builds delivery URLs for stored assets.
///
/// Pure string composition: no network calls, and identical inputs always
/// produce identical URLs.
///
/// # Examples
///
/// ```
/// use lumen_cdn::{CdnConfigBuilder, TransformParams, UrlBuilder};
///
/// let config = CdnConfigBuilder::default()
///     .cloud_name("demo")
///     .api_key("key")
///     .api_secret("secret")
///     .build()
///     .unwrap();
/// let urls = UrlBuilder::new(&config);
///
/// let params = TransformParams::builder().width(300).secure(true).build();
/// assert_eq!(
///     urls.build_url("sample", &params),
///     "https://res.cloudinary.com/demo/image/upload/w_300/sample"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlBuilder {
    cloud_name: String,
    delivery_host: String,
}

impl UrlBuilder {
    /// Create a URL builder for the configured account.
    pub fn new(config: &CdnConfig) -> Self {
        Self {
            cloud_name: config.cloud_name().clone(),
            delivery_host: config.delivery_host().clone(),
        }
    }

    /// Build the retrieval URL for `asset_id` under `params`.
    ///
    /// Layout: `{scheme}://{host}/{cloud}/image/upload[/{transformation}][/v1]/{asset_id}[.{format}]`.
    /// Identifiers inside a folder get the `v1` version segment the provider
    /// expects for foldered assets.
    pub fn build_url(&self, asset_id: &str, params: &TransformParams) -> String {
        let scheme = if params.secure { "https" } else { "http" };
        let mut url = format!(
            "{}://{}/{}/image/upload",
            scheme, self.delivery_host, self.cloud_name
        );

        let transformation = params.transformation();
        if !transformation.is_empty() {
            url.push('/');
            url.push_str(&transformation);
        }

        if asset_id.contains('/') && !has_version(asset_id) {
            url.push_str("/v1");
        }

        url.push('/');
        url.extend(utf8_percent_encode(asset_id, ASSET_ID));

        if let Some(format) = params.format.as_deref().filter(|f| !f.is_empty()) {
            url.push('.');
            url.push_str(format);
        }

        url
    }
}

/// Whether the identifier already starts with a `v<digits>/` segment.
fn has_version(asset_id: &str) -> bool {
    asset_id
        .split_once('/')
        .and_then(|(first, _)| first.strip_prefix('v'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CdnConfigBuilder, Crop};

    fn builder() -> UrlBuilder {
        let config = CdnConfigBuilder::default()
            .cloud_name("demo")
            .api_key("key")
            .api_secret("secret")
            .build()
            .unwrap();
        UrlBuilder::new(&config)
    }

    #[test]
    fn foldered_ids_get_version_segment() {
        let url = builder().build_url("my-images/1-2", &TransformParams::default());
        assert_eq!(url, "http://res.cloudinary.com/demo/image/upload/v1/my-images/1-2");
    }

    #[test]
    fn existing_version_is_kept() {
        let url = builder().build_url("v42/my-images/1-2", &TransformParams::default());
        assert_eq!(url, "http://res.cloudinary.com/demo/image/upload/v42/my-images/1-2");
    }

    #[test]
    fn unsafe_characters_are_escaped() {
        let url = builder().build_url("my photo", &TransformParams::default());
        assert!(url.ends_with("/my%20photo"));
    }

    #[test]
    fn format_is_appended_as_extension() {
        let params = TransformParams::builder()
            .width(1200)
            .crop(Crop::Limit)
            .format("avif")
            .secure(true)
            .build();
        let url = builder().build_url("sample", &params);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/c_limit,w_1200/sample.avif"
        );
    }
}
