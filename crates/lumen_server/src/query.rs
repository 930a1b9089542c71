//! Query parameters of the optimized-URL endpoint.

use crate::ApiError;
use lumen_cdn::{AUTO_FORMAT, CustomUrlOptions, DEFAULT_QUALITY, UrlBuilder};
use lumen_core::{ImageRecord, VariantName};
use serde::Deserialize;

/// Raw query string of `GET /api/images/:id/optimized`.
///
/// Values are kept as strings so that a malformed number is reported with
/// the parameter name rather than as a generic extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OptimizeQuery {
    /// Target width
    pub width: Option<String>,
    /// Target height
    pub height: Option<String>,
    /// Quality, "auto:good" when omitted
    pub quality: Option<String>,
    /// Serve-time format, "auto" when omitted
    pub format: Option<String>,
    /// Named variant, "medium" when omitted
    pub size: Option<String>,
}

/// Validated options for selecting an optimized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Target width
    pub width: Option<u32>,
    /// Target height
    pub height: Option<u32>,
    /// Quality for custom URLs
    pub quality: String,
    /// Serve-time format for custom URLs
    pub format: String,
    /// Requested variant, `None` when the name is not a known variant
    pub size: Option<VariantName>,
}

impl TryFrom<OptimizeQuery> for OptimizeOptions {
    type Error = ApiError;

    fn try_from(query: OptimizeQuery) -> Result<Self, Self::Error> {
        let size = match non_empty(query.size) {
            None => Some(VariantName::Medium),
            Some(name) => name.parse().ok(),
        };
        Ok(Self {
            width: parse_dimension("width", query.width)?,
            height: parse_dimension("height", query.height)?,
            quality: non_empty(query.quality).unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
            format: non_empty(query.format).unwrap_or_else(|| AUTO_FORMAT.to_string()),
            size,
        })
    }
}

impl OptimizeOptions {
    /// Whether the caller asked for explicit dimensions.
    pub fn is_custom(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

/// Pick the URL to serve for `record`.
///
/// Explicit dimensions produce a fresh custom URL. Otherwise the named
/// variant is returned, falling back to the record's stored URL when the
/// name is unknown or the record carries no such variant.
pub fn select_url(record: &ImageRecord, options: &OptimizeOptions, urls: &UrlBuilder) -> String {
    if options.is_custom() {
        let custom = CustomUrlOptions {
            width: options.width,
            height: options.height,
            quality: Some(options.quality.clone()),
            format: Some(options.format.clone()),
            ..CustomUrlOptions::default()
        };
        return urls.custom_url(&record.public_id, &custom);
    }

    options
        .size
        .zip(record.responsive_urls.as_ref())
        .map(|(name, variants)| variants.get(name))
        .filter(|url| !url.is_empty())
        .unwrap_or(record.url.as_str())
        .to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_dimension(name: &str, value: Option<String>) -> Result<Option<u32>, ApiError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    match value.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(Some(parsed)),
        _ => Err(ApiError::BadRequest(format!(
            "Invalid {}: expected a positive integer",
            name
        ))),
    }
}
