//! Responsive variant presets and on-demand URLs.

use crate::{Crop, TransformParams, UrlBuilder};
use lumen_core::{ResponsiveUrls, VariantName};
use serde::{Deserialize, Serialize};

/// Quality used by every preset except `large`.
pub const DEFAULT_QUALITY: &str = "auto:good";
/// Quality used by the `large` preset.
pub const ECO_QUALITY: &str = "auto:eco";
/// Serve-time format used when the caller does not pick one.
pub const AUTO_FORMAT: &str = "auto";
/// Width used for modern-format URLs when none is requested.
pub const MODERN_FORMAT_WIDTH: u32 = 1200;

/// Transformation preset for a named variant.
///
/// All presets force `fetch_format=auto` and https.
pub fn variant_params(name: VariantName) -> TransformParams {
    let base = TransformParams::builder()
        .fetch_format(AUTO_FORMAT)
        .secure(true);

    match name {
        VariantName::Thumbnail => base
            .width(150)
            .height(150)
            .crop(Crop::Fill)
            .gravity("auto")
            .quality(DEFAULT_QUALITY),
        VariantName::Small => base
            .width(400)
            .height(300)
            .crop(Crop::Limit)
            .quality(DEFAULT_QUALITY),
        VariantName::Medium => base
            .width(800)
            .height(600)
            .crop(Crop::Limit)
            .quality(DEFAULT_QUALITY),
        VariantName::Large => base
            .width(1200)
            .height(900)
            .crop(Crop::Limit)
            .quality(ECO_QUALITY),
        VariantName::Original => base.quality(DEFAULT_QUALITY),
    }
    .build()
}

/// Caller overrides for an on-demand URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomUrlOptions {
    /// Target width
    pub width: Option<u32>,
    /// Target height
    pub height: Option<u32>,
    /// Quality, default "auto:good"
    pub quality: Option<String>,
    /// Crop mode, default `limit`
    pub crop: Option<Crop>,
    /// Gravity, default "auto"
    pub gravity: Option<String>,
    /// Serve-time format, default "auto"
    pub format: Option<String>,
}

/// Modern-format URLs for browsers that negotiate formats explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModernFormats {
    /// WebP URL
    pub webp: String,
    /// AVIF URL
    pub avif: String,
    /// JPEG URL
    pub jpeg: String,
}

impl UrlBuilder {
    /// Build all five precomputed variants for an asset.
    pub fn generate_variants(&self, asset_id: &str) -> ResponsiveUrls {
        let url = |name| self.build_url(asset_id, &variant_params(name));
        ResponsiveUrls {
            thumbnail: url(VariantName::Thumbnail),
            small: url(VariantName::Small),
            medium: url(VariantName::Medium),
            large: url(VariantName::Large),
            original: url(VariantName::Original),
        }
    }

    /// Build a one-off URL outside the fixed presets.
    pub fn custom_url(&self, asset_id: &str, options: &CustomUrlOptions) -> String {
        let params = TransformParams::builder()
            .maybe_width(options.width)
            .maybe_height(options.height)
            .crop(options.crop.unwrap_or(Crop::Limit))
            .gravity(options.gravity.as_deref().unwrap_or("auto"))
            .quality(options.quality.as_deref().unwrap_or(DEFAULT_QUALITY))
            .fetch_format(options.format.as_deref().unwrap_or(AUTO_FORMAT))
            .dpr("auto")
            .secure(true)
            .build();
        self.build_url(asset_id, &params)
    }

    /// Build explicit webp/avif/jpg URLs, `width` defaulting to 1200.
    pub fn modern_formats(&self, asset_id: &str, width: Option<u32>) -> ModernFormats {
        let url = |extension: &str| {
            let params = TransformParams::builder()
                .width(width.unwrap_or(MODERN_FORMAT_WIDTH))
                .crop(Crop::Limit)
                .quality(DEFAULT_QUALITY)
                .format(extension)
                .secure(true)
                .build();
            self.build_url(asset_id, &params)
        };
        ModernFormats {
            webp: url("webp"),
            avif: url("avif"),
            jpeg: url("jpg"),
        }
    }
}
