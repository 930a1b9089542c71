//! Transformation parameters.

use serde::{Deserialize, Serialize};

/// Crop mode applied when resizing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Crop {
    /// Resize to exactly fill the box, cropping the excess
    Fill,
    /// Shrink to fit inside the box, never upscale
    Limit,
    /// Resize to fit inside the box, may upscale
    Fit,
    /// Resize to the box ignoring aspect ratio
    Scale,
    /// Face-aware thumbnail crop
    Thumb,
    /// Fit inside the box and pad the remainder
    Pad,
}

/// Named transformation options resolved by the provider at fetch time.
///
/// Unset options are omitted from the rendered transformation.
///
/// # Examples
///
/// ```
/// use lumen_cdn::{Crop, TransformParams};
///
/// let params = TransformParams::builder()
///     .width(150)
///     .height(150)
///     .crop(Crop::Fill)
///     .quality("auto:good")
///     .build();
///
/// assert_eq!(params.transformation(), "c_fill,h_150,q_auto:good,w_150");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformParams {
    /// Target width in pixels
    pub width: Option<u32>,
    /// Target height in pixels
    pub height: Option<u32>,
    /// Crop mode
    pub crop: Option<Crop>,
    /// Focus area for cropping, e.g. "auto" or "face"
    pub gravity: Option<String>,
    /// Quality setting, e.g. "auto:good"
    pub quality: Option<String>,
    /// Delivery format chosen at serve time, e.g. "auto"
    pub fetch_format: Option<String>,
    /// File extension appended to the asset id, e.g. "webp"
    pub format: Option<String>,
    /// Device pixel ratio, e.g. "auto" or "2.0"
    pub dpr: Option<String>,
    /// Delivery flags such as "progressive"
    pub flags: Vec<String>,
    /// Use https
    pub secure: bool,
}

impl TransformParams {
    /// Creates a new params builder.
    pub fn builder() -> TransformParamsBuilder {
        TransformParamsBuilder::default()
    }

    /// Render the comma-separated transformation component.
    ///
    /// Components are ordered by key so equal params always render the same
    /// string. Returns an empty string when nothing is set.
    pub fn transformation(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(crop) = self.crop {
            parts.push(format!("c_{}", crop));
        }
        if let Some(dpr) = non_empty(&self.dpr) {
            parts.push(format!("dpr_{}", dpr));
        }
        if let Some(fetch_format) = non_empty(&self.fetch_format) {
            parts.push(format!("f_{}", fetch_format));
        }
        let flags: Vec<&str> = self
            .flags
            .iter()
            .map(String::as_str)
            .filter(|flag| !flag.is_empty())
            .collect();
        if !flags.is_empty() {
            parts.push(format!("fl_{}", flags.join(".")));
        }
        if let Some(gravity) = non_empty(&self.gravity) {
            parts.push(format!("g_{}", gravity));
        }
        if let Some(height) = self.height {
            parts.push(format!("h_{}", height));
        }
        if let Some(quality) = non_empty(&self.quality) {
            parts.push(format!("q_{}", quality));
        }
        if let Some(width) = self.width {
            parts.push(format!("w_{}", width));
        }

        parts.join(",")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builder for `TransformParams`.
#[derive(Debug, Default)]
pub struct TransformParamsBuilder {
    params: TransformParams,
}

impl TransformParamsBuilder {
    /// Sets the width.
    pub fn width(mut self, width: u32) -> Self {
        self.params.width = Some(width);
        self
    }

    /// Sets the width when present.
    pub fn maybe_width(mut self, width: Option<u32>) -> Self {
        self.params.width = width;
        self
    }

    /// Sets the height.
    pub fn height(mut self, height: u32) -> Self {
        self.params.height = Some(height);
        self
    }

    /// Sets the height when present.
    pub fn maybe_height(mut self, height: Option<u32>) -> Self {
        self.params.height = height;
        self
    }

    /// Sets the crop mode.
    pub fn crop(mut self, crop: Crop) -> Self {
        self.params.crop = Some(crop);
        self
    }

    /// Sets the gravity.
    pub fn gravity(mut self, gravity: impl Into<String>) -> Self {
        self.params.gravity = Some(gravity.into());
        self
    }

    /// Sets the quality.
    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.params.quality = Some(quality.into());
        self
    }

    /// Sets the serve-time format.
    pub fn fetch_format(mut self, fetch_format: impl Into<String>) -> Self {
        self.params.fetch_format = Some(fetch_format.into());
        self
    }

    /// Sets the file extension format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.params.format = Some(format.into());
        self
    }

    /// Sets the device pixel ratio.
    pub fn dpr(mut self, dpr: impl Into<String>) -> Self {
        self.params.dpr = Some(dpr.into());
        self
    }

    /// Adds a delivery flag.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.params.flags.push(flag.into());
        self
    }

    /// Sets whether the URL uses https.
    pub fn secure(mut self, secure: bool) -> Self {
        self.params.secure = secure;
        self
    }

    /// Builds the `TransformParams`.
    pub fn build(self) -> TransformParams {
        self.params
    }
}
