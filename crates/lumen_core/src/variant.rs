//! Named responsive variants.

use serde::{Deserialize, Serialize};

/// The fixed set of precomputed variants stored with every image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VariantName {
    /// 150x150 cropped square
    Thumbnail,
    /// Fits within 400x300
    Small,
    /// Fits within 800x600
    Medium,
    /// Fits within 1200x900
    Large,
    /// Ingested asset with automatic quality and format
    Original,
}

/// Variant name to URL mapping for one asset.
///
/// # Examples
///
/// ```
/// use lumen_core::{ResponsiveUrls, VariantName};
///
/// let urls = ResponsiveUrls {
///     thumbnail: "t".into(),
///     small: "s".into(),
///     medium: "m".into(),
///     large: "l".into(),
///     original: "o".into(),
/// };
/// assert_eq!(urls.get(VariantName::Medium), "m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponsiveUrls {
    /// Thumbnail URL
    pub thumbnail: String,
    /// Small URL
    pub small: String,
    /// Medium URL
    pub medium: String,
    /// Large URL
    pub large: String,
    /// Original URL
    pub original: String,
}

impl ResponsiveUrls {
    /// URL of the named variant.
    pub fn get(&self, name: VariantName) -> &str {
        match name {
            VariantName::Thumbnail => &self.thumbnail,
            VariantName::Small => &self.small,
            VariantName::Medium => &self.medium,
            VariantName::Large => &self.large,
            VariantName::Original => &self.original,
        }
    }

    /// Iterate `(name, url)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (VariantName, &str)> {
        use strum::IntoEnumIterator;
        VariantName::iter().map(move |name| (name, self.get(name)))
    }
}
