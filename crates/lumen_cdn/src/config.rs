//! Provider account configuration.

use derive_getters::Getters;
use lumen_error::ConfigError;

/// Default host serving transformed assets.
pub const DEFAULT_DELIVERY_HOST: &str = "res.cloudinary.com";
/// Default base URL of the provider's REST API.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
/// Folder every upload is placed under.
pub const DEFAULT_UPLOAD_FOLDER: &str = "my-images";

/// Immutable provider credentials and endpoints.
///
/// Built once at process start and shared by the URL builder and the
/// provider client.
///
/// # Examples
///
/// ```
/// use lumen_cdn::CdnConfigBuilder;
///
/// let config = CdnConfigBuilder::default()
///     .cloud_name("demo")
///     .api_key("key")
///     .api_secret("secret")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cloud_name(), "demo");
/// assert_eq!(config.upload_folder(), "my-images");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CdnConfig {
    /// Account (cloud) name
    cloud_name: String,
    /// API key
    api_key: String,
    /// API secret used for signing and basic auth
    api_secret: String,
    /// Folder uploads are stored under
    #[builder(default = "DEFAULT_UPLOAD_FOLDER.to_string()")]
    upload_folder: String,
    /// Host serving delivery URLs
    #[builder(default = "DEFAULT_DELIVERY_HOST.to_string()")]
    delivery_host: String,
    /// REST API base URL, without a trailing slash
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
}

impl std::fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdnConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("upload_folder", &self.upload_folder)
            .field("delivery_host", &self.delivery_host)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl CdnConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `CLOUDINARY_CLOUD_NAME` (required)
    /// - `CLOUDINARY_API_KEY` (required)
    /// - `CLOUDINARY_API_SECRET` (required)
    /// - `CLOUDINARY_UPLOAD_FOLDER` (default: "my-images")
    /// - `CLOUDINARY_API_BASE` (default: "https://api.cloudinary.com")
    pub fn from_env() -> Result<Self, ConfigError> {
        let required = |name: &str| {
            std::env::var(name).map_err(|_| ConfigError::missing_var(name))
        };

        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
            upload_folder: std::env::var("CLOUDINARY_UPLOAD_FOLDER")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER.to_string()),
            delivery_host: DEFAULT_DELIVERY_HOST.to_string(),
            api_base: std::env::var("CLOUDINARY_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}
