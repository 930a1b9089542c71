//! Process configuration.

use derive_getters::Getters;
use lumen_cdn::CdnConfig;
use lumen_core::LogFormat;
use lumen_error::ConfigError;
use std::str::FromStr;

/// Origin allowed outside production.
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:5173";
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, selects the permitted cross-origin source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
}

/// Limits enforced on multipart uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
pub struct UploadLimits {
    /// Maximum number of file parts per request
    #[builder(default = "10")]
    max_files: usize,
    /// Maximum bytes per file
    #[builder(default = "10 * 1024 * 1024")]
    max_file_size: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_files: 10,
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl UploadLimits {
    /// Per-file limit in whole megabytes, for messages.
    pub fn max_file_megabytes(&self) -> usize {
        self.max_file_size / (1024 * 1024)
    }

    /// Ceiling for a whole request body: every file at its limit plus form overhead.
    pub fn body_limit(&self) -> usize {
        self.max_files
            .saturating_mul(self.max_file_size)
            .saturating_add(1024 * 1024)
    }
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Listening port
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
    /// PostgreSQL connection string; the memory store is used when absent
    #[builder(default)]
    database_url: Option<String>,
    /// Provider account configuration
    cdn: CdnConfig,
    /// Cross-origin source permitted in production
    #[builder(default)]
    app_origin: Option<String>,
    /// Deployment environment
    #[builder(default)]
    environment: Environment,
    /// Log line format
    #[builder(default)]
    log_format: LogFormat,
    /// Upload limits
    #[builder(default)]
    limits: UploadLimits,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `PORT` (default: 3000)
    /// - `DATABASE_URL` (optional)
    /// - `APP_ORIGIN` (required when `APP_ENV=production`)
    /// - `APP_ENV` (default: "development")
    /// - `LOG_FORMAT` ("pretty" or "json", default: "pretty")
    /// - `CLOUDINARY_*`, see [`CdnConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::invalid_var("PORT", &value))?,
            Err(_) => DEFAULT_PORT,
        };
        let environment = parse_env_or_default::<Environment>("APP_ENV")?;
        let log_format = parse_env_or_default::<LogFormat>("LOG_FORMAT")?;
        let app_origin = std::env::var("APP_ORIGIN").ok().filter(|o| !o.is_empty());

        let config = Self {
            port,
            database_url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            cdn: CdnConfig::from_env()?,
            app_origin,
            environment,
            log_format,
            limits: UploadLimits::default(),
        };
        config.cors_origin()?;
        Ok(config)
    }

    /// The single origin allowed to make credentialed cross-origin requests.
    pub fn cors_origin(&self) -> Result<&str, ConfigError> {
        match self.environment {
            Environment::Production => self
                .app_origin
                .as_deref()
                .ok_or_else(|| ConfigError::new("APP_ORIGIN must be set in production")),
            Environment::Development => Ok(DEVELOPMENT_ORIGIN),
        }
    }
}

fn parse_env_or_default<T>(name: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default,
{
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| ConfigError::invalid_var(name, &value)),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_cdn::CdnConfigBuilder;

    fn cdn() -> CdnConfig {
        CdnConfigBuilder::default()
            .cloud_name("demo")
            .api_key("key")
            .api_secret("secret")
            .build()
            .unwrap()
    }

    #[test]
    fn development_allows_local_frontend() {
        let config = ServerConfigBuilder::default()
            .cdn(cdn())
            .app_origin(Some("https://images.example.com".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.cors_origin().unwrap(), DEVELOPMENT_ORIGIN);
        assert_eq!(*config.port(), DEFAULT_PORT);
    }

    #[test]
    fn production_uses_app_origin() {
        let config = ServerConfigBuilder::default()
            .cdn(cdn())
            .environment(Environment::Production)
            .app_origin(Some("https://images.example.com".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.cors_origin().unwrap(), "https://images.example.com");
    }

    #[test]
    fn production_without_origin_is_rejected() {
        let config = ServerConfigBuilder::default()
            .cdn(cdn())
            .environment(Environment::Production)
            .build()
            .unwrap();
        assert!(config.cors_origin().is_err());
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(
            "PRODUCTION".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn default_limits() {
        let limits = UploadLimits::default();
        assert_eq!(*limits.max_files(), 10);
        assert_eq!(limits.max_file_megabytes(), 10);
        assert!(limits.body_limit() > 10 * *limits.max_file_size());
    }
}
