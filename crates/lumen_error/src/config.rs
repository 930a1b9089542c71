//! Process configuration errors.
//!
//! Raised while reading the environment at startup, before the server binds.

/// Unusable process configuration, such as an unset `CLOUDINARY_API_SECRET`
/// or a `PORT` that does not parse.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Environment variable at fault, when there is one
    pub variable: Option<String>,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Configuration error not tied to a single variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_error::ConfigError;
    ///
    /// let err = ConfigError::new("APP_ORIGIN must be set in production");
    /// assert!(err.variable.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message.into(), None)
    }

    /// A required environment variable is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_error::ConfigError;
    ///
    /// let err = ConfigError::missing_var("CLOUDINARY_CLOUD_NAME");
    /// assert_eq!(err.message, "CLOUDINARY_CLOUD_NAME not set");
    /// assert_eq!(err.variable.as_deref(), Some("CLOUDINARY_CLOUD_NAME"));
    /// ```
    #[track_caller]
    pub fn missing_var(name: &str) -> Self {
        Self::at(format!("{} not set", name), Some(name.to_string()))
    }

    /// An environment variable holds a value that cannot be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_var("PORT", "eighty");
    /// assert_eq!(err.message, "PORT has unsupported value: eighty");
    /// ```
    #[track_caller]
    pub fn invalid_var(name: &str, value: &str) -> Self {
        Self::at(
            format!("{} has unsupported value: {}", name, value),
            Some(name.to_string()),
        )
    }

    #[track_caller]
    fn at(message: String, variable: Option<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            variable,
            line: location.line(),
            file: location.file(),
        }
    }
}
