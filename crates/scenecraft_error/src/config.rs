//! Configuration error types.

/// A configuration file that could not be loaded or holds unusable settings.
///
/// Settings rejected by validation carry the dotted `section.key` they came
/// from, so callers can point the user at the offending line of
/// `scenecraft.toml`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Dotted key of the rejected setting, e.g. `segmentation.max_scenes`
    pub key: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A load or parse failure not tied to one setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse scenecraft.toml");
    /// assert!(err.key.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A setting rejected by validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("segmentation.min_scenes", "must be positive");
    /// assert_eq!(err.key(), Some("segmentation.min_scenes"));
    /// assert_eq!(err.message, "segmentation.min_scenes must be positive");
    /// ```
    #[track_caller]
    pub fn invalid(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let key = key.into();
        let location = std::panic::Location::caller();
        Self {
            message: format!("{} {}", key, reason),
            key: Some(key),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Dotted key of the rejected setting, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
