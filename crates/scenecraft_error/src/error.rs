//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, SegmentationError, ValidationError};

/// Every failure the pipeline can report.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{ScenecraftError, ConfigError};
///
/// let err: ScenecraftError = ConfigError::new("bad value").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenecraftErrorKind {
    /// Story backend failure, cancellation or timeout
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Story or scene validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Scene segmentation failure
    #[from(SegmentationError)]
    Segmentation(SegmentationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scenecraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{ScenecraftResult, ValidationError, ValidationErrorKind};
///
/// fn check() -> ScenecraftResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::TitleEmpty))?
/// }
///
/// let err = check().unwrap_err();
/// assert!(err.is_client_error());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenecraft Error: {}", _0)]
pub struct ScenecraftError(Box<ScenecraftErrorKind>);

impl ScenecraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenecraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenecraftErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> ScenecraftErrorKind {
        *self.0
    }

    /// Validation failures are the caller's fault; everything else is ours.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ScenecraftErrorKind::Validation(_))
    }

    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.kind() {
            ScenecraftErrorKind::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ScenecraftErrorKind
impl<T> From<T> for ScenecraftError
where
    T: Into<ScenecraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scenecraft operations.
pub type ScenecraftResult<T> = std::result::Result<T, ScenecraftError>;
