//! Story and scene validation error types.

/// Specific validation failures, in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Story title is empty
    #[display("Title is empty")]
    TitleEmpty,
    /// Story title exceeds the rune limit
    #[display("Title too long: {} characters (max {})", actual, max)]
    TitleTooLong {
        /// Maximum allowed runes
        max: usize,
        /// Actual rune count
        actual: usize,
    },
    /// Story content is empty
    #[display("Content is empty")]
    ContentEmpty,
    /// Story content is below the rune minimum
    #[display("Content too short: {} characters (min {})", actual, min)]
    ContentTooShort {
        /// Minimum required runes
        min: usize,
        /// Actual rune count
        actual: usize,
    },
    /// Story content exceeds the rune maximum
    #[display("Content too long: {} characters (max {})", actual, max)]
    ContentTooLong {
        /// Maximum allowed runes
        max: usize,
        /// Actual rune count
        actual: usize,
    },
    /// Content matched a denylisted term
    #[display("Inappropriate content detected")]
    InappropriateContent,
    /// Content has too few sentences for a beginning, middle and end
    #[display("Story needs at least {} sentences (got {})", min, actual)]
    StructureInvalid {
        /// Minimum sentence fragments
        min: usize,
        /// Actual sentence fragments
        actual: usize,
    },
    /// Scene list is shorter than allowed
    #[display("Too few scenes: {} (min {})", actual, min)]
    TooFewScenes {
        /// Minimum scenes
        min: usize,
        /// Actual scenes
        actual: usize,
    },
    /// Scene list is longer than allowed
    #[display("Too many scenes: {} (max {})", actual, max)]
    TooManyScenes {
        /// Maximum scenes
        max: usize,
        /// Actual scenes
        actual: usize,
    },
    /// A scene has an empty description
    #[display("Scene {} has an empty description", position)]
    SceneDescriptionEmpty {
        /// 1-based position in the scene list
        position: usize,
    },
    /// A scene has an empty image prompt
    #[display("Scene {} has an empty image prompt", position)]
    SceneImagePromptEmpty {
        /// 1-based position in the scene list
        position: usize,
    },
    /// A scene has a non-positive duration
    #[display("Scene {} has invalid duration {}", position, duration)]
    SceneDurationInvalid {
        /// 1-based position in the scene list
        position: usize,
        /// The offending duration in seconds
        duration: f64,
    },
}

/// Coarse grouping of validation failures.
///
/// Callers that only care about the class of failure (for example to pick a
/// status code) can match on this instead of every [`ValidationErrorKind`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter,
)]
pub enum ValidationCategory {
    /// A required value is empty
    Empty,
    /// A value is below its lower bound
    TooShort,
    /// A value is above its upper bound
    TooLong,
    /// Content lacks narrative structure
    StructureInvalid,
    /// Content matched the denylist
    InappropriateContent,
    /// Scene count below minimum
    TooFewScenes,
    /// Scene count above maximum
    TooManyScenes,
    /// A scene field is missing or out of range
    SceneFieldInvalid,
}

impl ValidationErrorKind {
    /// The coarse category of this failure.
    pub fn category(&self) -> ValidationCategory {
        match self {
            Self::TitleEmpty | Self::ContentEmpty => ValidationCategory::Empty,
            Self::ContentTooShort { .. } => ValidationCategory::TooShort,
            Self::TitleTooLong { .. } | Self::ContentTooLong { .. } => ValidationCategory::TooLong,
            Self::InappropriateContent => ValidationCategory::InappropriateContent,
            Self::StructureInvalid { .. } => ValidationCategory::StructureInvalid,
            Self::TooFewScenes { .. } => ValidationCategory::TooFewScenes,
            Self::TooManyScenes { .. } => ValidationCategory::TooManyScenes,
            Self::SceneDescriptionEmpty { .. }
            | Self::SceneImagePromptEmpty { .. }
            | Self::SceneDurationInvalid { .. } => ValidationCategory::SceneFieldInvalid,
        }
    }

    /// 1-based position of the offending scene, for scene field failures.
    pub fn scene_position(&self) -> Option<usize> {
        match self {
            Self::SceneDescriptionEmpty { position }
            | Self::SceneImagePromptEmpty { position }
            | Self::SceneDurationInvalid { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Error type for story and scene validation.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{ValidationCategory, ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::SceneDurationInvalid {
///     position: 3,
///     duration: 0.0,
/// });
/// assert_eq!(err.kind.category(), ValidationCategory::SceneFieldInvalid);
/// assert_eq!(err.kind.scene_position(), Some(3));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific validation failure
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Get the coarse category.
    pub fn category(&self) -> ValidationCategory {
        self.kind.category()
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
