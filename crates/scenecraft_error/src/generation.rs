//! Story generation error types.

/// Specific error conditions for the story generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The story backend reported a failure
    #[display("Story backend failed: {}", _0)]
    Backend(String),
    /// The backend answered with nothing usable
    #[display("Story backend returned an empty response")]
    EmptyResponse,
    /// The caller cancelled the request
    #[display("Story generation was cancelled")]
    Cancelled,
    /// The backend did not answer within the deadline
    #[display("Story generation timed out after {} ms", _0)]
    TimedOut(u64),
}

/// Error type for the story generation stage.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Cancelled);
/// assert!(format!("{}", err).contains("cancelled"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a backend failure with a message.
    #[track_caller]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Backend(message.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
