//! Scene segmentation error types.

/// Specific error conditions for scene segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SegmentationErrorKind {
    /// Story content is empty
    #[display("Story content is empty")]
    EmptyContent,
    /// Content produced no scenes after trimming
    #[display("Story content produced no scenes")]
    NoScenes,
    /// Splitter was configured with an unusable target
    #[display("Invalid scene target: {}", _0)]
    InvalidTarget(String),
    /// Segmentation failed for another reason
    #[display("Segmentation failed: {}", _0)]
    Failed(String),
}

/// Error type for scene segmentation.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{SegmentationError, SegmentationErrorKind};
///
/// let err = SegmentationError::new(SegmentationErrorKind::EmptyContent);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Segmentation Error: {} at line {} in {}", kind, line, file)]
pub struct SegmentationError {
    /// The specific error condition
    pub kind: SegmentationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SegmentationError {
    /// Create a new SegmentationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SegmentationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SegmentationErrorKind {
        &self.kind
    }
}
