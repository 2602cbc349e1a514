//! Error types for the scenecraft pipeline.
//!
//! This crate provides the foundation error types used throughout the scenecraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Each pipeline stage reports exactly one of these:
//! - [`GenerationError`] - the story backend failed, was cancelled, or timed out
//! - [`ValidationError`] - a story or scene list violated a structural bound
//! - [`SegmentationError`] - the scene splitter could not work with its input
//!
//! # Examples
//!
//! ```
//! use scenecraft_error::{ScenecraftResult, SegmentationError, SegmentationErrorKind};
//!
//! fn split(content: &str) -> ScenecraftResult<usize> {
//!     if content.is_empty() {
//!         Err(SegmentationError::new(SegmentationErrorKind::EmptyContent))?
//!     }
//!     Ok(content.len())
//! }
//!
//! assert!(split("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod segmentation;
mod validation;

pub use config::ConfigError;
pub use error::{ScenecraftError, ScenecraftErrorKind, ScenecraftResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use segmentation::{SegmentationError, SegmentationErrorKind};
pub use validation::{ValidationCategory, ValidationError, ValidationErrorKind, ValidationResult};
