//! Bounds checks for generated stories and their scenes.
//!
//! [`ContentValidator`] implements [`StoryValidator`] over a
//! [`ValidationConfig`]. Checks run in a fixed order and the first failure is
//! returned as a [`ValidationError`](scenecraft_error::ValidationError).
//!
//! [`StoryValidator`]: scenecraft_interface::StoryValidator
//! [`ValidationConfig`]: scenecraft_core::ValidationConfig

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod validator;

pub use validator::{ContentValidator, count_sentences};
