//! Trait definitions for the scenecraft pipeline.
//!
//! The segmentation core talks to the outside world through these seams:
//! a [`StoryGenerator`] that produces and segments stories, a
//! [`StoryValidator`] that accepts or rejects them, and the [`StoryService`]
//! entry point adapters call. [`StoryDriver`] is the narrower text-completion
//! contract an LLM backend implements to be wrapped as a generator.

mod context;
mod traits;

pub use context::{GenerationContext, StoryRequest};
pub use traits::{StoryDriver, StoryGenerator, StoryService, StoryValidator};
