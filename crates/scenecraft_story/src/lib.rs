//! Story generators and the orchestration pipeline.
//!
//! [`StoryPipeline`] is the [`StoryService`](scenecraft_interface::StoryService)
//! implementation: it generates a story under cancellation and a deadline,
//! validates it, segments it, and validates the scenes. Generators plug in
//! through [`StoryGenerator`](scenecraft_interface::StoryGenerator):
//!
//! - [`MockGenerator`] returns a fixed story and needs no network.
//! - [`DriverStoryGenerator`] wraps any [`StoryDriver`](scenecraft_interface::StoryDriver)
//!   text-completion backend and parses its reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod mock;
mod pipeline;

pub use driver::{CONTENT_LABEL, DriverStoryGenerator, TITLE_LABEL, parse_story_response};
pub use mock::{MOCK_CONTENT, MOCK_TITLE, MockBehavior, MockGenerator};
pub use pipeline::{PipelineStage, PipelineState, StoryPipeline};
