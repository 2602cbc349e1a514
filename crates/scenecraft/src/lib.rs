//! Scenecraft - short story segmentation for vertical video
//!
//! Scenecraft takes a generated Korean short story of roughly 270-300
//! characters, checks it against length, content and structure bounds, and
//! cuts it into 6-10 scenes, each with an image prompt and a display
//! duration.
//!
//! # Quick Start
//!
//! ```
//! use scenecraft::{ChannelConfig, ScenecraftConfig, StoryService, generation_context, mock_pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScenecraftConfig::default();
//! let pipeline = mock_pipeline(&config);
//!
//! let story = pipeline
//!     .generate_story(&generation_context(&config), &ChannelConfig::named("demo"))
//!     .await?;
//! for scene in &story.scenes {
//!     println!("{} ({:.1}s): {}", scene.number, scene.duration, scene.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Scenecraft is organized as a workspace with focused crates:
//!
//! - `scenecraft-error` - Error types
//! - `scenecraft-core` - Story, scene and configuration types
//! - `scenecraft-interface` - Generator, validator, service and driver traits
//! - `scenecraft-segment` - Break points, planning, selection and annotation
//! - `scenecraft-validation` - Story and scene bounds
//! - `scenecraft-story` - Generators and the orchestration pipeline
//!
//! This crate (`scenecraft`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
pub mod telemetry;

pub use assembly::{
    content_validator, driver_pipeline, generation_context, mock_pipeline, scene_splitter,
};

pub use scenecraft_core::*;
pub use scenecraft_error::*;
pub use scenecraft_interface::*;
pub use scenecraft_segment::*;
pub use scenecraft_story::*;
pub use scenecraft_validation::*;
