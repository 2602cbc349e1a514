//! Core data types for the scenecraft pipeline.
//!
//! This crate provides the story model shared by every other crate, the
//! channel prompt configuration generators consume, and the layered
//! TOML configuration for segmentation, validation and scene projection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod config;
mod scene_type;
mod story;

pub use channel::{ChannelConfig, ChannelConfigBuilder};
pub use config::{
    PipelineConfig, ScenecraftConfig, SegmentationConfig, StoryConfig, ValidationConfig,
};
pub use scene_type::SceneType;
pub use story::{Scene, Story};
