//! Generator, validator and service traits.

use crate::{GenerationContext, StoryRequest};
use async_trait::async_trait;
use scenecraft_core::{ChannelConfig, Scene, Story};
use scenecraft_error::{ScenecraftResult, ValidationResult};

/// Produces raw stories and cuts them into scenes.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate an unsegmented story for the channel.
    async fn generate_story(&self, channel: &ChannelConfig) -> ScenecraftResult<Story>;

    /// Segment the story content and assign `story.scenes`.
    async fn divide_into_scenes(&self, story: &mut Story) -> ScenecraftResult<()>;
}

/// Accepts or rejects candidate stories and scene lists.
///
/// Implementations report the first violated bound only.
pub trait StoryValidator: Send + Sync {
    /// Check title, content length, denylist and sentence structure.
    fn validate_story(&self, story: &Story) -> ValidationResult<()>;

    /// Check scene count and per-scene required fields.
    fn validate_scenes(&self, scenes: &[Scene]) -> ValidationResult<()>;
}

/// The single entry point HTTP and CLI adapters call.
#[async_trait]
pub trait StoryService: Send + Sync {
    /// Generate, validate, segment and re-validate one story.
    async fn generate_story(
        &self,
        ctx: &GenerationContext,
        channel: &ChannelConfig,
    ) -> ScenecraftResult<Story>;
}

/// Text-completion backend used to write stories.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Complete the request and return the raw reply text.
    async fn complete(&self, request: &StoryRequest) -> ScenecraftResult<String>;

    /// Backend name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;
}
