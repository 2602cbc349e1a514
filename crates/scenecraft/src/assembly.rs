//! Wiring of pipeline components from a loaded configuration.

use scenecraft_core::ScenecraftConfig;
use scenecraft_interface::{GenerationContext, StoryDriver};
use scenecraft_segment::SceneSplitter;
use scenecraft_story::{DriverStoryGenerator, MockGenerator, StoryPipeline};
use scenecraft_validation::ContentValidator;

/// A splitter using the configured segmentation and projection settings.
pub fn scene_splitter(config: &ScenecraftConfig) -> SceneSplitter {
    SceneSplitter::new(config.segmentation.clone(), config.story.clone())
}

/// A validator using the configured bounds.
pub fn content_validator(config: &ScenecraftConfig) -> ContentValidator {
    ContentValidator::new(config.validation.clone())
}

/// A context carrying the configured generation deadline.
pub fn generation_context(config: &ScenecraftConfig) -> GenerationContext {
    match config.pipeline.generation_timeout() {
        Some(timeout) => GenerationContext::new().with_timeout(timeout),
        None => GenerationContext::new(),
    }
}

/// A pipeline over the built-in mock story.
pub fn mock_pipeline(config: &ScenecraftConfig) -> StoryPipeline<MockGenerator, ContentValidator> {
    StoryPipeline::new(
        MockGenerator::new().with_splitter(scene_splitter(config)),
        content_validator(config),
    )
}

/// A pipeline over a text-completion backend.
pub fn driver_pipeline<D: StoryDriver>(
    driver: D,
    config: &ScenecraftConfig,
) -> StoryPipeline<DriverStoryGenerator<D>, ContentValidator> {
    StoryPipeline::new(
        DriverStoryGenerator::from_config(driver, config),
        content_validator(config),
    )
}
