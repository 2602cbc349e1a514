//! Components wired from configuration.

use async_trait::async_trait;
use scenecraft::{
    ChannelConfig, MOCK_CONTENT, PipelineConfig, ScenecraftConfig, ScenecraftResult,
    SegmentationConfig, StoryDriver, StoryRequest, StoryService, StoryValidator,
    ValidationConfig, content_validator, driver_pipeline, generation_context, mock_pipeline,
    scene_splitter,
};
use std::time::Duration;

struct FixedDriver;

#[async_trait]
impl StoryDriver for FixedDriver {
    async fn complete(&self, _request: &StoryRequest) -> ScenecraftResult<String> {
        Ok(format!("제목: 반딧불이\n내용: {MOCK_CONTENT}"))
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

#[tokio::test]
async fn test_mock_pipeline_with_defaults() {
    let config = ScenecraftConfig::default();
    let story = mock_pipeline(&config)
        .generate_story(&generation_context(&config), &ChannelConfig::named("demo"))
        .await
        .unwrap();

    assert_eq!(story.scenes.len(), 9);
    assert!(story.total_duration() >= 27.0);
}

#[tokio::test]
async fn test_driver_pipeline_with_defaults() {
    let config = ScenecraftConfig::default();
    let story = driver_pipeline(FixedDriver, &config)
        .generate_story(&generation_context(&config), &ChannelConfig::named("demo"))
        .await
        .unwrap();

    assert_eq!(story.title, "반딧불이");
    assert_eq!(story.scenes.len(), 9);
}

#[test]
fn test_context_carries_configured_timeout() {
    let config = ScenecraftConfig::default();
    assert_eq!(
        generation_context(&config).timeout(),
        Some(Duration::from_secs(30))
    );

    let config = ScenecraftConfig {
        pipeline: PipelineConfig {
            generation_timeout_secs: 0,
        },
        ..ScenecraftConfig::default()
    };
    assert_eq!(generation_context(&config).timeout(), None);
}

#[test]
fn test_components_follow_configuration() {
    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            min_scenes: 2,
            max_scenes: 3,
            ..SegmentationConfig::default()
        },
        validation: ValidationConfig {
            min_scenes: 2,
            max_scenes: 3,
            ..ValidationConfig::default()
        },
        ..ScenecraftConfig::default()
    };

    let scenes = scene_splitter(&config).segment(MOCK_CONTENT).unwrap();
    assert!(scenes.len() <= 3);
    assert!(content_validator(&config).validate_scenes(&scenes).is_ok());
}
