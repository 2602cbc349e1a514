//! Story generation through a text-completion driver.

use async_trait::async_trait;
use scenecraft_core::{ChannelConfig, ScenecraftConfig};
use scenecraft_error::{ConfigError, GenerationErrorKind, ScenecraftErrorKind, ScenecraftResult};
use scenecraft_interface::{
    GenerationContext, StoryDriver, StoryGenerator, StoryRequest, StoryService,
};
use scenecraft_story::{DriverStoryGenerator, MOCK_CONTENT, StoryPipeline};
use scenecraft_validation::ContentValidator;
use std::sync::Mutex;

/// Answers every request with a fixed reply (or a config error) and
/// remembers the last request.
struct ScriptedDriver {
    reply: Option<String>,
    last_request: Mutex<Option<StoryRequest>>,
}

impl ScriptedDriver {
    fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            last_request: Mutex::new(None),
        }
    }

    fn failing_with_config_error() -> Self {
        Self {
            reply: None,
            last_request: Mutex::new(None),
        }
    }

    fn last_request(&self) -> Option<StoryRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryDriver for ScriptedDriver {
    async fn complete(&self, request: &StoryRequest) -> ScenecraftResult<String> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(ConfigError::new("missing api key").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn generator(driver: ScriptedDriver) -> DriverStoryGenerator<ScriptedDriver> {
    DriverStoryGenerator::from_config(driver, &ScenecraftConfig::default())
}

#[tokio::test]
async fn test_formatted_reply_is_parsed() {
    let generator = generator(ScriptedDriver::replying(format!(
        "제목: 작은 별\n내용: {MOCK_CONTENT}"
    )));

    let story = generator
        .generate_story(&ChannelConfig::named("stars"))
        .await
        .unwrap();
    assert_eq!(story.title, "작은 별");
    assert_eq!(story.content, MOCK_CONTENT);
    assert!(story.scenes.is_empty());
}

#[tokio::test]
async fn test_channel_template_is_sent() {
    let generator = generator(ScriptedDriver::replying("제목: 별\n내용: 이야기"));
    let channel = ChannelConfig::builder()
        .name("fairy_tales")
        .prompt_template("동화를 써주세요")
        .build()
        .unwrap();

    generator.generate_story(&channel).await.unwrap();

    let request = generator.driver().last_request().unwrap();
    assert_eq!(request.prompt(), "동화를 써주세요");
    assert_eq!(
        request.system(),
        &ScenecraftConfig::default().story.system_prompt
    );
}

#[tokio::test]
async fn test_blank_template_uses_default_prompt() {
    let generator = generator(ScriptedDriver::replying("제목: 별\n내용: 이야기"));
    let channel = ChannelConfig::builder()
        .name("blank")
        .prompt_template("   ")
        .build()
        .unwrap();

    generator.generate_story(&channel).await.unwrap();

    let request = generator.driver().last_request().unwrap();
    assert_eq!(
        request.prompt(),
        &ScenecraftConfig::default().story.default_prompt
    );
}

#[tokio::test]
async fn test_unformatted_reply_gets_default_title() {
    let generator = generator(ScriptedDriver::replying("형식이 없는 순수한 텍스트입니다."));

    let story = generator
        .generate_story(&ChannelConfig::named("plain"))
        .await
        .unwrap();
    assert_eq!(story.title, "무제");
    assert_eq!(story.content, "형식이 없는 순수한 텍스트입니다.");
}

#[tokio::test]
async fn test_empty_reply_is_a_generation_error() {
    let generator = generator(ScriptedDriver::replying("  \n "));

    let err = generator
        .generate_story(&ChannelConfig::named("empty"))
        .await
        .unwrap_err();
    match err.kind() {
        ScenecraftErrorKind::Generation(e) => {
            assert_eq!(e.kind(), &GenerationErrorKind::EmptyResponse)
        }
        other => panic!("Expected generation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_divide_into_scenes_assigns_scenes() {
    let generator = generator(ScriptedDriver::replying(format!(
        "제목: 작은 별\n내용: {MOCK_CONTENT}"
    )));

    let mut story = generator
        .generate_story(&ChannelConfig::named("stars"))
        .await
        .unwrap();
    generator.divide_into_scenes(&mut story).await.unwrap();

    assert_eq!(story.scenes.len(), 9);
    assert_eq!(story.scenes[0].number, 1);
}

#[tokio::test]
async fn test_pipeline_over_driver() {
    let pipeline = StoryPipeline::new(
        generator(ScriptedDriver::replying(format!(
            "제목: 작은 별\n내용: {MOCK_CONTENT}"
        ))),
        ContentValidator::default(),
    );

    let story = pipeline
        .generate_story(&GenerationContext::new(), &ChannelConfig::named("stars"))
        .await
        .unwrap();
    assert_eq!(story.title, "작은 별");
    assert_eq!(story.scenes.len(), 9);
}

#[tokio::test]
async fn test_driver_errors_become_generation_errors() {
    let pipeline = StoryPipeline::new(
        generator(ScriptedDriver::failing_with_config_error()),
        ContentValidator::default(),
    );

    let err = pipeline
        .generate_story(&GenerationContext::new(), &ChannelConfig::named("broken"))
        .await
        .unwrap_err();
    match err.kind() {
        ScenecraftErrorKind::Generation(e) => match e.kind() {
            GenerationErrorKind::Backend(message) => {
                assert!(message.contains("missing api key"))
            }
            other => panic!("Expected backend failure, got {other:?}"),
        },
        other => panic!("Expected generation error, got {other:?}"),
    }
}
