//! Story generation over a text-completion backend.

use async_trait::async_trait;
use scenecraft_core::{ChannelConfig, ScenecraftConfig, Story, StoryConfig};
use scenecraft_error::{GenerationError, GenerationErrorKind, ScenecraftResult};
use scenecraft_interface::{StoryDriver, StoryGenerator, StoryRequest};
use scenecraft_segment::SceneSplitter;
use tracing::{debug, instrument, warn};

/// Line prefix carrying the story title in a backend reply.
pub const TITLE_LABEL: &str = "제목:";

/// Line prefix opening the story content in a backend reply.
pub const CONTENT_LABEL: &str = "내용:";

/// Parse a backend reply into an unsegmented story.
///
/// A line starting with [`TITLE_LABEL`] gives the title. The first line
/// starting with [`CONTENT_LABEL`] and every line after it, joined with
/// spaces, give the content. If either part is missing the whole reply
/// becomes the content under `default_title`.
///
/// # Examples
///
/// ```
/// use scenecraft_story::parse_story_response;
///
/// let story = parse_story_response("제목: 별\n내용: 첫 줄.\n둘째 줄.", "무제");
/// assert_eq!(story.title, "별");
/// assert_eq!(story.content, "첫 줄. 둘째 줄.");
///
/// let story = parse_story_response("형식이 없는 이야기", "무제");
/// assert_eq!(story.title, "무제");
/// assert_eq!(story.content, "형식이 없는 이야기");
/// ```
pub fn parse_story_response(reply: &str, default_title: &str) -> Story {
    let lines: Vec<&str> = reply.split('\n').collect();
    let mut title = "";
    let mut content = String::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(rest) = line.strip_prefix(TITLE_LABEL) {
            title = rest.trim();
        } else if line.starts_with(CONTENT_LABEL) {
            let joined = lines[index..].join(" ");
            content = joined
                .strip_prefix(CONTENT_LABEL)
                .unwrap_or(&joined)
                .trim()
                .to_string();
            break;
        }
    }

    if title.is_empty() || content.is_empty() {
        return Story::new(default_title, reply);
    }
    Story::new(title, content)
}

/// A [`StoryGenerator`] that prompts a [`StoryDriver`] and parses its reply.
///
/// The channel's prompt template is used when it has one; otherwise the
/// configured default prompt is sent.
#[derive(Debug)]
pub struct DriverStoryGenerator<D: StoryDriver> {
    driver: D,
    config: StoryConfig,
    splitter: SceneSplitter,
}

impl<D: StoryDriver> DriverStoryGenerator<D> {
    /// Create a generator from a driver and explicit settings.
    pub fn new(driver: D, config: StoryConfig, splitter: SceneSplitter) -> Self {
        Self {
            driver,
            config,
            splitter,
        }
    }

    /// Create a generator from the full application configuration.
    pub fn from_config(driver: D, config: &ScenecraftConfig) -> Self {
        Self::new(
            driver,
            config.story.clone(),
            SceneSplitter::new(config.segmentation.clone(), config.story.clone()),
        )
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Build the request sent for `channel`.
    pub fn request_for(&self, channel: &ChannelConfig) -> StoryRequest {
        let prompt = if channel.has_template() {
            channel.prompt_template().as_str()
        } else {
            self.config.default_prompt.as_str()
        };
        StoryRequest::new(self.config.system_prompt.as_str(), prompt)
    }
}

#[async_trait]
impl<D: StoryDriver> StoryGenerator for DriverStoryGenerator<D> {
    #[instrument(
        skip(self, channel),
        fields(provider = self.driver.provider_name(), channel = %channel.name())
    )]
    async fn generate_story(&self, channel: &ChannelConfig) -> ScenecraftResult<Story> {
        let request = self.request_for(channel);
        debug!(
            prompt_len = request.prompt().len(),
            templated = channel.has_template(),
            "Requesting story"
        );

        let reply = self.driver.complete(&request).await?;
        if reply.trim().is_empty() {
            warn!("Story backend returned an empty reply");
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        let story = parse_story_response(&reply, &self.config.default_title);
        debug!(
            title = %story.title,
            content_len = story.content_len(),
            "Parsed story reply"
        );
        Ok(story)
    }

    #[instrument(skip(self, story), fields(content_len = story.content_len()))]
    async fn divide_into_scenes(&self, story: &mut Story) -> ScenecraftResult<()> {
        story.scenes = self.splitter.segment(&story.content)?;
        debug!(scenes = story.scenes.len(), "Story segmented");
        Ok(())
    }
}
