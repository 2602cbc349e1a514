//! In-memory story generator for tests and offline runs.

use async_trait::async_trait;
use scenecraft_core::{ChannelConfig, Story};
use scenecraft_error::{GenerationError, GenerationErrorKind, ScenecraftResult};
use scenecraft_interface::StoryGenerator;
use scenecraft_segment::SceneSplitter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

/// Title of the built-in story.
pub const MOCK_TITLE: &str = "테스트 이야기: 작은 별의 모험";

/// Content of the built-in story: 271 characters in six sentences.
pub const MOCK_CONTENT: &str = "어느 날 밤, 하늘에서 가장 작은 별이 지구로 여행을 떠났습니다. 별은 처음으로 지구의 아름다운 풍경을 보고 감탄했습니다. 깊은 숲 속에서 반딧불이를 만났고, 함께 아름다운 빛의 춤을 추었습니다. 반딧불이는 별에게 지구의 밤이 얼마나 아름다운지 보여주었고, 별은 반딧불이에게 우주의 신비를 들려주었습니다. 새벽이 되자 별은 다시 하늘로 돌아가야 했지만, 반딧불이와의 우정은 영원히 그들의 마음속에서 빛났습니다. 그 후로 매일 밤, 별과 반딧불이는 서로를 그리워하며 빛을 내고 있습니다.";

/// What a [`MockGenerator`] answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this story
    Story(Story),
    /// Always fail with this error
    Fail(GenerationErrorKind),
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self::Story(Story::new(MOCK_TITLE, MOCK_CONTENT))
    }
}

/// A generator that answers from memory and segments with the real splitter.
///
/// # Examples
///
/// ```
/// use scenecraft_core::ChannelConfig;
/// use scenecraft_interface::StoryGenerator;
/// use scenecraft_story::{MOCK_TITLE, MockGenerator};
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = MockGenerator::new();
/// let mut story = generator
///     .generate_story(&ChannelConfig::named("test"))
///     .await
///     .unwrap();
/// assert_eq!(story.title, MOCK_TITLE);
///
/// generator.divide_into_scenes(&mut story).await.unwrap();
/// assert_eq!(story.scenes.len(), 9);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockGenerator {
    behavior: MockBehavior,
    delay: Option<Duration>,
    splitter: SceneSplitter,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// A generator returning the built-in story.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator returning `story`.
    pub fn with_story(story: Story) -> Self {
        Self::with_behavior(MockBehavior::Story(story))
    }

    /// A generator that always fails with `kind`.
    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Fail(kind))
    }

    /// A generator with explicit behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    /// Wait `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Segment with `splitter` instead of the default one.
    pub fn with_splitter(mut self, splitter: SceneSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Number of `generate_story` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryGenerator for MockGenerator {
    #[instrument(skip(self, channel), fields(channel = %channel.name()))]
    async fn generate_story(&self, channel: &ChannelConfig) -> ScenecraftResult<Story> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Story(story) => {
                debug!(title = %story.title, "Returning mock story");
                Ok(story.clone())
            }
            MockBehavior::Fail(kind) => Err(GenerationError::new(kind.clone()).into()),
        }
    }

    #[instrument(skip(self, story), fields(content_len = story.content_len()))]
    async fn divide_into_scenes(&self, story: &mut Story) -> ScenecraftResult<()> {
        story.scenes = self.splitter.segment(&story.content)?;
        debug!(scenes = story.scenes.len(), "Mock story segmented");
        Ok(())
    }
}
