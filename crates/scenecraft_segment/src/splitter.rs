//! The scene splitter: break points, planning, selection and annotation.

use crate::{
    ScenePromptBuilder, classify_scene, extract_key_phrases, find_break_points,
    select_optimal_breaks, split_by_break_points, split_by_equal_length, target_scene_count,
};
use derive_getters::Getters;
use scenecraft_core::{Scene, SceneType, SegmentationConfig, StoryConfig};
use scenecraft_error::{ScenecraftResult, SegmentationError, SegmentationErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One scene as cut from the story, before projection into a [`Scene`].
///
/// `start_index` and `end_index` are byte offsets of the untrimmed slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SceneContent {
    /// 1-based position among the non-empty slices
    number: usize,
    /// Trimmed scene text
    text: String,
    /// Byte offset where the slice starts
    start_index: usize,
    /// Byte offset where the slice ends
    end_index: usize,
    /// Up to three descriptive phrases
    key_phrases: Vec<String>,
    /// Narrative role
    scene_type: SceneType,
}

impl SceneContent {
    /// A freshly cut scene, not yet annotated.
    pub fn new(number: usize, text: impl Into<String>, start_index: usize, end_index: usize) -> Self {
        Self {
            number,
            text: text.into(),
            start_index,
            end_index,
            key_phrases: Vec::new(),
            scene_type: SceneType::Transition,
        }
    }

    /// Attach key phrases and a narrative role.
    pub fn annotate(&mut self, key_phrases: Vec<String>, scene_type: SceneType) {
        self.key_phrases = key_phrases;
        self.scene_type = scene_type;
    }
}

/// Annotated scenes from one segmentation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SplitResult {
    /// Scenes in story order
    scenes: Vec<SceneContent>,
    /// Number of scenes
    total_scenes: usize,
}

impl SplitResult {
    /// Take ownership of the scenes.
    pub fn into_scenes(self) -> Vec<SceneContent> {
        self.scenes
    }
}

/// Splits story content into annotated scenes.
///
/// # Examples
///
/// ```
/// use scenecraft_segment::SceneSplitter;
///
/// let splitter = SceneSplitter::default();
/// let scenes = splitter
///     .segment("옛날에 한 소년이 있었다. 소년은 용감했다. 그는 모험을 떠났다.")
///     .unwrap();
///
/// assert_eq!(scenes.len(), 3);
/// assert_eq!(scenes[0].number, 1);
/// assert!(scenes.iter().all(|scene| scene.duration > 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct SceneSplitter {
    config: SegmentationConfig,
    prompts: ScenePromptBuilder,
}

impl Default for SceneSplitter {
    fn default() -> Self {
        Self::new(SegmentationConfig::default(), StoryConfig::default())
    }
}

impl SceneSplitter {
    /// Create a splitter from segmentation and projection settings.
    pub fn new(config: SegmentationConfig, story: StoryConfig) -> Self {
        Self {
            config,
            prompts: ScenePromptBuilder::new(story),
        }
    }

    /// Segmentation settings in use.
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Projection used by [`segment`](Self::segment).
    pub fn prompts(&self) -> &ScenePromptBuilder {
        &self.prompts
    }

    /// Cut `content` into annotated scenes.
    ///
    /// # Errors
    ///
    /// Returns a segmentation error if the scene range is unusable, or if
    /// `content` is empty or contains only whitespace.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn split_into_scenes(&self, content: &str) -> ScenecraftResult<SplitResult> {
        self.check_scene_range()?;
        if content.is_empty() {
            return Err(SegmentationError::new(SegmentationErrorKind::EmptyContent).into());
        }

        let break_points = find_break_points(content);
        let target = target_scene_count(content.chars().count(), &self.config);
        debug!(
            candidates = break_points.len(),
            target, "Planned scene segmentation"
        );

        let mut scenes = if break_points.is_empty() {
            debug!("No break markers found, splitting by equal length");
            split_by_equal_length(content, target)
        } else {
            let selected = select_optimal_breaks(&break_points, target, content.len());
            split_by_break_points(content, &selected)
        };

        if scenes.is_empty() {
            return Err(SegmentationError::new(SegmentationErrorKind::NoScenes).into());
        }

        let total = scenes.len();
        for (index, scene) in scenes.iter_mut().enumerate() {
            let key_phrases = extract_key_phrases(scene.text());
            let scene_type = classify_scene(scene.text(), index, total);
            scene.annotate(key_phrases, scene_type);
        }

        debug!(total_scenes = total, "Story split into scenes");
        Ok(SplitResult {
            scenes,
            total_scenes: total,
        })
    }

    fn check_scene_range(&self) -> ScenecraftResult<()> {
        let (min, max) = (self.config.min_scenes, self.config.max_scenes);
        if min == 0 || min > max {
            return Err(SegmentationError::new(SegmentationErrorKind::InvalidTarget(format!(
                "scene range {}..={} is unusable",
                min, max
            )))
            .into());
        }
        Ok(())
    }

    /// Cut `content` into scenes ready for image generation.
    ///
    /// # Errors
    ///
    /// Same as [`split_into_scenes`](Self::split_into_scenes).
    pub fn segment(&self, content: &str) -> ScenecraftResult<Vec<Scene>> {
        let result = self.split_into_scenes(content)?;
        Ok(result
            .scenes()
            .iter()
            .map(|scene| self.prompts.project(scene))
            .collect())
    }
}
