//! Story and scene types.

use serde::{Deserialize, Serialize};

/// A generated short story and the scenes it was cut into.
///
/// The scene list is empty until the story has been segmented.
///
/// # Examples
///
/// ```
/// use scenecraft_core::Story;
///
/// let story = Story::new("작은 별", "어느 날 밤, 별이 떠났습니다.");
/// assert!(story.scenes.is_empty());
/// assert_eq!(story.title_len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Story {
    /// Story title
    pub title: String,
    /// Full narration text
    pub content: String,
    /// Ordered scenes, one per generated image
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Story {
    /// Create an unsegmented story.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            scenes: Vec::new(),
        }
    }

    /// Title length in characters.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Content length in characters.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Sum of all scene durations in seconds.
    pub fn total_duration(&self) -> f64 {
        self.scenes.iter().map(|scene| scene.duration).sum()
    }
}

/// One narrative unit, mapped to a single generated image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position in the story
    pub number: u32,
    /// Narration text shown or spoken for this scene
    pub description: String,
    /// Prompt handed to the image generator
    pub image_prompt: String,
    /// Display time in seconds
    pub duration: f64,
}
