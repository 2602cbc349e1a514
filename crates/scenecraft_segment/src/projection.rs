//! Projection of annotated scenes into downstream [`Scene`]s.

use crate::SceneContent;
use scenecraft_core::{Scene, StoryConfig};

/// Builds image prompts and display durations for segmented scenes.
///
/// # Examples
///
/// ```
/// use scenecraft_core::StoryConfig;
/// use scenecraft_segment::ScenePromptBuilder;
///
/// let builder = ScenePromptBuilder::new(StoryConfig::default());
/// assert_eq!(builder.duration_for("가".repeat(15).as_str()), 3.0);
/// assert_eq!(builder.duration_for("가".repeat(90).as_str()), 6.0);
/// assert_eq!(builder.duration_for("가".repeat(500).as_str()), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScenePromptBuilder {
    config: StoryConfig,
}

impl ScenePromptBuilder {
    /// Create a builder from story settings.
    pub fn new(config: StoryConfig) -> Self {
        Self { config }
    }

    /// Story settings in use.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Image prompt for a scene, styled by its narrative role.
    pub fn image_prompt(&self, scene: &SceneContent) -> String {
        let mut prompt = format!("Korean story illustration: {}", scene.text());

        if !scene.key_phrases().is_empty() {
            prompt.push_str(", featuring: ");
            prompt.push_str(&scene.key_phrases().join(", "));
        }

        format!(
            "{}, {}, vertical format 9:16, high quality illustration",
            prompt,
            scene.scene_type().style()
        )
    }

    /// Reading time for `text` in seconds, clamped to the configured bounds.
    pub fn duration_for(&self, text: &str) -> f64 {
        let chars = text.chars().count() as f64;
        let seconds = chars / self.config.reading_rate;
        seconds.clamp(self.config.min_duration, self.config.max_duration)
    }

    /// Project one annotated scene.
    pub fn project(&self, scene: &SceneContent) -> Scene {
        Scene {
            number: u32::try_from(*scene.number()).unwrap_or(u32::MAX),
            description: scene.text().clone(),
            image_prompt: self.image_prompt(scene),
            duration: self.duration_for(scene.text()),
        }
    }
}
