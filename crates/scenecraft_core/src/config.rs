//! Layered TOML configuration for the pipeline.
//!
//! Configuration sources, in increasing precedence:
//! - Bundled defaults (include_str! from scenecraft.toml)
//! - `~/.config/scenecraft/scenecraft.toml`
//! - `./scenecraft.toml`
//!
//! Every field has a serde default, so a user file only needs the keys it
//! overrides.

use config::{Config, File, FileFormat};
use scenecraft_error::{ConfigError, ScenecraftError, ScenecraftResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Scene splitter tuning.
///
/// ```toml
/// [segmentation]
/// min_scenes = 6
/// max_scenes = 10
/// chars_per_scene = 30
/// long_content_threshold = 350
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Fewest scenes a story is planned into
    pub min_scenes: usize,
    /// Most scenes a story is planned into
    pub max_scenes: usize,
    /// Lower bound on characters per scene
    pub min_scene_chars: usize,
    /// Upper bound on characters per scene
    pub max_scene_chars: usize,
    /// Characters of narration per planned scene
    pub chars_per_scene: usize,
    /// Content longer than this (in characters) always gets `max_scenes`
    pub long_content_threshold: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_scenes: 6,
            max_scenes: 10,
            min_scene_chars: 20,
            max_scene_chars: 80,
            chars_per_scene: 30,
            long_content_threshold: 350,
        }
    }
}

/// Story and scene-list bounds enforced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum content length in characters
    pub min_content_length: usize,
    /// Maximum content length in characters
    pub max_content_length: usize,
    /// Maximum title length in characters
    pub max_title_length: usize,
    /// Minimum number of `.`-separated sentence fragments
    pub min_sentences: usize,
    /// Minimum number of scenes
    pub min_scenes: usize,
    /// Maximum number of scenes
    pub max_scenes: usize,
    /// Terms rejected anywhere in the content (case-insensitive)
    pub denylist: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_content_length: 270,
            max_content_length: 300,
            max_title_length: 50,
            min_sentences: 3,
            min_scenes: 6,
            max_scenes: 10,
            denylist: Vec::new(),
        }
    }
}

/// Story prompting and scene projection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Characters read per second of narration
    pub reading_rate: f64,
    /// Shortest scene display time in seconds
    pub min_duration: f64,
    /// Longest scene display time in seconds
    pub max_duration: f64,
    /// Title used when a backend reply has none
    pub default_title: String,
    /// System instruction sent with every story request
    pub system_prompt: String,
    /// Prompt used when the channel has no template
    pub default_prompt: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            reading_rate: 15.0,
            min_duration: 3.0,
            max_duration: 12.0,
            default_title: "무제".to_string(),
            system_prompt: "당신은 YouTube Shorts를 위한 1분 분량의 짧은 스토리를 작성하는 전문 작가입니다. 270-300자 내외로 작성해주세요.".to_string(),
            default_prompt: "다음 형식으로 YouTube Shorts용 1분 짧은 이야기를 만들어주세요:\n\n제목: [이야기 제목]\n내용: [270-300자의 이야기 내용]\n\n이야기는 시작, 중간, 끝이 명확해야 하고, 시각적으로 표현하기 좋은 장면들이 포함되어야 합니다.".to_string(),
        }
    }
}

/// Orchestration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Deadline for the story backend, in seconds (0 disables it)
    pub generation_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: 30,
        }
    }
}

impl PipelineConfig {
    /// The generation deadline, if one is configured.
    pub fn generation_timeout(&self) -> Option<Duration> {
        (self.generation_timeout_secs > 0).then(|| Duration::from_secs(self.generation_timeout_secs))
    }
}

/// Top-level scenecraft configuration.
///
/// # Example
///
/// ```no_run
/// use scenecraft_core::ScenecraftConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScenecraftConfig::load()?;
/// println!("Planning {}-{} scenes", config.segmentation.min_scenes, config.segmentation.max_scenes);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenecraftConfig {
    /// Scene splitter tuning
    pub segmentation: SegmentationConfig,
    /// Validator bounds
    pub validation: ValidationConfig,
    /// Prompting and projection
    pub story: StoryConfig,
    /// Orchestration
    pub pipeline: PipelineConfig,
}

impl ScenecraftConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails [`validate`](Self::validate).
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScenecraftResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if missing.
    #[instrument]
    pub fn load() -> ScenecraftResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../scenecraft.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scenecraft/scenecraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scenecraft").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot run with.
    ///
    /// The segmentation scene range must sit inside the validation scene
    /// range, otherwise the splitter plans scene counts the validator rejects.
    pub fn validate(&self) -> ScenecraftResult<()> {
        let seg = &self.segmentation;
        if seg.min_scenes == 0 {
            return Err(ConfigError::invalid("segmentation.min_scenes", "must be positive").into());
        }
        if seg.min_scenes > seg.max_scenes {
            return Err(ConfigError::invalid(
                "segmentation.min_scenes",
                format!("({}) exceeds max_scenes ({})", seg.min_scenes, seg.max_scenes),
            )
            .into());
        }
        if seg.chars_per_scene == 0 {
            return Err(
                ConfigError::invalid("segmentation.chars_per_scene", "must be positive").into(),
            );
        }
        if seg.min_scene_chars > seg.max_scene_chars {
            return Err(ConfigError::invalid(
                "segmentation.min_scene_chars",
                format!(
                    "({}) exceeds max_scene_chars ({})",
                    seg.min_scene_chars, seg.max_scene_chars
                ),
            )
            .into());
        }

        let val = &self.validation;
        if val.min_content_length > val.max_content_length {
            return Err(ConfigError::invalid(
                "validation.min_content_length",
                format!(
                    "({}) exceeds max_content_length ({})",
                    val.min_content_length, val.max_content_length
                ),
            )
            .into());
        }
        if val.max_title_length == 0 {
            return Err(
                ConfigError::invalid("validation.max_title_length", "must be positive").into(),
            );
        }
        if val.min_scenes > val.max_scenes {
            return Err(ConfigError::invalid(
                "validation.min_scenes",
                format!("({}) exceeds max_scenes ({})", val.min_scenes, val.max_scenes),
            )
            .into());
        }
        if seg.min_scenes < val.min_scenes {
            return Err(ConfigError::invalid(
                "segmentation.min_scenes",
                format!(
                    "({}) is below validation.min_scenes ({})",
                    seg.min_scenes, val.min_scenes
                ),
            )
            .into());
        }
        if seg.max_scenes > val.max_scenes {
            return Err(ConfigError::invalid(
                "segmentation.max_scenes",
                format!(
                    "({}) exceeds validation.max_scenes ({})",
                    seg.max_scenes, val.max_scenes
                ),
            )
            .into());
        }

        let story = &self.story;
        if story.reading_rate <= 0.0 {
            return Err(ConfigError::invalid("story.reading_rate", "must be positive").into());
        }
        if story.min_duration <= 0.0 {
            return Err(ConfigError::invalid("story.min_duration", "must be positive").into());
        }
        if story.max_duration <= 0.0 {
            return Err(ConfigError::invalid("story.max_duration", "must be positive").into());
        }
        if story.min_duration >= story.max_duration {
            return Err(
                ConfigError::invalid("story.min_duration", "must be less than max_duration")
                    .into(),
            );
        }

        Ok(())
    }
}
