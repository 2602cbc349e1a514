//! The story and scene validator.

use scenecraft_core::{Scene, Story, ValidationConfig};
use scenecraft_error::{ValidationError, ValidationErrorKind, ValidationResult};
use scenecraft_interface::StoryValidator;
use tracing::{debug, instrument};

/// Number of trimmed, non-empty `.`-separated fragments in `content`.
///
/// # Examples
///
/// ```
/// use scenecraft_validation::count_sentences;
///
/// assert_eq!(count_sentences("하나. 둘. 셋."), 3);
/// assert_eq!(count_sentences("하나... 둘"), 2);
/// assert_eq!(count_sentences("   "), 0);
/// ```
pub fn count_sentences(content: &str) -> usize {
    content
        .split('.')
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Validates stories against configured length, content and structure bounds.
///
/// # Examples
///
/// ```
/// use scenecraft_core::Story;
/// use scenecraft_error::ValidationErrorKind;
/// use scenecraft_interface::StoryValidator;
/// use scenecraft_validation::ContentValidator;
///
/// let validator = ContentValidator::default();
/// let err = validator.validate_story(&Story::new("", "본문")).unwrap_err();
/// assert_eq!(err.kind(), &ValidationErrorKind::TitleEmpty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    config: ValidationConfig,
    denylist: Vec<String>,
}

impl ContentValidator {
    /// Create a validator; denylist terms are matched case-insensitively.
    pub fn new(config: ValidationConfig) -> Self {
        let denylist = config
            .denylist
            .iter()
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { config, denylist }
    }

    /// Bounds in use.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn check_title(&self, story: &Story) -> ValidationResult<()> {
        if story.title.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::TitleEmpty));
        }

        let actual = story.title_len();
        if actual > self.config.max_title_length {
            return Err(ValidationError::new(ValidationErrorKind::TitleTooLong {
                max: self.config.max_title_length,
                actual,
            }));
        }

        Ok(())
    }

    fn check_content_length(&self, story: &Story) -> ValidationResult<()> {
        if story.content.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::ContentEmpty));
        }

        let actual = story.content_len();
        if actual < self.config.min_content_length {
            return Err(ValidationError::new(ValidationErrorKind::ContentTooShort {
                min: self.config.min_content_length,
                actual,
            }));
        }
        if actual > self.config.max_content_length {
            return Err(ValidationError::new(ValidationErrorKind::ContentTooLong {
                max: self.config.max_content_length,
                actual,
            }));
        }

        Ok(())
    }

    fn check_denylist(&self, content: &str) -> ValidationResult<()> {
        if self.denylist.is_empty() {
            return Ok(());
        }

        let lowered = content.to_lowercase();
        if let Some(term) = self.denylist.iter().find(|term| lowered.contains(term.as_str())) {
            debug!(term = %term, "Content matched denylist");
            return Err(ValidationError::new(
                ValidationErrorKind::InappropriateContent,
            ));
        }

        Ok(())
    }

    fn check_structure(&self, content: &str) -> ValidationResult<()> {
        let actual = count_sentences(content);
        if actual < self.config.min_sentences {
            return Err(ValidationError::new(ValidationErrorKind::StructureInvalid {
                min: self.config.min_sentences,
                actual,
            }));
        }
        Ok(())
    }

    fn check_scene(position: usize, scene: &Scene) -> ValidationResult<()> {
        if scene.description.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::SceneDescriptionEmpty { position },
            ));
        }
        if scene.image_prompt.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::SceneImagePromptEmpty { position },
            ));
        }
        if scene.duration.is_nan() || scene.duration <= 0.0 {
            return Err(ValidationError::new(
                ValidationErrorKind::SceneDurationInvalid {
                    position,
                    duration: scene.duration,
                },
            ));
        }
        Ok(())
    }
}

impl StoryValidator for ContentValidator {
    #[instrument(skip(self, story), fields(title_len = story.title_len(), content_len = story.content_len()))]
    fn validate_story(&self, story: &Story) -> ValidationResult<()> {
        debug!("Validating story");

        self.check_title(story)?;
        self.check_content_length(story)?;
        self.check_denylist(&story.content)?;
        self.check_structure(&story.content)?;

        debug!("Story passed validation");
        Ok(())
    }

    #[instrument(skip(self, scenes), fields(scene_count = scenes.len()))]
    fn validate_scenes(&self, scenes: &[Scene]) -> ValidationResult<()> {
        debug!("Validating scenes");

        let actual = scenes.len();
        if actual < self.config.min_scenes {
            return Err(ValidationError::new(ValidationErrorKind::TooFewScenes {
                min: self.config.min_scenes,
                actual,
            }));
        }
        if actual > self.config.max_scenes {
            return Err(ValidationError::new(ValidationErrorKind::TooManyScenes {
                max: self.config.max_scenes,
                actual,
            }));
        }

        for (index, scene) in scenes.iter().enumerate() {
            Self::check_scene(index + 1, scene)?;
        }

        debug!("Scenes passed validation");
        Ok(())
    }
}
