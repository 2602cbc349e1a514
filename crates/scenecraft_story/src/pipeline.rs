//! The generate, validate, segment, validate pipeline.

use async_trait::async_trait;
use scenecraft_core::{ChannelConfig, Story};
use scenecraft_error::{
    GenerationError, GenerationErrorKind, ScenecraftError, ScenecraftErrorKind, ScenecraftResult,
    SegmentationError, SegmentationErrorKind,
};
use scenecraft_interface::{GenerationContext, StoryGenerator, StoryService, StoryValidator};
use tracing::{debug, info, instrument, warn};

/// The step a pipeline run is at, or failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum PipelineStage {
    /// Waiting on the generator
    Generating,
    /// Story passed validation
    StoryValidated,
    /// Story was cut into scenes
    Segmented,
    /// Scenes passed validation
    ScenesValidated,
}

/// State of one pipeline run.
///
/// Runs start at [`Generating`](Self::Generating) and end at
/// [`ScenesValidated`](Self::ScenesValidated) or [`Failed`](Self::Failed).
#[derive(Debug)]
pub enum PipelineState {
    /// Story not generated yet
    Generating,
    /// Generated story passed validation
    StoryValidated(Story),
    /// Scenes have been assigned
    Segmented(Story),
    /// Scenes passed validation
    ScenesValidated(Story),
    /// The step at `stage` failed with `error`
    Failed {
        /// Step that failed
        stage: PipelineStage,
        /// First error encountered
        error: ScenecraftError,
    },
}

impl PipelineState {
    /// The current step, or the step that failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Generating => PipelineStage::Generating,
            Self::StoryValidated(_) => PipelineStage::StoryValidated,
            Self::Segmented(_) => PipelineStage::Segmented,
            Self::ScenesValidated(_) => PipelineStage::ScenesValidated,
            Self::Failed { stage, .. } => *stage,
        }
    }

    /// Whether the run is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ScenesValidated(_) | Self::Failed { .. })
    }

    /// Whether the run failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    fn failed(stage: PipelineStage, error: impl Into<ScenecraftError>) -> Self {
        let error = error.into();
        warn!(%stage, error = %error, "Pipeline step failed");
        Self::Failed { stage, error }
    }
}

/// Runs a generator and validator through the full pipeline.
///
/// The generator call is the only suspension point. It is abandoned when the
/// context is cancelled or its deadline passes; both surface as
/// [`GenerationError`]s. Nothing is retried.
///
/// # Examples
///
/// ```
/// use scenecraft_core::ChannelConfig;
/// use scenecraft_interface::{GenerationContext, StoryService};
/// use scenecraft_story::{MockGenerator, StoryPipeline};
/// use scenecraft_validation::ContentValidator;
///
/// # #[tokio::main]
/// # async fn main() {
/// let pipeline = StoryPipeline::new(MockGenerator::new(), ContentValidator::default());
/// let story = pipeline
///     .generate_story(&GenerationContext::new(), &ChannelConfig::named("test"))
///     .await
///     .unwrap();
///
/// assert_eq!(story.scenes.len(), 9);
/// # }
/// ```
#[derive(Debug)]
pub struct StoryPipeline<G, V> {
    generator: G,
    validator: V,
}

impl<G, V> StoryPipeline<G, V>
where
    G: StoryGenerator,
    V: StoryValidator,
{
    /// Create a pipeline.
    pub fn new(generator: G, validator: V) -> Self {
        Self {
            generator,
            validator,
        }
    }

    /// The story generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Run one step. Terminal states are returned unchanged.
    pub async fn advance(
        &self,
        ctx: &GenerationContext,
        channel: &ChannelConfig,
        state: PipelineState,
    ) -> PipelineState {
        match state {
            PipelineState::Generating => {
                let story = match self.generate_guarded(ctx, channel).await {
                    Ok(story) => story,
                    Err(e) => return PipelineState::failed(PipelineStage::Generating, e),
                };
                match self.validator.validate_story(&story) {
                    Ok(()) => {
                        debug!(title = %story.title, "Story validated");
                        PipelineState::StoryValidated(story)
                    }
                    Err(e) => PipelineState::failed(PipelineStage::StoryValidated, e),
                }
            }
            PipelineState::StoryValidated(mut story) => {
                match self.generator.divide_into_scenes(&mut story).await {
                    Ok(()) => {
                        debug!(scenes = story.scenes.len(), "Story segmented");
                        PipelineState::Segmented(story)
                    }
                    Err(e) => PipelineState::failed(PipelineStage::Segmented, as_segmentation(e)),
                }
            }
            PipelineState::Segmented(story) => match self.validator.validate_scenes(&story.scenes)
            {
                Ok(()) => PipelineState::ScenesValidated(story),
                Err(e) => PipelineState::failed(PipelineStage::ScenesValidated, e),
            },
            terminal => terminal,
        }
    }

    /// Drive a run from [`PipelineState::Generating`] to a terminal state.
    #[instrument(skip_all, fields(channel = %channel.name()))]
    pub async fn run(&self, ctx: &GenerationContext, channel: &ChannelConfig) -> PipelineState {
        match self.drive(ctx, channel).await {
            Ok(story) => PipelineState::ScenesValidated(story),
            Err((stage, error)) => PipelineState::Failed { stage, error },
        }
    }

    async fn drive(
        &self,
        ctx: &GenerationContext,
        channel: &ChannelConfig,
    ) -> Result<Story, (PipelineStage, ScenecraftError)> {
        let mut state = PipelineState::Generating;
        loop {
            debug!(stage = %state.stage(), "Advancing pipeline");
            state = match self.advance(ctx, channel, state).await {
                PipelineState::ScenesValidated(story) => return Ok(story),
                PipelineState::Failed { stage, error } => return Err((stage, error)),
                next => next,
            };
        }
    }

    async fn generate_guarded(
        &self,
        ctx: &GenerationContext,
        channel: &ChannelConfig,
    ) -> ScenecraftResult<Story> {
        if ctx.is_cancelled() {
            return Err(GenerationError::new(GenerationErrorKind::Cancelled).into());
        }

        let generate = async {
            let Some(limit) = ctx.timeout() else {
                return self.generator.generate_story(channel).await;
            };
            match tokio::time::timeout(limit, self.generator.generate_story(channel)).await {
                Ok(result) => result,
                Err(_) => {
                    let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                    Err(GenerationError::new(GenerationErrorKind::TimedOut(millis)).into())
                }
            }
        };

        tokio::select! {
            biased;
            _ = ctx.token().cancelled() => {
                Err(GenerationError::new(GenerationErrorKind::Cancelled).into())
            }
            result = generate => result.map_err(as_generation),
        }
    }
}

/// Keep generation errors as they are; report anything else as a backend failure.
fn as_generation(error: ScenecraftError) -> ScenecraftError {
    match error.kind() {
        ScenecraftErrorKind::Generation(_) => error,
        _ => GenerationError::backend(error.to_string()).into(),
    }
}

/// Keep segmentation errors as they are; report anything else as a failed split.
fn as_segmentation(error: ScenecraftError) -> ScenecraftError {
    match error.kind() {
        ScenecraftErrorKind::Segmentation(_) => error,
        _ => SegmentationError::new(SegmentationErrorKind::Failed(error.to_string())).into(),
    }
}

#[async_trait]
impl<G, V> StoryService for StoryPipeline<G, V>
where
    G: StoryGenerator,
    V: StoryValidator,
{
    #[instrument(skip_all, fields(channel = %channel.name()))]
    async fn generate_story(
        &self,
        ctx: &GenerationContext,
        channel: &ChannelConfig,
    ) -> ScenecraftResult<Story> {
        let story = self.drive(ctx, channel).await.map_err(|(_, error)| error)?;
        info!(
            title = %story.title,
            scenes = story.scenes.len(),
            "Story generated"
        );
        Ok(story)
    }
}
