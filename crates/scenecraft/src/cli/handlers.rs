//! Command handlers.

use super::commands::OutputFormat;
use scenecraft::{
    ChannelConfig, ScenecraftConfig, Scene, Story, StoryService, StoryValidator, content_validator,
    generation_context, mock_pipeline, scene_splitter,
};
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Load configuration from `path`, or from the layered search when absent.
pub fn load_config(path: Option<&Path>) -> CliResult<ScenecraftConfig> {
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration file");
            ScenecraftConfig::from_file(path)?
        }
        None => ScenecraftConfig::load()?,
    };
    Ok(config)
}

/// Split a plain-text story file into scenes.
pub fn segment(config: &ScenecraftConfig, input: &Path, format: OutputFormat) -> CliResult<()> {
    let content = std::fs::read_to_string(input)?;
    let splitter = scene_splitter(config);
    let result = splitter.split_into_scenes(content.trim_end())?;
    info!(scenes = result.total_scenes(), "Segmented {}", input.display());

    match format {
        OutputFormat::Json => {
            let scenes: Vec<Scene> = result
                .scenes()
                .iter()
                .map(|scene| splitter.prompts().project(scene))
                .collect();
            println!("{}", serde_json::to_string_pretty(&scenes)?);
        }
        OutputFormat::Human => {
            println!("{} scenes", result.total_scenes());
            println!("{:-<80}", "");
            for scene in result.scenes() {
                let projected = splitter.prompts().project(scene);
                println!(
                    "Scene {} [{}] {:.1}s",
                    scene.number(),
                    scene.scene_type(),
                    projected.duration
                );
                println!("  {}", scene.text());
                if !scene.key_phrases().is_empty() {
                    println!("  key phrases: {}", scene.key_phrases().join(", "));
                }
            }
        }
    }

    Ok(())
}

/// Validate a story JSON file; scenes are checked when present.
pub fn validate(config: &ScenecraftConfig, path: &Path) -> CliResult<()> {
    let story: Story = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let validator = content_validator(config);

    validator.validate_story(&story)?;
    if !story.scenes.is_empty() {
        validator.validate_scenes(&story.scenes)?;
    }

    println!(
        "Story '{}' is valid ({} characters, {} scenes)",
        story.title,
        story.content_len(),
        story.scenes.len()
    );
    Ok(())
}

/// Run the full pipeline over the built-in story.
pub async fn generate(
    config: &ScenecraftConfig,
    channel: Option<&Path>,
    format: OutputFormat,
) -> CliResult<()> {
    let channel = match channel {
        Some(path) => toml::from_str::<ChannelConfig>(&std::fs::read_to_string(path)?)?,
        None => ChannelConfig::named("default"),
    };

    let story = mock_pipeline(config)
        .generate_story(&generation_context(config), &channel)
        .await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&story)?),
        OutputFormat::Human => {
            println!("{}", story.title);
            println!("{:-<80}", "");
            for scene in &story.scenes {
                println!("Scene {} ({:.1}s): {}", scene.number, scene.duration, scene.description);
                println!("  prompt: {}", scene.image_prompt);
            }
            println!("Total duration: {:.1}s", story.total_duration());
        }
    }

    Ok(())
}
