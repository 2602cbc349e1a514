//! Scenecraft CLI binary.
//!
//! This binary provides command-line access to the scene pipeline:
//! - Segment a story file into scenes
//! - Validate a story JSON file
//! - Run the full pipeline over the built-in story

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate, load_config, segment, validate};

    let cli = Cli::parse();

    scenecraft::telemetry::init_logging(cli.verbose, cli.json_logs)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Segment { input, format } => {
            segment(&config, &input, format)?;
        }

        Commands::Validate { story } => {
            validate(&config, &story)?;
        }

        Commands::Generate { channel, format } => {
            generate(&config, channel.as_deref(), format).await?;
        }
    }

    Ok(())
}
