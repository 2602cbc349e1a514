//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scenecraft - cut short stories into illustrated scenes
#[derive(Parser, Debug)]
#[command(name = "scenecraft")]
#[command(about = "Cut short stories into validated, illustrated scenes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file (defaults to the layered search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a plain-text story into scenes
    Segment {
        /// Path to the story text
        #[arg(long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Validate a story JSON file and any scenes it carries
    Validate {
        /// Path to the story JSON file
        #[arg(long)]
        story: PathBuf,
    },

    /// Run the full pipeline over the built-in story
    Generate {
        /// Channel TOML file
        #[arg(long)]
        channel: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
