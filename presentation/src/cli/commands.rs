//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for design plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every section, moodboard and render status
    Full,
    /// Only the client overview
    Summary,
    /// JSON output (images base64-encoded)
    Json,
}

impl From<OutputFormat> for studio_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => studio_domain::OutputFormat::Full,
            OutputFormat::Summary => studio_domain::OutputFormat::Summary,
            OutputFormat::Json => studio_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for interior-studio
#[derive(Parser, Debug)]
#[command(name = "interior-studio")]
#[command(author, version, about = "AI interior design studio - layout, furniture, palette and moodboards")]
#[command(long_about = r#"
Interior Studio asks a small team of AI specialists to plan a room.

A plan is built in three phases:
1. Specialists: an architect, a furniture expert and a colorist each write a plan
2. Summary: a designer turns their notes into a friendly client overview
3. Visuals: moodboards for furniture, palette and lighting plus a 3D render

OPENAI_API_KEY must be set in the environment.

Configuration files are loaded from (in priority order):
1. INTERIOR_STUDIO_* environment variables
2. --config <path>     Explicit config file
3. ./studio.toml       Project-level config
4. ~/.config/interior-studio/config.toml   Global config

Example:
  interior-studio -d "Cozy living room 4x5m, one big window" --style Japandi --budget 20000
  interior-studio -d "Home office" --no-visuals --output summary
  interior-studio --interactive
"#)]
pub struct Cli {
    /// Room description: size, shape, windows, colors you like
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Preferred style (Modern, Minimal, Classic, Boho, Luxury, Japandi)
    #[arg(short, long, default_value = "Modern")]
    pub style: String,

    /// What the room is used for
    #[arg(short, long, default_value = "")]
    pub purpose: String,

    /// Approximate budget
    #[arg(short, long, default_value_t = 15_000)]
    pub budget: u64,

    /// Reference photo of the room (jpg, jpeg or png)
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,

    /// Skip moodboards and the 3D render
    #[arg(long)]
    pub no_visuals: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Save images and a Markdown copy of the plan to this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of every prompt and result to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = Cli::parse_from([
            "interior-studio",
            "-d",
            "Cozy bedroom",
            "--style",
            "Boho",
            "--budget",
            "8000",
            "--no-visuals",
            "--output",
            "json",
        ]);
        assert_eq!(cli.description.as_deref(), Some("Cozy bedroom"));
        assert_eq!(cli.style, "Boho");
        assert_eq!(cli.budget, 8000);
        assert!(cli.no_visuals);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["interior-studio", "--interactive", "-vv"]);
        assert!(cli.interactive);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.style, "Modern");
        assert_eq!(cli.budget, 15_000);
        assert!(cli.output.is_none());
    }
}
