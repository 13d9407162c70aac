//! Presentation-level configuration
//!
//! Configuration for output formatting and the interactive session.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use studio_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Export directory; nothing is written when unset
    pub out_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            out_dir: None,
        }
    }
}

impl OutputConfig {
    /// Command-line values win over file values.
    pub fn resolve(
        file_format: Option<OutputFormat>,
        cli_format: Option<OutputFormat>,
        color: bool,
        out_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
            out_dir,
        }
    }
}

/// Interactive session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Generate moodboards and the render for each plan
    pub want_images: bool,
    /// Currency label for budgets typed at the prompt
    pub currency: String,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            want_images: true,
            currency: studio_domain::DEFAULT_CURRENCY.to_string(),
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Json),
            Some(OutputFormat::Summary),
            true,
            None,
        );
        assert_eq!(config.format, OutputFormat::Summary);
    }

    #[test]
    fn test_file_format_then_default() {
        let config = OutputConfig::resolve(Some(OutputFormat::Json), None, false, None);
        assert_eq!(config.format, OutputFormat::Json);
        let config = OutputConfig::resolve(None, None, false, None);
        assert_eq!(config.format, OutputFormat::Full);
    }
}
