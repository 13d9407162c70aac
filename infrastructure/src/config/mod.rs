//! Configuration file loading for interior-studio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTERIOR_STUDIO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./studio.toml` or `./.studio.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interior-studio/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::StudioConfigError;
pub use file_config::{
    DEFAULT_BASE_URL, FileApiConfig, FileBriefConfig, FileConfig, FileExecutionConfig,
    FileImagesConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig, FileOutputFormat,
    FileSamplingConfig,
};
pub use loader::ConfigLoader;
