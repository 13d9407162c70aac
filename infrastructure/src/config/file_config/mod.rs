//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod images;
mod models;
mod output;
mod sampling;
mod settings;

pub use images::FileImagesConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use sampling::FileSamplingConfig;
pub use settings::{
    DEFAULT_BASE_URL, FileApiConfig, FileBriefConfig, FileExecutionConfig, FileLoggingConfig,
};

use serde::{Deserialize, Serialize};
use studio_application::PlanParams;
use studio_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text and image model selection
    pub models: FileModelsConfig,
    /// Per-role temperatures
    pub sampling: FileSamplingConfig,
    /// Image size and render toggle
    pub images: FileImagesConfig,
    /// Sequential or concurrent requests
    pub execution: FileExecutionConfig,
    /// Endpoint settings
    pub api: FileApiConfig,
    /// Brief defaults
    pub brief: FileBriefConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_plan_params().1
    }

    /// Resolve the plan parameters, collecting issues along the way.
    ///
    /// Invalid values never abort resolution; they fall back to defaults and
    /// are reported so the caller can decide whether to continue.
    pub fn to_plan_params(&self) -> (PlanParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (models, model_issues) = self.models.to_model_config();
        issues.extend(model_issues);

        let (sampling, sampling_issues) = self.sampling.to_sampling_config();
        issues.extend(sampling_issues);

        let (image_size, size_issues) = self.images.parse_size();
        issues.extend(size_issues);

        let params = PlanParams::default()
            .with_models(models)
            .with_sampling(sampling)
            .with_image_size(image_size)
            .with_render(self.images.include_render)
            .with_mode(self.execution.mode);

        (params, issues)
    }
}
