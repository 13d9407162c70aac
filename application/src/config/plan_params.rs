//! Plan parameters — static settings for a plan run.
//!
//! [`PlanParams`] groups the model choices, per-role sampling, image options
//! and execution mode used by
//! [`RunPlanUseCase`](crate::use_cases::run_plan::RunPlanUseCase).

use serde::{Deserialize, Serialize};
use studio_domain::{ImageSize, ModelConfig, SamplingConfig};

/// How independent agent requests within a phase are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One request at a time, in role order.
    #[default]
    Sequential,
    /// Sibling requests run as independent tasks and are joined before the
    /// next phase.
    Concurrent,
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "concurrent" | "parallel" => Ok(ExecutionMode::Concurrent),
            other => Err(format!("unknown execution mode: {}", other)),
        }
    }
}

/// Static parameters for a plan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParams {
    pub models: ModelConfig,
    pub sampling: SamplingConfig,
    pub image_size: ImageSize,
    /// Whether the full 3D render is generated along with the moodboards.
    pub include_render: bool,
    pub mode: ExecutionMode,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            models: ModelConfig::default(),
            sampling: SamplingConfig::default(),
            image_size: ImageSize::default(),
            include_render: true,
            mode: ExecutionMode::default(),
        }
    }
}

impl PlanParams {
    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_image_size(mut self, size: ImageSize) -> Self {
        self.image_size = size;
        self
    }

    pub fn with_render(mut self, include: bool) -> Self {
        self.include_render = include;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Number of image requests a run with visuals will issue.
    pub fn image_request_count(&self) -> usize {
        3 + usize::from(self.include_render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = PlanParams::default();
        assert_eq!(params.mode, ExecutionMode::Sequential);
        assert!(params.include_render);
        assert_eq!(params.image_size.to_string(), "1024x1024");
        assert_eq!(params.image_request_count(), 4);
    }

    #[test]
    fn test_builder() {
        let params = PlanParams::default()
            .with_render(false)
            .with_mode(ExecutionMode::Concurrent);
        assert_eq!(params.image_request_count(), 3);
        assert_eq!(params.mode, ExecutionMode::Concurrent);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Concurrent);
        assert_eq!("Sequential".parse::<ExecutionMode>().unwrap(), ExecutionMode::Sequential);
        assert!("eventually".parse::<ExecutionMode>().is_err());
    }
}
