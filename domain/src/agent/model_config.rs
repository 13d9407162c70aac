//! Role-based model configuration.
//!
//! [`ModelConfig`] picks the hosted models, [`SamplingConfig`] the per-role
//! sampling temperature. Both are static value objects set at startup.

use super::role::TextRole;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Model selection for text and image roles.
///
/// # Example
///
/// ```
/// use studio_domain::{Model, ModelConfig};
///
/// let config = ModelConfig::default().with_text(Model::Gpt41);
/// assert_eq!(config.text, Model::Gpt41);
/// assert_eq!(config.image, Model::GptImage1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model answering every text role.
    pub text: Model,
    /// Model generating moodboards and renders.
    pub image: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text: Model::default_text(),
            image: Model::default_image(),
        }
    }
}

impl ModelConfig {
    pub fn with_text(mut self, model: Model) -> Self {
        self.text = model;
        self
    }

    pub fn with_image(mut self, model: Model) -> Self {
        self.image = model;
        self
    }
}

/// Sampling temperature per text role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub architect: f32,
    pub furniture: f32,
    pub colorist: f32,
    pub summarizer: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            architect: 0.8,
            furniture: 0.8,
            colorist: 0.8,
            summarizer: 0.7,
        }
    }
}

impl SamplingConfig {
    /// Valid temperature range accepted by the completion endpoint.
    pub const RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

    pub fn temperature_for(&self, role: TextRole) -> f32 {
        match role {
            TextRole::Architect => self.architect,
            TextRole::Furniture => self.furniture,
            TextRole::Colorist => self.colorist,
            TextRole::Summarizer => self.summarizer,
        }
    }

    pub fn with_temperature(mut self, role: TextRole, temperature: f32) -> Self {
        match role {
            TextRole::Architect => self.architect = temperature,
            TextRole::Furniture => self.furniture = temperature,
            TextRole::Colorist => self.colorist = temperature,
            TextRole::Summarizer => self.summarizer = temperature,
        }
        self
    }

    /// Roles whose temperature falls outside [`Self::RANGE`].
    pub fn out_of_range(&self) -> Vec<TextRole> {
        [
            TextRole::Architect,
            TextRole::Furniture,
            TextRole::Colorist,
            TextRole::Summarizer,
        ]
        .into_iter()
        .filter(|role| !Self::RANGE.contains(&self.temperature_for(*role)))
        .collect()
    }
}
