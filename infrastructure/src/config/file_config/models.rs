//! Model selection from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use studio_domain::{ConfigIssue, ConfigIssueCode, Model, ModelConfig};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// text = "gpt-4o-mini"     # Architect, furniture, colorist and summary
/// image = "gpt-image-1"    # Moodboards and render
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for every text agent
    pub text: Option<String>,
    /// Model for moodboards and the render
    pub image: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        match value {
            None => (None, issues),
            Some(s) if s.trim().is_empty() => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                ));
                (None, issues)
            }
            Some(s) => {
                // Model::from_str is infallible; unknown names become Custom(...)
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), issues)
            }
        }
    }

    pub fn parse_text(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("text", self.text.as_ref())
    }

    /// Parse the image model, warning when it is not a known image model.
    pub fn parse_image(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        let (model, mut issues) = Self::parse_single_model("image", self.image.as_ref());
        if let Some(model) = &model {
            if !model.is_image_model() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownImageModel {
                        model: model.to_string(),
                    },
                    format!(
                        "models.image: '{}' is not a known image model, requests may fail",
                        model
                    ),
                ));
            }
        }
        (model, issues)
    }

    /// Resolve into a [`ModelConfig`], falling back to defaults for unset or
    /// invalid fields.
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let (text, mut issues) = self.parse_text();
        let (image, image_issues) = self.parse_image();
        issues.extend(image_issues);

        let mut config = ModelConfig::default();
        if let Some(text) = text {
            config = config.with_text(text);
        }
        if let Some(image) = image {
            config = config.with_image(image);
        }
        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_models_use_defaults() {
        let (config, issues) = FileModelsConfig::default().to_model_config();
        assert!(issues.is_empty());
        assert_eq!(config.text, Model::Gpt4oMini);
        assert_eq!(config.image, Model::GptImage1);
    }

    #[test]
    fn test_empty_model_name_is_error() {
        let models = FileModelsConfig {
            text: Some("  ".to_string()),
            image: None,
        };
        let (config, issues) = models.to_model_config();
        assert_eq!(config.text, Model::Gpt4oMini);
        assert_eq!(issues.len(), 1);
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_text_model_as_image_model_warns() {
        let models = FileModelsConfig {
            text: Some("gpt-4.1".to_string()),
            image: Some("gpt-4o".to_string()),
        };
        let (config, issues) = models.to_model_config();
        assert_eq!(config.text, Model::Gpt41);
        assert_eq!(config.image, Model::Gpt4o);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::UnknownImageModel { .. }
        ));
        assert!(!ConfigIssue::has_errors(&issues));
    }
}
