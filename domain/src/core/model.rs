//! Model value object representing a hosted model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted models the studio knows by name (Value Object)
///
/// Text models answer the specialist and summary prompts, image models
/// render moodboards. Unknown names are carried through as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Text models
    Gpt4oMini,
    Gpt4o,
    Gpt41,
    Gpt41Mini,
    // Image models
    GptImage1,
    DallE3,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::GptImage1 => "gpt-image-1",
            Model::DallE3 => "dall-e-3",
            Model::Custom(s) => s,
        }
    }

    /// Default model for the text agents
    pub fn default_text() -> Model {
        Model::Gpt4oMini
    }

    /// Default model for moodboards and renders
    pub fn default_image() -> Model {
        Model::GptImage1
    }

    /// Check if this is a known image generation model
    pub fn is_image_model(&self) -> bool {
        matches!(self, Model::GptImage1 | Model::DallE3)
    }
}

impl Default for Model {
    /// Returns the default text model (gpt-4o-mini)
    fn default() -> Self {
        Model::default_text()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-image-1" => Model::GptImage1,
            "dall-e-3" => Model::DallE3,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gpt4oMini, Model::Gpt41, Model::GptImage1] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "my-finetune".parse().unwrap();
        assert_eq!(model, Model::Custom("my-finetune".to_string()));
        assert_eq!(model.to_string(), "my-finetune");
    }

    #[test]
    fn test_image_model_detection() {
        assert!(Model::GptImage1.is_image_model());
        assert!(Model::DallE3.is_image_model());
        assert!(!Model::Gpt4oMini.is_image_model());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Model::default(), Model::Gpt4oMini);
        assert_eq!(Model::default_image(), Model::GptImage1);
    }
}
