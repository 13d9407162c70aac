//! Smaller sections: `[execution]`, `[api]`, `[brief]` and `[logging]`

use serde::{Deserialize, Serialize};
use studio_application::ExecutionMode;
use studio_domain::DEFAULT_CURRENCY;

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// How agent requests within a phase are issued
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    pub mode: ExecutionMode,
}

/// Remote API settings
///
/// The API key is never read from files, only from `OPENAI_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub base_url: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Brief defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBriefConfig {
    /// Currency label shown next to the budget
    pub currency: String,
}

impl Default for FileBriefConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Transcript logging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path; disabled when unset
    pub transcript: Option<String>,
}
