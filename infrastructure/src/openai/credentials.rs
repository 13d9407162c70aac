//! API credential loading

use crate::config::StudioConfigError;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Bearer token for the model endpoints. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, StudioConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through `lookup`; blank values count as missing.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StudioConfigError> {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(StudioConfigError::MissingApiKey(API_KEY_VAR)),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let result = ApiKey::from_lookup(|_| None);
        assert!(matches!(result, Err(StudioConfigError::MissingApiKey(_))));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let result = ApiKey::from_lookup(|_| Some("   ".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_key_is_trimmed_and_redacted() {
        let key = ApiKey::from_lookup(|name| {
            assert_eq!(name, "OPENAI_API_KEY");
            Some("sk-test\n".to_string())
        })
        .unwrap();
        assert_eq!(key.expose(), "sk-test");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
