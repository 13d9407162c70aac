//! Image generation from TOML (`[images]` section)

use serde::{Deserialize, Serialize};
use studio_domain::{ConfigIssue, ConfigIssueCode, ImageSize};

/// Image generation settings from TOML
///
/// # Example
///
/// ```toml
/// [images]
/// size = "1024x1024"
/// include_render = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImagesConfig {
    /// Requested size as `WIDTHxHEIGHT`
    pub size: String,
    /// Generate the full 3D render along with the moodboards
    pub include_render: bool,
}

impl Default for FileImagesConfig {
    fn default() -> Self {
        Self {
            size: ImageSize::default().to_string(),
            include_render: true,
        }
    }
}

impl FileImagesConfig {
    pub fn parse_size(&self) -> (ImageSize, Vec<ConfigIssue>) {
        match self.size.parse::<ImageSize>() {
            Ok(size) => (size, Vec::new()),
            Err(_) => (
                ImageSize::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidImageSize {
                        value: self.size.clone(),
                    },
                    format!(
                        "images.size: '{}' is not WIDTHxHEIGHT, using {}",
                        self.size,
                        ImageSize::default()
                    ),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        let images = FileImagesConfig {
            size: "1536x1024".to_string(),
            include_render: true,
        };
        let (size, issues) = images.parse_size();
        assert!(issues.is_empty());
        assert_eq!(size.to_string(), "1536x1024");
    }

    #[test]
    fn test_malformed_size() {
        let images = FileImagesConfig {
            size: "large".to_string(),
            include_render: false,
        };
        let (size, issues) = images.parse_size();
        assert_eq!(size, ImageSize::default());
        assert!(ConfigIssue::has_errors(&issues));
    }
}
