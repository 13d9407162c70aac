//! Per-role sampling from TOML (`[sampling]` section)

use serde::{Deserialize, Serialize};
use studio_domain::{ConfigIssue, ConfigIssueCode, SamplingConfig, TextRole};

/// Per-role temperatures from TOML
///
/// # Example
///
/// ```toml
/// [sampling]
/// architect = 0.8
/// furniture = 0.8
/// colorist = 0.8
/// summarizer = 0.7
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSamplingConfig {
    pub architect: Option<f32>,
    pub furniture: Option<f32>,
    pub colorist: Option<f32>,
    pub summarizer: Option<f32>,
}

impl FileSamplingConfig {
    fn configured(&self) -> [(TextRole, Option<f32>); 4] {
        [
            (TextRole::Architect, self.architect),
            (TextRole::Furniture, self.furniture),
            (TextRole::Colorist, self.colorist),
            (TextRole::Summarizer, self.summarizer),
        ]
    }

    /// Resolve into a [`SamplingConfig`].
    ///
    /// Out-of-range temperatures are reported and replaced by the default
    /// for that role.
    pub fn to_sampling_config(&self) -> (SamplingConfig, Vec<ConfigIssue>) {
        let defaults = SamplingConfig::default();
        let mut config = defaults;
        let mut issues = Vec::new();

        for (role, value) in self.configured() {
            let Some(temperature) = value else {
                continue;
            };
            if SamplingConfig::RANGE.contains(&temperature) {
                config = config.with_temperature(role, temperature);
            } else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::TemperatureOutOfRange {
                        role: role.as_str().to_string(),
                    },
                    format!(
                        "sampling.{}: {} is outside 0.0..=2.0, using {}",
                        role.as_str(),
                        temperature,
                        defaults.temperature_for(role)
                    ),
                ));
            }
        }

        (config, issues)
    }
}
