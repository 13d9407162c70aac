//! Output format value object

use serde::{Deserialize, Serialize};

/// How a design plan is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every section: overview, specialist plans, visuals
    #[default]
    Full,
    /// Only the client summary
    Summary,
    /// JSON output
    Json,
}
