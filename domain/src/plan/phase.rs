//! Plan phases

use serde::{Deserialize, Serialize};

/// Phase of a plan run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanPhase {
    /// Specialist agents (architect, furniture, colorist)
    Specialists,
    /// Client summary built from the brief and specialist notes
    Summary,
    /// Moodboards and render
    Visuals,
}

impl PlanPhase {
    pub fn as_str(&self) -> &str {
        match self {
            PlanPhase::Specialists => "specialists",
            PlanPhase::Summary => "summary",
            PlanPhase::Visuals => "visuals",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlanPhase::Specialists => "Specialist Agents",
            PlanPhase::Summary => "Client Summary",
            PlanPhase::Visuals => "Moodboard & Render",
        }
    }
}

impl std::fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
