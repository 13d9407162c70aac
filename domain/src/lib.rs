//! Domain layer for interior-studio
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Room brief**: the validated description of one room ([`RoomBrief`])
//! - **Agent**: one role-specific exchange with a hosted model
//!   ([`TextRole`], [`ImageRole`], [`AgentResult`])
//! - **Design plan**: the aggregate of all agent results for one
//!   submission ([`DesignPlan`])

pub mod agent;
pub mod brief;
pub mod config;
pub mod core;
pub mod plan;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use agent::{
    model_config::{ModelConfig, SamplingConfig},
    request::{AgentRequest, ImageRequest},
    result::{AgentContent, AgentResult, AgentStatus},
    role::{AgentRole, ImageRole, TextRole},
    value_objects::ImageSize,
};
pub use brief::{
    BriefDraft, Budget, DEFAULT_CURRENCY, DesignStyle, PhotoType, PhotoUpload, ReferencePhoto,
    RoomBrief,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{error::BriefError, model::Model};
pub use plan::{DesignPlan, PlanPhase};
pub use prompt::PromptTemplate;
