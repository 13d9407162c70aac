//! Application layer for interior-studio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionMode, PlanParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_client::{ClientError, ImageGeneration, ModelClient, TextCompletion},
    plan_store::{PlanStore, SessionPlanStore},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_plan::{RunPlanInput, RunPlanUseCase};
pub use use_cases::studio_session::{StudioSession, SubmitError};
