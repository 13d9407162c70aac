//! Infrastructure layer for interior-studio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileImagesConfig, FileModelsConfig, FileOutputConfig,
    FileOutputFormat, FileSamplingConfig, StudioConfigError,
};
pub use logging::JsonlConversationLogger;
pub use openai::{ApiKey, OpenAiClient, OpenAiError};
