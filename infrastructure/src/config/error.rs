//! Startup configuration errors

use thiserror::Error;

/// Errors that stop the studio before any request is made
#[derive(Error, Debug)]
pub enum StudioConfigError {
    #[error("{0} is not set; export your OpenAI API key before starting")]
    MissingApiKey(&'static str),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration:\n{0}")]
    Invalid(String),
}
