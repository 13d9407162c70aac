//! Model client port
//!
//! Defines the interface for calling the hosted text completion and image
//! generation endpoints.

use async_trait::async_trait;
use studio_domain::{ImageSize, Model, ReferencePhoto};
use thiserror::Error;

/// Errors that can occur during a model call
///
/// Every variant is recoverable at the slot level: the orchestrator records
/// it as the failure reason of the affected result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Image decode failed: {0}")]
    Decode(String),
}

impl ClientError {
    /// Whether the failure happened while decoding a returned payload
    /// rather than on the wire.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_))
    }
}

/// A single chat completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCompletion {
    pub model: Model,
    pub system_instruction: String,
    pub user_content: String,
    pub temperature: f32,
}

/// A single image generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGeneration {
    pub model: Model,
    pub prompt: String,
    pub size: ImageSize,
    /// When present the call is an edit of this photo rather than a fresh
    /// generation.
    pub reference_photo: Option<ReferencePhoto>,
}

/// Client for the hosted model endpoints
///
/// This port defines how the application layer reaches the remote models.
/// Implementations (adapters) live in the infrastructure layer. No retry or
/// backoff is expected from implementations.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run a chat completion and return the assistant text.
    async fn complete_text(&self, request: &TextCompletion) -> Result<String, ClientError>;

    /// Generate (or edit) an image and return the decoded image bytes.
    async fn generate_image(&self, request: &ImageGeneration) -> Result<Vec<u8>, ClientError>;
}
