//! Agent results - the immutable outcome of one agent request.

use super::role::AgentRole;
use crate::util::base64_bytes;
use serde::{Deserialize, Serialize};

/// Payload produced by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AgentContent {
    /// Markdown text from a text role.
    Text(String),
    /// Raw image bytes from an image role.
    Image(#[serde(with = "base64_bytes")] Vec<u8>),
    /// No payload (the request failed).
    Empty,
}

/// Whether the request behind a result succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AgentStatus {
    Ok,
    Failed { reason: String },
}

/// Result of one agent request (Value Object)
///
/// A failed request still produces a result: the failure is recorded in
/// the slot instead of being propagated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub role: AgentRole,
    pub content: AgentContent,
    pub status: AgentStatus,
}

impl AgentResult {
    /// Creates a successful text result.
    pub fn text(role: impl Into<AgentRole>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: AgentContent::Text(text.into()),
            status: AgentStatus::Ok,
        }
    }

    /// Creates a successful image result.
    pub fn image(role: impl Into<AgentRole>, bytes: Vec<u8>) -> Self {
        Self {
            role: role.into(),
            content: AgentContent::Image(bytes),
            status: AgentStatus::Ok,
        }
    }

    /// Creates a failure marker for the role's slot.
    pub fn failure(role: impl Into<AgentRole>, reason: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: AgentContent::Empty,
            status: AgentStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Returns `true` if the request behind this result succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.status, AgentStatus::Ok)
    }

    /// Text payload, if this is a successful text result.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            AgentContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Image payload, if this is a successful image result.
    pub fn as_image(&self) -> Option<&[u8]> {
        match &self.content {
            AgentContent::Image(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Failure reason, if the request failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            AgentStatus::Failed { reason } => Some(reason),
            AgentStatus::Ok => None,
        }
    }
}
