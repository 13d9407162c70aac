//! OpenAI-compatible model client
//!
//! Talks to `/chat/completions`, `/images/generations` and `/images/edits`
//! over HTTPS with a bearer key read from the environment.

pub mod client;
pub mod credentials;
pub mod error;
pub mod protocol;

pub use client::OpenAiClient;
pub use credentials::{API_KEY_VAR, ApiKey};
pub use error::OpenAiError;
