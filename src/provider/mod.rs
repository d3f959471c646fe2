//! Provider abstraction for the completion service
//!
//! The core treats the service as opaque: an ordered role/content message
//! list plus model parameters in, a single text completion out. Any backend
//! implementing chat completion over a message list satisfies the contract;
//! tests stub it.

mod groq;

pub use groq::GroqProvider;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A single role/content entry in the outbound message list.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: String,
}

impl ApiMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// One completion request: system instruction first, then the transcript.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ApiMessage>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Everything that can go wrong talking to the completion service.
/// The turn pipeline collapses all of these into one in-band chat message;
/// callers never see the variants.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network failure, timeout, or an unreadable response body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("completion service error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A well-formed response with no completion text in it
    #[error("no content in completion response")]
    MissingContent,
}

/// Unified trait for completion backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One blocking completion call per turn. No retries, no streaming.
    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
