//! Turn pipeline: append the user's message, call the completion service,
//! append the reply.
//!
//! Failures are swallowed and surfaced in-band as a chat message so the
//! conversation never hard-errors out from under the user.

use std::sync::Arc;

use tracing::warn;

use crate::provider::{ApiMessage, ChatRequest, CompletionProvider, ProviderError};
use crate::session::{ChatMessage, TurnSession};

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Model parameters applied to every completion call.
#[derive(Debug, Clone)]
pub struct TurnOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for TurnOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Drives one conversation turn at a time against a completion provider.
pub struct TurnExecutor {
    provider: Arc<dyn CompletionProvider>,
    options: TurnOptions,
}

impl TurnExecutor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            options: TurnOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TurnOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &TurnOptions {
        &self.options
    }

    /// Advances the session by one turn: appends the user's message, sends
    /// the system instruction plus the full transcript to the provider, and
    /// appends the reply. On failure the error is formatted into an
    /// assistant-style message instead of propagating, so the transcript
    /// always grows by exactly two entries.
    pub async fn advance_turn(&self, session: &mut TurnSession, user_text: &str) {
        session.push(ChatMessage::user(user_text));

        let request = build_request(session, &self.options);

        match self.provider.complete(request).await {
            Ok(reply) => session.push(ChatMessage::assistant(reply)),
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "completion call failed, surfacing in chat"
                );
                session.push(ChatMessage::assistant(failure_message(&e)));
            }
        }
    }
}

/// System instruction first, then the transcript in conversation order.
fn build_request(session: &TurnSession, options: &TurnOptions) -> ChatRequest {
    let mut messages = Vec::with_capacity(session.transcript().len() + 1);
    messages.push(ApiMessage::new("system", session.system_prompt()));
    for msg in session.transcript() {
        messages.push(ApiMessage::new(msg.role.as_str(), msg.content.clone()));
    }

    ChatRequest {
        messages,
        model: options.model.clone(),
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    }
}

/// The in-band failure message, with the provider error verbatim.
fn failure_message(err: &ProviderError) -> String {
    format!("⚠️ Oops! Something went wrong: {err}\n\nMake sure the API key is set correctly!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaConfig;

    #[test]
    fn request_puts_system_instruction_first() {
        let session = TurnSession::new(PersonaConfig::new("Sparky", "Mia", "funny", "stories"));
        let request = build_request(&session, &TurnOptions::default());
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("Sparky"));
        // seeded greeting follows
        assert_eq!(request.messages[1].role, "assistant");
        assert_eq!(request.messages.len(), session.transcript().len() + 1);
    }

    #[test]
    fn default_options_match_the_service_contract() {
        let options = TurnOptions::default();
        assert_eq!(options.model, "llama-3.1-8b-instant");
        assert_eq!(options.temperature, 0.8);
        assert_eq!(options.max_tokens, 300);
    }

    #[test]
    fn failure_message_carries_the_error_detail() {
        let err = ProviderError::Api {
            status: 401,
            body: "invalid api key".into(),
        };
        let msg = failure_message(&err);
        assert!(msg.contains("Oops! Something went wrong"));
        assert!(msg.contains("invalid api key"));
        assert!(msg.contains("Make sure the API key is set correctly!"));
    }
}
