//! Session types for a persona chat
//!
//! A `TurnSession` owns one persona, the system instruction compiled from
//! it, and the transcript. The system instruction is recomputed whenever
//! the persona is replaced, so it can never go stale relative to the
//! config that produced it.

use serde::{Deserialize, Serialize};

use crate::persona::PersonaConfig;
use crate::prompt::{build_greeting, build_system_prompt};

/// Message role in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A chat message, immutable once appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// One persona, one compiled system instruction, one transcript.
#[derive(Debug, Clone)]
pub struct TurnSession {
    persona: PersonaConfig,
    system_prompt: String,
    transcript: Vec<ChatMessage>,
}

impl TurnSession {
    /// Creates a session from a completed persona and seeds the transcript
    /// with the bot's greeting.
    pub fn new(persona: PersonaConfig) -> Self {
        let system_prompt = build_system_prompt(&persona);
        let greeting = build_greeting(&persona);
        Self {
            persona,
            system_prompt,
            transcript: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Replaces the persona wholesale (an "edit" is a full re-entry, never a
    /// partial merge). Recompiles the system instruction and reseeds the
    /// transcript with the new bot's greeting.
    pub fn replace_persona(&mut self, persona: PersonaConfig) {
        *self = Self::new(persona);
    }

    /// Resets the transcript to the seeded greeting, keeping the persona.
    pub fn clear_chat(&mut self) {
        self.transcript = vec![ChatMessage::assistant(build_greeting(&self.persona))];
    }

    pub(crate) fn push(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparky() -> PersonaConfig {
        PersonaConfig::new("Sparky", "Mia", "funny", "stories")
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn new_session_seeds_greeting() {
        let session = TurnSession::new(sparky());
        assert_eq!(session.transcript().len(), 1);
        let seed = &session.transcript()[0];
        assert_eq!(seed.role, MessageRole::Assistant);
        assert!(seed.content.contains("Mia"));
        assert!(seed.content.contains("Sparky"));
    }

    #[test]
    fn clear_chat_resets_to_single_greeting() {
        let mut session = TurnSession::new(sparky());
        session.push(ChatMessage::user("hi"));
        session.push(ChatMessage::assistant("hello!"));
        session.clear_chat();
        assert_eq!(session.transcript().len(), 1);
        assert!(session.transcript()[0].content.contains("Sparky"));
    }

    #[test]
    fn replace_persona_recompiles_prompt_and_reseeds() {
        let mut session = TurnSession::new(sparky());
        session.push(ChatMessage::user("hi"));
        session.replace_persona(PersonaConfig::new("Luna", "Sam", "wise", "science"));
        assert!(session.system_prompt().contains("Luna"));
        assert!(!session.system_prompt().contains("Sparky"));
        assert_eq!(session.transcript().len(), 1);
        assert!(session.transcript()[0].content.contains("Hi Sam!"));
    }
}
