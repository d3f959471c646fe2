// src/persona/mod.rs
// Persona system for user-built AI friends.
// A persona is the full set of attributes a kid picks for their bot;
// editing replaces it wholesale, never field-by-field.

pub mod presets;

pub use presets::{PERSONALITY_PRESETS, SPECIALTY_PRESETS};

use serde::{Deserialize, Serialize};

/// The user-chosen attributes defining the bot: who it is, how it acts,
/// what it is good at, and who made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub bot_name: String,
    pub creator_name: String,
    pub personality: String,
    pub specialty: String,
}

impl PersonaConfig {
    pub fn new(
        bot_name: impl Into<String>,
        creator_name: impl Into<String>,
        personality: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            bot_name: bot_name.into(),
            creator_name: creator_name.into(),
            personality: personality.into(),
            specialty: specialty.into(),
        }
    }

    /// All four fields must be filled before a session can be created.
    /// The input surface enforces this; the prompt compiler tolerates
    /// incomplete personas and interpolates empty fields as-is.
    pub fn is_complete(&self) -> bool {
        !self.bot_name.trim().is_empty()
            && !self.creator_name.trim().is_empty()
            && !self.personality.trim().is_empty()
            && !self.specialty.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_persona() {
        let persona = PersonaConfig::new("Sparky", "Mia", "funny", "stories");
        assert!(persona.is_complete());
    }

    #[test]
    fn missing_field_is_incomplete() {
        let persona = PersonaConfig::new("Sparky", "", "funny", "stories");
        assert!(!persona.is_complete());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let persona = PersonaConfig::new("Sparky", "Mia", "   ", "stories");
        assert!(!persona.is_complete());
    }
}
