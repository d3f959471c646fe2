use crate::persona::PersonaConfig;

/// Builds the hidden system instruction sent ahead of every completion
/// request. Deterministic: the same persona always compiles to the same
/// string. Empty fields interpolate as empty; completeness is checked
/// upstream by the input surface, not here.
pub fn build_system_prompt(persona: &PersonaConfig) -> String {
    format!(
        "You are {bot_name}, a friendly AI assistant created by {creator_name}.\n\
         \n\
         Your personality: You are {personality}.\n\
         \n\
         Your special skill: You are especially good at {specialty}.\n\
         \n\
         Guidelines:\n\
         - Always be friendly, encouraging, and patient\n\
         - Use simple language that kids can understand\n\
         - Add emojis to make conversations fun! 😊\n\
         - If you don't know something, be honest about it\n\
         - Always try to teach something new in a fun way\n\
         - Keep your responses appropriate for children aged 8-14\n\
         - Stay true to your personality in every response\n\
         - Remember you were created by {creator_name} - they made you special!",
        bot_name = persona.bot_name,
        creator_name = persona.creator_name,
        personality = persona.personality,
        specialty = persona.specialty,
    )
}

/// The bot's first message, seeded into every fresh transcript.
pub fn build_greeting(persona: &PersonaConfig) -> String {
    format!(
        "Hi {creator_name}! I'm {bot_name}, your AI friend! 😊 I'm so excited to chat with you! \
         What would you like to talk about today?",
        creator_name = persona.creator_name,
        bot_name = persona.bot_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparky() -> PersonaConfig {
        PersonaConfig::new(
            "Sparky",
            "Mia",
            "funny and loves to tell jokes",
            "telling amazing stories",
        )
    }

    #[test]
    fn prompt_is_deterministic() {
        let persona = sparky();
        assert_eq!(build_system_prompt(&persona), build_system_prompt(&persona));
    }

    #[test]
    fn prompt_contains_all_persona_fields() {
        let prompt = build_system_prompt(&sparky());
        assert!(prompt.contains("Sparky"));
        assert!(prompt.contains("Mia"));
        assert!(prompt.contains("funny and loves to tell jokes"));
        assert!(prompt.contains("telling amazing stories"));
    }

    #[test]
    fn prompt_contains_behavioral_guidelines() {
        let prompt = build_system_prompt(&sparky());
        assert!(prompt.contains("friendly, encouraging, and patient"));
        assert!(prompt.contains("simple language that kids can understand"));
        assert!(prompt.contains("emojis"));
        assert!(prompt.contains("be honest about it"));
        assert!(prompt.contains("teach something new in a fun way"));
        assert!(prompt.contains("aged 8-14"));
        assert!(prompt.contains("created by Mia"));
    }

    #[test]
    fn empty_fields_interpolate_without_failing() {
        let persona = PersonaConfig::new("", "", "", "");
        let prompt = build_system_prompt(&persona);
        assert!(prompt.contains("You are , a friendly AI assistant created by ."));
    }

    #[test]
    fn greeting_names_creator_and_bot() {
        let greeting = build_greeting(&sparky());
        assert!(greeting.contains("Hi Mia!"));
        assert!(greeting.contains("I'm Sparky"));
    }
}
