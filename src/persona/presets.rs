// src/persona/presets.rs

//! Fill-in-the-blank menus for the persona wizard. Kids can pick one of
//! these or write their own.

/// "My bot is ___________"
pub const PERSONALITY_PRESETS: &[&str] = &[
    "funny and loves to tell jokes",
    "wise and loves to share knowledge",
    "energetic and super enthusiastic",
    "calm and peaceful like a wise monk",
    "curious and always asking questions",
    "adventurous and loves stories about exploring",
    "artistic and creative",
    "scientific and loves experiments",
];

/// "My bot is especially good at ___________"
pub const SPECIALTY_PRESETS: &[&str] = &[
    "helping with homework and explaining things simply",
    "telling amazing stories and adventures",
    "teaching fun science facts",
    "giving advice about friendship and feelings",
    "being a creative writing partner",
    "making learning math fun",
    "teaching about animals and nature",
    "helping with art and drawing ideas",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_non_empty() {
        assert!(!PERSONALITY_PRESETS.is_empty());
        assert!(!SPECIALTY_PRESETS.is_empty());
        for p in PERSONALITY_PRESETS.iter().chain(SPECIALTY_PRESETS) {
            assert!(!p.trim().is_empty());
        }
    }
}
