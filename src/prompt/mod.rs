// src/prompt/mod.rs
// Prompt compilation: persona attributes in, system instruction out.

pub mod builder;

pub use builder::{build_greeting, build_system_prompt};
