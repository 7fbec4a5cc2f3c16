//! Bundled default prompts

/// The seed document compiled into the binary
pub const DEFAULT_PROMPTS_DOCUMENT: &str = include_str!("../../assets/default_prompts.md");
