//! Prompt entry model

use serde::{Deserialize, Serialize};

/// A named, categorized instruction template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEntry {
    /// Short display name
    pub key: String,
    /// Instruction sent verbatim as the system turn
    pub value: String,
    /// Grouping label; blank entries are left out of category groups
    #[serde(default)]
    pub category: String,
}

impl PromptEntry {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category: category.into(),
        }
    }

    /// Whether the entry has a non-blank category
    pub fn is_categorized(&self) -> bool {
        !self.category.trim().is_empty()
    }

    /// Whether all three fields are non-blank
    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty() && self.is_categorized()
    }
}
