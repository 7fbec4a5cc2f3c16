//! Category queries over a list of entries

use super::entry::PromptEntry;
use tracing::warn;

/// Distinct non-blank categories, in order of first appearance
pub fn categories(entries: &[PromptEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in entries.iter().filter(|e| e.is_categorized()) {
        if !seen.iter().any(|c| c == &entry.category) {
            seen.push(entry.category.clone());
        }
    }
    seen
}

/// Entries whose category equals `category`, in original order
pub fn by_category<'a>(entries: &'a [PromptEntry], category: &str) -> Vec<&'a PromptEntry> {
    entries.iter().filter(|e| e.category == category).collect()
}

/// Entries with a blank category, in original order
pub fn uncategorized(entries: &[PromptEntry]) -> Vec<&PromptEntry> {
    entries.iter().filter(|e| !e.is_categorized()).collect()
}

/// First entry whose key equals `key`
///
/// Keys are not unique; when several entries share the key the first one in
/// catalog order wins.
pub fn find_by_key<'a>(entries: &'a [PromptEntry], key: &str) -> Option<&'a PromptEntry> {
    let mut matches = entries.iter().filter(|e| e.key == key);
    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        warn!(key, duplicates = extra, "Prompt key is ambiguous, using the first match");
    }
    Some(first)
}
