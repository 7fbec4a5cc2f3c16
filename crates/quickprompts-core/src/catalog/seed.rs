//! Seed document parsing
//!
//! The seed document is plain text. Lines starting with two or more `#`
//! set the current category, and `Name: instruction` lines become entries in
//! that category. Everything else is ignored.

use super::defaults::DEFAULT_PROMPTS_DOCUMENT;
use super::entry::PromptEntry;
use crate::error::{QpError, QpResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{2,}\s*(.*)$").expect("valid heading regex"));

static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w\s-]+):(.*)$").expect("valid entry regex"));

/// Result of the seeding step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held data, or there was nothing to seed
    Unchanged,
    /// The catalog was empty and now holds this many entries
    Seeded(usize),
}

/// Parse a seed document into entries, in document order
///
/// Entries that appear before the first heading get a blank category.
pub fn parse_seed_document(document: &str) -> Vec<PromptEntry> {
    let mut category = String::new();
    let mut entries = Vec::new();

    for line in document.lines() {
        let line = line.trim_end();

        if let Some(caps) = HEADING_RE.captures(line) {
            let label = caps[1].trim_end_matches('#').trim();
            if !label.is_empty() {
                category = label.to_string();
            }
            continue;
        }

        if let Some(caps) = ENTRY_RE.captures(line) {
            let key = caps[1].trim();
            let value = caps[2].trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            entries.push(PromptEntry::new(key, value, category.clone()));
        }
    }

    entries
}

/// Read the seed document, falling back to the bundled one
pub fn read_seed_document(path: Option<&Path>) -> QpResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            QpError::io_at(
                format!("Failed to read seed document: {}", e),
                path.display().to_string(),
            )
        }),
        None => Ok(DEFAULT_PROMPTS_DOCUMENT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_category_document() {
        let entries =
            parse_seed_document("## Grammar\nFix: fix grammar\n## Style\nPolish: make formal");
        assert_eq!(
            entries,
            vec![
                PromptEntry::new("Fix", "fix grammar", "Grammar"),
                PromptEntry::new("Polish", "make formal", "Style"),
            ]
        );
    }

    #[test]
    fn test_single_hash_and_prose_ignored() {
        let doc = "# Title\nSome intro text, with a comma.\n## Code\nAdd Tests: write unit tests\n\n- bullet: not an entry?";
        let entries = parse_seed_document(doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], PromptEntry::new("Add Tests", "write unit tests", "Code"));
        // "- bullet" is hyphen + space + word characters, which is a valid label
        assert_eq!(entries[1].key, "- bullet");
    }

    #[test]
    fn test_label_with_punctuation_is_ignored() {
        let entries = parse_seed_document("## A\nKey.Name: nope\nwhat? yes: no\n(x): y");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entries_before_heading_are_uncategorized() {
        let entries = parse_seed_document("Early: first\n### Deep Heading ###\nLate: second");
        assert_eq!(entries[0].category, "");
        assert_eq!(entries[1].category, "Deep Heading");
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let entries = parse_seed_document("## X\nTranslate: translate to French: keep names");
        assert_eq!(entries[0].value, "translate to French: keep names");
    }

    #[test]
    fn test_empty_value_skipped() {
        assert!(parse_seed_document("## X\nEmpty:   \n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let entries = parse_seed_document("## Grammar\r\nFix: fix grammar\r\n");
        assert_eq!(entries, vec![PromptEntry::new("Fix", "fix grammar", "Grammar")]);
    }

    #[test]
    fn test_read_seed_document_missing_file() {
        let err = read_seed_document(Some(Path::new("/definitely/not/here.md"))).unwrap_err();
        assert!(matches!(err, QpError::Io { .. }));
        assert!(read_seed_document(None).unwrap().contains("## Grammar"));
    }
}
