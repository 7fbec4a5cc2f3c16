//! Editor document and selection
//!
//! The rewrite flow only needs two things from the host editor: the current
//! selection text and a way to replace it. [`TextBuffer`] is the in-memory
//! implementation used by the CLI for files and piped input.

use crate::error::{QpError, QpResult};
use std::ops::Range;
use std::str::FromStr;

/// The host editor's view of the active document
pub trait EditorDocument {
    /// Currently selected text, if any
    fn selected_text(&self) -> Option<&str>;

    /// Replace whatever is selected at call time with `text`
    fn replace_selection(&mut self, text: &str) -> QpResult<()>;
}

/// 1-based inclusive line range, parsed from `N` or `A-B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = QpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| -> QpResult<usize> {
            part.trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| {
                    QpError::user_input(format!("Invalid line number '{}'", part.trim()))
                })
        };

        let (start, end) = match s.split_once('-') {
            Some((a, b)) => (parse(a)?, parse(b)?),
            None => {
                let n = parse(s)?;
                (n, n)
            }
        };

        if start > end {
            return Err(QpError::user_input(format!(
                "Line range {}-{} is reversed",
                start, end
            )));
        }
        Ok(Self { start, end })
    }
}

/// An in-memory document with an optional byte-range selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Option<Range<usize>>,
}

impl TextBuffer {
    /// A document with nothing selected
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
        }
    }

    /// A document with all of its text selected
    pub fn select_all(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        Self {
            text,
            selection: Some(0..len),
        }
    }

    /// A document with a byte range selected
    pub fn with_selection(text: impl Into<String>, range: Range<usize>) -> QpResult<Self> {
        let text = text.into();
        if range.start > range.end
            || range.end > text.len()
            || !text.is_char_boundary(range.start)
            || !text.is_char_boundary(range.end)
        {
            return Err(QpError::user_input(format!(
                "Selection {}..{} is outside the document",
                range.start, range.end
            )));
        }
        Ok(Self {
            text,
            selection: Some(range),
        })
    }

    /// A document with whole lines selected, excluding the final line break
    pub fn with_lines(text: impl Into<String>, lines: LineRange) -> QpResult<Self> {
        let text = text.into();
        let mut offset = 0;
        let mut start = None;
        let mut end = None;

        for (index, line) in text.split_inclusive('\n').enumerate() {
            let number = index + 1;
            if number == lines.start {
                start = Some(offset);
            }
            if number == lines.end {
                let content = line.trim_end_matches('\n').trim_end_matches('\r');
                end = Some(offset + content.len());
                break;
            }
            offset += line.len();
        }

        match (start, end) {
            (Some(start), Some(end)) => Self::with_selection(text, start..end),
            _ => Err(QpError::user_input(format!(
                "Lines {}-{} are outside the document",
                lines.start, lines.end
            ))),
        }
    }

    /// Full document text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl EditorDocument for TextBuffer {
    fn selected_text(&self) -> Option<&str> {
        self.selection
            .clone()
            .map(|range| &self.text[range])
            .filter(|s| !s.is_empty())
    }

    fn replace_selection(&mut self, replacement: &str) -> QpResult<()> {
        let range = self
            .selection
            .clone()
            .ok_or_else(|| QpError::user_input("No text selected"))?;
        self.text.replace_range(range.clone(), replacement);
        self.selection = Some(range.start..range.start + replacement.len());
        Ok(())
    }
}
