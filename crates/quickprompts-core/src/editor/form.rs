//! Editable row model

use super::protocol::EditorMessage;
use crate::catalog::PromptEntry;
use crate::error::{QpError, QpResult};

/// Stable identifier of a row within one editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// Editable fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Template,
    Category,
}

impl RowField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Template => "prompt",
            Self::Category => "category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    pub id: RowId,
    pub entry: PromptEntry,
    /// Added or changed during this session
    pub touched: bool,
}

/// Form model over a snapshot of the catalog
///
/// The filter only changes which rows are visible. Saving writes every row,
/// hidden ones included, so an active filter never drops data, and every
/// row is validated before anything is written.
#[derive(Debug, Clone)]
pub struct CatalogEditor {
    rows: Vec<EditorRow>,
    filter: String,
    next_id: u64,
    removed: usize,
}

impl CatalogEditor {
    pub fn new(entries: Vec<PromptEntry>) -> Self {
        let rows: Vec<EditorRow> = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| EditorRow {
                id: RowId(i as u64),
                entry,
                touched: false,
            })
            .collect();
        let next_id = rows.len() as u64;
        Self {
            rows,
            filter: String::new(),
            next_id,
            removed: 0,
        }
    }

    /// All rows, in catalog order
    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the live filter, matched as a plain substring; an empty string clears it
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    pub fn is_filtered(&self) -> bool {
        !self.filter.is_empty()
    }

    /// Rows matching the filter, plus any row touched this session
    pub fn visible_rows(&self) -> Vec<&EditorRow> {
        self.rows.iter().filter(|row| self.is_visible(row)).collect()
    }

    /// Rows the filter is currently hiding
    pub fn hidden_count(&self) -> usize {
        self.rows.len() - self.visible_rows().len()
    }

    fn is_visible(&self, row: &EditorRow) -> bool {
        if row.touched || self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        row.entry.key.to_lowercase().contains(&needle)
            || row.entry.value.to_lowercase().contains(&needle)
    }

    /// Append a blank row
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(EditorRow {
            id,
            entry: PromptEntry::new("", "", ""),
            touched: true,
        });
        id
    }

    pub fn row(&self, id: RowId) -> Option<&EditorRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Change one field of a row
    pub fn update(&mut self, id: RowId, field: RowField, value: impl Into<String>) -> QpResult<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| QpError::user_input("Row no longer exists"))?;

        let value = value.into();
        let slot = match field {
            RowField::Name => &mut row.entry.key,
            RowField::Template => &mut row.entry.value,
            RowField::Category => &mut row.entry.category,
        };
        if *slot != value {
            *slot = value;
            row.touched = true;
        }
        Ok(())
    }

    /// Remove a row; returns the removed entry
    pub fn delete(&mut self, id: RowId) -> Option<PromptEntry> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        self.removed += 1;
        Some(self.rows.remove(index).entry)
    }

    /// Check every row, hidden or not, has a name, a prompt and a category
    pub fn validate(&self) -> QpResult<()> {
        let incomplete: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.entry.is_complete())
            .map(|(i, _)| i + 1)
            .collect();

        if incomplete.is_empty() {
            return Ok(());
        }

        let rows = incomplete
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(QpError::validation(
            format!(
                "All fields (name, prompt, category) are required. Incomplete row(s): {}",
                rows
            ),
            incomplete.len(),
        ))
    }

    /// Validate and build the save message carrying the full row set
    ///
    /// Nothing is produced if any row is incomplete.
    pub fn save_message(&self) -> QpResult<EditorMessage> {
        self.validate()?;
        Ok(EditorMessage::Save {
            prompts: self.rows.iter().map(|row| row.entry.clone()).collect(),
        })
    }

    /// Mark the session's changes as saved
    pub fn mark_saved(&mut self) {
        for row in &mut self.rows {
            row.touched = false;
        }
        self.removed = 0;
    }

    /// Whether anything changed since the last save
    pub fn is_dirty(&self) -> bool {
        self.removed > 0 || self.rows.iter().any(|row| row.touched)
    }
}
