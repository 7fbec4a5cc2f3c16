//! Category → prompt selection state machine

use super::preview::preview;
use crate::catalog::{PromptEntry, by_category, categories};
use crate::error::{QpError, QpResult};
use tracing::debug;

/// One row of the prompt picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptItem {
    pub label: String,
    pub preview: String,
    pub entry: PromptEntry,
}

impl PromptItem {
    fn from_entry(entry: &PromptEntry) -> Self {
        Self {
            label: entry.key.clone(),
            preview: preview(&entry.value),
            entry: entry.clone(),
        }
    }
}

/// Where the flow currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    ChooseCategory {
        categories: Vec<String>,
    },
    /// `category` is None when the catalog has no categories at all
    ChoosePrompt {
        category: Option<String>,
        items: Vec<PromptItem>,
    },
    Apply {
        entry: PromptEntry,
    },
    Cancelled,
}

/// Interactive pickers the flow drives
///
/// Returning `Ok(None)` means the user dismissed the picker.
pub trait Picker {
    fn pick_category(&mut self, categories: &[String]) -> QpResult<Option<usize>>;

    fn pick_prompt(
        &mut self,
        category: Option<&str>,
        items: &[PromptItem],
    ) -> QpResult<Option<usize>>;
}

/// The selection flow over a snapshot of the catalog
#[derive(Debug, Clone)]
pub struct SelectionFlow {
    entries: Vec<PromptEntry>,
    state: SelectionState,
}

impl SelectionFlow {
    /// Start the flow; an empty catalog is reported as "no prompts"
    pub fn start(entries: Vec<PromptEntry>) -> QpResult<Self> {
        if entries.is_empty() {
            return Err(QpError::user_input(
                "No prompts available. Add some with `quickprompts edit`.",
            ));
        }

        let mut cats = categories(&entries);
        let state = match cats.len() {
            0 => SelectionState::ChoosePrompt {
                category: None,
                items: entries.iter().map(PromptItem::from_entry).collect(),
            },
            1 => {
                let category = cats.remove(0);
                debug!(%category, "Single category, skipping category selection");
                Self::prompt_state(&entries, category)
            }
            _ => SelectionState::ChooseCategory { categories: cats },
        };

        Ok(Self { entries, state })
    }

    fn prompt_state(entries: &[PromptEntry], category: String) -> SelectionState {
        let items = by_category(entries, &category)
            .into_iter()
            .map(PromptItem::from_entry)
            .collect();
        SelectionState::ChoosePrompt {
            category: Some(category),
            items,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Pick a category by index
    pub fn choose_category(&mut self, index: usize) -> QpResult<()> {
        let SelectionState::ChooseCategory { categories } = &self.state else {
            return Err(QpError::other("Not choosing a category"));
        };
        let category = categories
            .get(index)
            .cloned()
            .ok_or_else(|| QpError::user_input(format!("No category at index {}", index)))?;
        self.state = Self::prompt_state(&self.entries, category);
        Ok(())
    }

    /// Pick a prompt by index; the flow moves to Apply
    pub fn choose_prompt(&mut self, index: usize) -> QpResult<()> {
        let SelectionState::ChoosePrompt { items, .. } = &self.state else {
            return Err(QpError::other("Not choosing a prompt"));
        };
        let entry = items
            .get(index)
            .map(|item| item.entry.clone())
            .ok_or_else(|| QpError::user_input(format!("No prompt at index {}", index)))?;
        self.state = SelectionState::Apply { entry };
        Ok(())
    }

    /// Abort the flow
    pub fn cancel(&mut self) {
        self.state = SelectionState::Cancelled;
    }

    /// The chosen entry once the flow reached Apply
    pub fn selected(&self) -> Option<&PromptEntry> {
        match &self.state {
            SelectionState::Apply { entry } => Some(entry),
            _ => None,
        }
    }

    /// Drive the flow to a terminal state with the given picker
    ///
    /// Returns None when the user cancelled.
    pub fn run(mut self, picker: &mut dyn Picker) -> QpResult<Option<PromptEntry>> {
        loop {
            let choice = match &self.state {
                SelectionState::ChooseCategory { categories } => {
                    picker.pick_category(categories)?.map(Step::Category)
                }
                SelectionState::ChoosePrompt { category, items } => {
                    picker.pick_prompt(category.as_deref(), items)?.map(Step::Prompt)
                }
                SelectionState::Apply { entry } => return Ok(Some(entry.clone())),
                SelectionState::Cancelled => return Ok(None),
            };

            match choice {
                Some(Step::Category(index)) => self.choose_category(index)?,
                Some(Step::Prompt(index)) => self.choose_prompt(index)?,
                None => {
                    debug!("Selection cancelled");
                    self.cancel();
                }
            }
        }
    }
}

enum Step {
    Category(usize),
    Prompt(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers picker calls from a script and records what was shown
    #[derive(Default)]
    struct ScriptedPicker {
        answers: VecDeque<Option<usize>>,
        category_calls: usize,
        shown_items: Vec<Vec<String>>,
    }

    impl ScriptedPicker {
        fn new(answers: &[Option<usize>]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Picker for ScriptedPicker {
        fn pick_category(&mut self, _categories: &[String]) -> QpResult<Option<usize>> {
            self.category_calls += 1;
            Ok(self.answers.pop_front().flatten())
        }

        fn pick_prompt(
            &mut self,
            _category: Option<&str>,
            items: &[PromptItem],
        ) -> QpResult<Option<usize>> {
            self.shown_items
                .push(items.iter().map(|i| i.label.clone()).collect());
            Ok(self.answers.pop_front().flatten())
        }
    }

    fn two_categories() -> Vec<PromptEntry> {
        vec![
            PromptEntry::new("Fix", "fix grammar", "Grammar"),
            PromptEntry::new("Polish", "make formal", "Style"),
            PromptEntry::new("Spell", "fix spelling", "Grammar"),
        ]
    }

    #[test]
    fn test_empty_catalog_reports_no_prompts() {
        let err = SelectionFlow::start(vec![]).unwrap_err();
        assert!(matches!(err, QpError::UserInput { .. }));
    }

    #[test]
    fn test_single_category_skips_category_choice() {
        let entries = vec![
            PromptEntry::new("Fix", "fix grammar", "Grammar"),
            PromptEntry::new("Spell", "fix spelling", "Grammar"),
        ];
        let flow = SelectionFlow::start(entries).unwrap();
        assert!(matches!(
            flow.state(),
            SelectionState::ChoosePrompt { category: Some(c), items } if c == "Grammar" && items.len() == 2
        ));

        let mut picker = ScriptedPicker::new(&[Some(1)]);
        let chosen = flow.run(&mut picker).unwrap().unwrap();
        assert_eq!(chosen.key, "Spell");
        assert_eq!(picker.category_calls, 0);
    }

    #[test]
    fn test_two_categories_then_prompt() {
        let flow = SelectionFlow::start(two_categories()).unwrap();
        assert!(matches!(flow.state(), SelectionState::ChooseCategory { .. }));

        let mut picker = ScriptedPicker::new(&[Some(0), Some(1)]);
        let chosen = flow.run(&mut picker).unwrap().unwrap();
        assert_eq!(chosen.key, "Spell");
        assert_eq!(picker.category_calls, 1);
        assert_eq!(picker.shown_items, vec![vec!["Fix", "Spell"]]);
    }

    #[test]
    fn test_cancel_at_category() {
        let flow = SelectionFlow::start(two_categories()).unwrap();
        let mut picker = ScriptedPicker::new(&[None]);
        assert_eq!(flow.run(&mut picker).unwrap(), None);
        assert!(picker.shown_items.is_empty());
    }

    #[test]
    fn test_cancel_at_prompt() {
        let flow = SelectionFlow::start(two_categories()).unwrap();
        let mut picker = ScriptedPicker::new(&[Some(1), None]);
        assert_eq!(flow.run(&mut picker).unwrap(), None);
    }

    #[test]
    fn test_uncategorized_only_lists_everything() {
        let entries = vec![
            PromptEntry::new("A", "one", ""),
            PromptEntry::new("B", "two", ""),
        ];
        let flow = SelectionFlow::start(entries).unwrap();
        assert!(matches!(
            flow.state(),
            SelectionState::ChoosePrompt { category: None, items } if items.len() == 2
        ));
    }

    #[test]
    fn test_items_carry_previews() {
        let long = "x".repeat(150);
        let flow = SelectionFlow::start(vec![PromptEntry::new("Long", long, "Only")]).unwrap();
        let SelectionState::ChoosePrompt { items, .. } = flow.state() else {
            panic!("expected prompt state");
        };
        assert_eq!(items[0].preview.len(), 103);
    }

    #[test]
    fn test_manual_transitions() {
        let mut flow = SelectionFlow::start(two_categories()).unwrap();
        assert!(flow.choose_prompt(0).is_err());
        assert!(flow.choose_category(7).is_err());
        flow.choose_category(1).unwrap();
        flow.choose_prompt(0).unwrap();
        assert_eq!(flow.selected().unwrap().key, "Polish");
    }

    #[test]
    fn test_out_of_range_pick_is_error() {
        let flow = SelectionFlow::start(two_categories()).unwrap();
        let mut picker = ScriptedPicker::new(&[Some(5)]);
        assert!(flow.run(&mut picker).is_err());
    }
}
