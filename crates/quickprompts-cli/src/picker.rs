//! Terminal pickers for the selection flow

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Select};
use quickprompts_core::error::{QpError, QpResult};
use quickprompts_core::{Picker, PromptItem};

/// dialoguer-backed picker drawn on stderr; Esc or q dismisses
pub struct DialoguerPicker {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerPicker {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Picker for DialoguerPicker {
    fn pick_category(&mut self, categories: &[String]) -> QpResult<Option<usize>> {
        Select::with_theme(&self.theme)
            .with_prompt("Select a category")
            .items(categories)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(|e| QpError::io(format!("Failed to display category picker: {}", e)))
    }

    fn pick_prompt(
        &mut self,
        category: Option<&str>,
        items: &[PromptItem],
    ) -> QpResult<Option<usize>> {
        let prompt = match category {
            Some(category) => format!("Select a prompt from {}", category),
            None => "Select a prompt".to_string(),
        };
        let display_items: Vec<String> = items.iter().map(format_prompt_item).collect();

        FuzzySelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&display_items)
            .default(0)
            .highlight_matches(true)
            .interact_on_opt(&self.term)
            .map_err(|e| QpError::io(format!("Failed to display prompt picker: {}", e)))
    }
}

/// Plain text so fuzzy matching sees what the user types
fn format_prompt_item(item: &PromptItem) -> String {
    let preview: String = item
        .preview
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    format!("{}  ({})", item.label, preview)
}
