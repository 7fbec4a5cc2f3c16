//! Catalog editor commands
//!
//! `edit` drives [`CatalogEditor`] from a terminal form. `edit --stdio`
//! speaks the editor message protocol as JSON lines so an external panel
//! can do the rendering.

use super::prompt_error;
use crate::app::AppContext;
use crate::console::CliConsole;
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use quickprompts_core::catalog::CatalogStore;
use quickprompts_core::editor::{
    EditorRow, RowField, RowId, handle_message, handle_raw_message, loaded_reply,
};
use quickprompts_core::error::{QpError, QpResult};
use quickprompts_core::selection::preview;
use quickprompts_core::{CatalogEditor, EditorReply};
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

const FIELDS: [RowField; 3] = [RowField::Name, RowField::Template, RowField::Category];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Filter,
    Add,
    Edit,
    Delete,
    Save,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Filter,
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Save,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Filter => "Filter prompts",
            Action::Add => "Add prompt",
            Action::Edit => "Edit prompt",
            Action::Delete => "Delete prompt",
            Action::Save => "Save",
            Action::Quit => "Quit",
        }
    }
}

/// Serve the JSON-lines protocol on stdin/stdout
pub fn serve_stdio(ctx: &AppContext) -> QpResult<()> {
    ctx.activate_catalog()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&ctx.catalog, stdin.lock(), stdout.lock())
}

/// Send the current catalog, then answer one reply per message line
fn serve(store: &CatalogStore, input: impl BufRead, mut output: impl Write) -> QpResult<()> {
    send(&mut output, &loaded_reply(store))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_raw_message(store, &line);
        debug!(?reply, "Editor message handled");
        send(&mut output, &reply)?;
    }
    Ok(())
}

fn send(output: &mut impl Write, reply: &EditorReply) -> QpResult<()> {
    serde_json::to_writer(&mut *output, reply)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Edit the catalog in the terminal until the user quits
pub fn interactive(ctx: &AppContext, console: &CliConsole) -> QpResult<()> {
    if !std::io::stdin().is_terminal() {
        return Err(QpError::user_input(
            "The prompt editor needs a terminal. Use `quickprompts edit --stdio` for piped input.",
        ));
    }

    let mut editor = CatalogEditor::new(ctx.activate_catalog()?);
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        console.print_header("Prompts");
        eprint!("{}", render_rows(&editor));

        let selection = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        let action = selection.map_or(Action::Quit, |index| Action::ALL[index]);

        match action {
            Action::Filter => {
                let query = Input::<String>::with_theme(&theme)
                    .with_prompt("Filter (empty to clear)")
                    .with_initial_text(editor.filter())
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                editor.set_filter(query);
            }
            Action::Add => {
                let id = editor.add_row();
                for field in FIELDS {
                    edit_field(&mut editor, &theme, id, field)?;
                }
            }
            Action::Edit => {
                if let Some(id) = pick_row(&editor, &theme, "Edit which prompt?")? {
                    edit_row(&mut editor, &theme, id)?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_row(&editor, &theme, "Delete which prompt?")? {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt("Delete this prompt?")
                        .default(false)
                        .interact()
                        .map_err(prompt_error)?;
                    if confirmed {
                        editor.delete(id);
                    }
                }
            }
            Action::Save => match save(&mut editor, &ctx.catalog) {
                Ok(count) => console.success(&format!("Saved {} prompts", count)),
                Err(e) => {
                    console.report(&e);
                }
            },
            Action::Quit => {
                if !editor.is_dirty() || confirm_discard(&theme)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Validate, persist through the message protocol, and clear the dirty state
fn save(editor: &mut CatalogEditor, store: &CatalogStore) -> QpResult<usize> {
    let message = editor.save_message()?;
    match handle_message(store, message) {
        EditorReply::Saved { count } => {
            editor.mark_saved();
            Ok(count)
        }
        EditorReply::Error { message } => Err(QpError::settings(message)),
        EditorReply::Loaded { .. } => Err(QpError::other("Unexpected reply to save")),
    }
}

fn confirm_discard(theme: &ColorfulTheme) -> QpResult<bool> {
    Confirm::with_theme(theme)
        .with_prompt("Discard unsaved changes?")
        .default(false)
        .interact()
        .map_err(prompt_error)
}

fn pick_row(
    editor: &CatalogEditor,
    theme: &ColorfulTheme,
    prompt: &str,
) -> QpResult<Option<RowId>> {
    let visible = editor.visible_rows();
    if visible.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = visible
        .iter()
        .map(|row| format!("{} [{}]", display_or_blank(&row.entry.key), row.entry.category))
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;
    Ok(selection.map(|index| visible[index].id))
}

fn edit_row(editor: &mut CatalogEditor, theme: &ColorfulTheme, id: RowId) -> QpResult<()> {
    loop {
        let Some(row) = editor.row(id) else {
            return Ok(());
        };
        let items: Vec<String> = FIELDS
            .iter()
            .map(|field| format!("{}: {}", field.label(), preview(field_value(row, *field))))
            .collect();

        let selection = Select::with_theme(theme)
            .with_prompt("Edit which field? (Esc when done)")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        match selection {
            Some(index) => edit_field(editor, theme, id, FIELDS[index])?,
            None => return Ok(()),
        }
    }
}

fn edit_field(
    editor: &mut CatalogEditor,
    theme: &ColorfulTheme,
    id: RowId,
    field: RowField,
) -> QpResult<()> {
    let current = editor
        .row(id)
        .map(|row| field_value(row, field).to_string())
        .unwrap_or_default();
    let value = Input::<String>::with_theme(theme)
        .with_prompt(field.label())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    editor.update(id, field, value)
}

fn field_value(row: &EditorRow, field: RowField) -> &str {
    match field {
        RowField::Name => &row.entry.key,
        RowField::Template => &row.entry.value,
        RowField::Category => &row.entry.category,
    }
}

fn display_or_blank(text: &str) -> &str {
    if text.trim().is_empty() { "(blank)" } else { text }
}

/// Visible rows numbered by catalog position, plus a filter summary
fn render_rows(editor: &CatalogEditor) -> String {
    let mut out = String::new();
    let position = |id: RowId| {
        editor
            .rows()
            .iter()
            .position(|row| row.id == id)
            .map_or(0, |i| i + 1)
    };

    for row in editor.visible_rows() {
        let marker = if row.touched { "*" } else { " " };
        out.push_str(&format!(
            "{}{:>3}. {} [{}] {}\n",
            marker,
            position(row.id),
            display_or_blank(&row.entry.key).bold(),
            row.entry.category.cyan(),
            preview(&row.entry.value).dimmed()
        ));
    }

    if editor.is_filtered() {
        out.push_str(&format!(
            "Filter '{}': {} hidden\n",
            editor.filter(),
            editor.hidden_count()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickprompts_core::{JsonStore, PromptEntry};
    use serde_json::{Value, json};
    use std::io::Cursor;
    use tempfile::{TempDir, tempdir};

    fn store_with(entries: &[PromptEntry]) -> (TempDir, CatalogStore) {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(JsonStore::new(dir.path().join("state.json")));
        store.replace_all(entries).unwrap();
        (dir, store)
    }

    fn replies(output: Vec<u8>) -> Vec<Value> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_stdio_session() {
        let (_dir, store) = store_with(&[PromptEntry::new("Fix", "fix grammar", "Grammar")]);
        let input = concat!(
            r#"{"command":"save","prompts":[{"key":"A","value":"a","category":"X"}]}"#,
            "\n\n",
            "not json\n",
        );
        let mut output = Vec::new();

        serve(&store, Cursor::new(input), &mut output).unwrap();

        let replies = replies(output);
        assert_eq!(replies.len(), 3);
        assert_eq!(
            replies[0],
            json!({"event": "loaded", "prompts": [{"key": "Fix", "value": "fix grammar", "category": "Grammar"}]})
        );
        assert_eq!(replies[1], json!({"event": "saved", "count": 1}));
        assert_eq!(replies[2]["event"], "error");
        assert_eq!(store.load().unwrap(), vec![PromptEntry::new("A", "a", "X")]);
    }

    #[test]
    fn test_save_keeps_hidden_rows() {
        let (_dir, store) = store_with(&[]);
        let mut editor = CatalogEditor::new(vec![
            PromptEntry::new("Fix", "fix grammar", "Grammar"),
            PromptEntry::new("Formal", "make formal", "Style"),
        ]);
        editor.set_filter("formal");
        let id = editor.rows()[1].id;
        editor.update(id, RowField::Template, "be formal").unwrap();

        assert_eq!(save(&mut editor, &store).unwrap(), 2);
        assert!(!editor.is_dirty());
        assert_eq!(
            store.load().unwrap(),
            vec![
                PromptEntry::new("Fix", "fix grammar", "Grammar"),
                PromptEntry::new("Formal", "be formal", "Style"),
            ]
        );
    }

    #[test]
    fn test_invalid_save_persists_nothing() {
        let before = vec![PromptEntry::new("Fix", "fix grammar", "Grammar")];
        let (_dir, store) = store_with(&before);
        let mut editor = CatalogEditor::new(before.clone());
        editor.add_row();

        let err = save(&mut editor, &store).unwrap_err();
        assert!(matches!(err, QpError::Validation { .. }));
        assert!(editor.is_dirty());
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_render_numbers_by_catalog_position() {
        let mut editor = CatalogEditor::new(vec![
            PromptEntry::new("Fix", "fix grammar", "Grammar"),
            PromptEntry::new("Formal", "make formal", "Style"),
        ]);
        editor.set_filter("formal");

        let text = render_rows(&editor);
        assert!(text.contains("2. "));
        assert!(!text.contains("fix grammar"));
        assert!(text.contains("1 hidden"));
    }
}
