//! Run a catalog prompt on the selection

use crate::app::AppContext;
use crate::args::DocumentArgs;
use crate::console::CliConsole;
use crate::document_io;
use crate::picker::DialoguerPicker;
use quickprompts_core::catalog::find_by_key;
use quickprompts_core::error::{QpError, QpResult};
use quickprompts_core::{PromptEntry, SelectionFlow};
use tracing::debug;

/// Pick a prompt (or use `--prompt`) and apply it
pub async fn execute(
    ctx: &AppContext,
    prompt_key: Option<&str>,
    document: &DocumentArgs,
    console: &CliConsole,
) -> QpResult<()> {
    let entries = ctx.activate_catalog()?;
    let document = document_io::load(document)?;
    // Checked before any picker is shown
    if document.is_none() {
        return Err(QpError::user_input("No active document"));
    }

    let entry = match prompt_key {
        Some(key) => resolve_key(&entries, key)?,
        None => {
            let flow = SelectionFlow::start(entries)?;
            match flow.run(&mut DialoguerPicker::new())? {
                Some(entry) => entry,
                None => return Err(QpError::Cancelled),
            }
        }
    };
    debug!(prompt = %entry.key, "Prompt selected");

    super::rewrite_document(ctx, &entry.value, document, console).await
}

fn resolve_key(entries: &[PromptEntry], key: &str) -> QpResult<PromptEntry> {
    if entries.is_empty() {
        return Err(QpError::user_input(
            "No prompts available. Add some with `quickprompts edit`.",
        ));
    }
    find_by_key(entries, key.trim())
        .cloned()
        .ok_or_else(|| QpError::user_input(format!("No prompt named '{}'", key.trim())))
}
