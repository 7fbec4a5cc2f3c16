//! CLI commands

pub mod config;
pub mod edit;
pub mod model;
pub mod prompts;
pub mod rewrite;
pub mod run;

use crate::app::AppContext;
use crate::console::{CliConsole, Spinner};
use crate::document_io::{DocumentSource, LoadedDocument};
use quickprompts_core::EditorDocument;
use quickprompts_core::error::{QpError, QpResult};
use quickprompts_core::selection::apply_instruction;

/// Rewrite the document's selection with `instruction` and write it back
pub(crate) async fn rewrite_document(
    ctx: &AppContext,
    instruction: &str,
    mut document: Option<LoadedDocument>,
    console: &CliConsole,
) -> QpResult<()> {
    let client = ctx.completion_client()?;
    let spinner = Spinner::new();

    let outcome = apply_instruction(
        document
            .as_mut()
            .map(|doc| &mut doc.buffer as &mut dyn EditorDocument),
        instruction,
        &client,
        &ctx.config,
        &spinner,
    )
    .await?;

    // apply_instruction only succeeds with a document
    let document = document.ok_or_else(|| QpError::user_input("No active document"))?;
    document.write_back()?;

    match &document.source {
        DocumentSource::File(path) => console.success(&format!(
            "Rewrote {} characters in {}",
            outcome.input_chars,
            path.display()
        )),
        DocumentSource::Stdin => console.info(&format!(
            "Rewrote {} characters into {}",
            outcome.input_chars, outcome.output_chars
        )),
    }
    Ok(())
}

/// Map a dialoguer failure onto the error taxonomy
pub(crate) fn prompt_error(e: dialoguer::Error) -> QpError {
    QpError::io(format!("Terminal prompt failed: {}", e))
}
