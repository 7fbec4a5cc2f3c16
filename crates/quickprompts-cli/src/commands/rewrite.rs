//! Default rewrite command

use crate::app::AppContext;
use crate::args::DocumentArgs;
use crate::console::CliConsole;
use crate::document_io;
use quickprompts_core::error::QpResult;

/// Rewrite the selection with the configured default instruction
pub async fn execute(
    ctx: &AppContext,
    document: &DocumentArgs,
    console: &CliConsole,
) -> QpResult<()> {
    let document = document_io::load(document)?;
    super::rewrite_document(ctx, &ctx.config.default_prompt, document, console).await
}
