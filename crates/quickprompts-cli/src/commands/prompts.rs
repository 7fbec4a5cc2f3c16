//! Catalog listing

use crate::app::AppContext;
use colored::*;
use quickprompts_core::PromptEntry;
use quickprompts_core::catalog::{by_category, categories, uncategorized};
use quickprompts_core::error::{QpError, QpResult};
use quickprompts_core::selection::preview;
use std::io::Write;

const UNCATEGORIZED_TITLE: &str = "(uncategorized)";

/// Print the catalog to stdout, grouped by category
pub fn list(ctx: &AppContext, category: Option<&str>) -> QpResult<()> {
    let entries = ctx.activate_catalog()?;
    let mut stdout = std::io::stdout().lock();
    write_listing(&mut stdout, &entries, category)?;
    stdout.flush()?;
    Ok(())
}

fn write_listing(
    out: &mut impl Write,
    entries: &[PromptEntry],
    category: Option<&str>,
) -> QpResult<()> {
    if entries.is_empty() {
        return Err(QpError::user_input(
            "No prompts available. Add some with `quickprompts edit`.",
        ));
    }

    if let Some(category) = category {
        let matching = by_category(entries, category);
        if matching.is_empty() {
            return Err(QpError::user_input(format!(
                "No prompts in category '{}'",
                category
            )));
        }
        return write_group(out, category, &matching);
    }

    for category in categories(entries) {
        write_group(out, &category, &by_category(entries, &category))?;
    }
    let loose = uncategorized(entries);
    if !loose.is_empty() {
        write_group(out, UNCATEGORIZED_TITLE, &loose)?;
    }
    Ok(())
}

fn write_group(out: &mut impl Write, title: &str, entries: &[&PromptEntry]) -> QpResult<()> {
    writeln!(out, "{}", title.bold())?;
    for entry in entries {
        writeln!(out, "  {}  {}", entry.key, preview(&entry.value).dimmed())?;
    }
    writeln!(out)?;
    Ok(())
}
