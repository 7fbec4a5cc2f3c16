//! Command routing logic for CLI

use crate::app::AppContext;
use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::console::CliConsole;
use quickprompts_core::error::QpResult;
use std::process::ExitCode;
use tracing::debug;

/// Run the requested command and turn its outcome into an exit code
///
/// Failures are shown as notices and exit with status 1. A dismissed
/// picker is not a failure.
pub async fn route(cli: Cli) -> ExitCode {
    let console = CliConsole::new(cli.verbose);

    match dispatch(cli, &console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if console.report(&e) {
                ExitCode::FAILURE
            } else {
                debug!("Cancelled by user");
                ExitCode::SUCCESS
            }
        }
    }
}

async fn dispatch(cli: Cli, console: &CliConsole) -> QpResult<()> {
    let ctx = AppContext::open(cli.settings_dir.as_deref())?;

    match cli.command {
        Commands::Rewrite { document } => {
            commands::rewrite::execute(&ctx, &document, console).await
        }
        Commands::Run { prompt, document } => {
            commands::run::execute(&ctx, prompt.as_deref(), &document, console).await
        }
        Commands::Edit { stdio } => {
            if stdio {
                commands::edit::serve_stdio(&ctx)
            } else {
                commands::edit::interactive(&ctx, console)
            }
        }
        Commands::Model { name } => commands::model::execute(&ctx, name.as_deref(), console),
        Commands::Prompts { category } => commands::prompts::list(&ctx, category.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx, console),
        },
    }
}
