//! quickprompts command-line application
//!
//! Rewrites selected text with stored prompts.
//!
//! # Commands
//!
//! - `quickprompts rewrite`: apply the default rewrite instruction
//! - `quickprompts run`: pick a category and prompt, then apply it
//! - `quickprompts edit`: edit the prompt catalog (`--stdio` for JSON lines)
//! - `quickprompts model`: choose the model identifier
//! - `quickprompts prompts`: list the catalog
//! - `quickprompts config show`: show the resolved configuration
//!
//! The document is a file (`--file`, optionally `--lines A-B`) or piped
//! stdin, in which case the result is written to stdout.

mod app;
mod args;
mod commands;
mod console;
mod document_io;
mod picker;
mod router;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    router::route(cli).await
}

/// Log to stderr so piped results on stdout stay clean
///
/// `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
