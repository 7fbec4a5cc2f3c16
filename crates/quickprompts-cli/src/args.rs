//! CLI argument definitions using clap
//!
//! - quickprompts rewrite --file notes.md --lines 3-5
//! - cat draft.txt | quickprompts run --prompt "Fix Grammar"
//! - quickprompts edit
//! - quickprompts model gpt-4o-mini

use clap::{Args, Parser, Subcommand};
use quickprompts_core::LineRange;
use quickprompts_core::settings::HOME_ENV;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quickprompts")]
#[command(about = "Rewrite selected text with stored LLM prompts")]
#[command(
    long_about = r#"Rewrite selected text with stored LLM prompts

USAGE:
  quickprompts rewrite --file notes.md          # Default rewrite of a whole file
  quickprompts run --file notes.md --lines 3-5  # Pick a prompt, rewrite lines 3-5
  pbpaste | quickprompts run                    # Rewrite piped text to stdout

CATALOG:
  quickprompts edit                             # Edit prompts interactively
  quickprompts prompts                          # List prompts

SETTINGS:
  quickprompts model                            # Choose the model
  quickprompts config show                      # Show resolved configuration"#
)]
#[command(version)]
pub struct Cli {
    /// Directory holding settings.json and state.json
    #[arg(long, global = true, env = HOME_ENV, value_name = "DIR")]
    pub settings_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite the selection with the default instruction
    Rewrite {
        #[command(flatten)]
        document: DocumentArgs,
    },

    /// Choose a prompt from the catalog and rewrite the selection with it
    Run {
        /// Use this prompt instead of picking one
        #[arg(long, short, value_name = "KEY")]
        prompt: Option<String>,

        #[command(flatten)]
        document: DocumentArgs,
    },

    /// Edit the prompt catalog
    Edit {
        /// Speak the editor message protocol as JSON lines on stdin/stdout
        #[arg(long)]
        stdio: bool,
    },

    /// Set the model used for completions
    Model {
        /// Model identifier; omit to pick from a list
        name: Option<String>,
    },

    /// List the prompt catalog
    Prompts {
        /// Only list prompts in this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Display the resolved configuration with the API key masked
    Show,
}

/// Where the document and its selection come from
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// File to rewrite in place (reads stdin when omitted)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Select only these lines, e.g. `7` or `3-5` (whole document otherwise)
    #[arg(long, short, value_name = "A-B")]
    pub lines: Option<LineRange>,
}
