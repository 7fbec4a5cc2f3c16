//! CLI console utilities
//!
//! Notices go to stderr; stdout is reserved for rewritten text and listings.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use quickprompts_core::error::{QpError, UserNotice};
use quickprompts_core::selection::Progress;
use std::time::Duration;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        eprintln!();
        eprintln!("{}", title.bold().underline());
        eprintln!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Show a failed operation as a transient notice
    ///
    /// Informational notices (nothing to do) are shown as warnings.
    pub fn notice(&self, notice: &UserNotice) {
        if notice.category.is_informational() {
            self.warn(&notice.format_display());
        } else {
            self.error(&notice.format_display());
        }
    }

    /// Report an error; returns false when there was nothing to report
    pub fn report(&self, error: &QpError) -> bool {
        if error.is_cancelled() {
            return false;
        }
        self.notice(&error.user_notice());
        true
    }
}

/// Spinner on stderr while a completion is in flight
///
/// Hidden automatically when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl Progress for Spinner {
    fn begin(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn end(&self) {
        self.bar.finish_and_clear();
    }
}
