//! Configuration display command

use crate::app::AppContext;
use crate::console::CliConsole;
use colored::*;
use quickprompts_core::QpConfig;
use quickprompts_core::config::{API_KEY_ENV, API_KEY_SETTING, mask_key};
use quickprompts_core::error::QpResult;
use quickprompts_core::selection::preview;

/// Show the resolved configuration
pub fn show(ctx: &AppContext, console: &CliConsole) -> QpResult<()> {
    let config = &ctx.config;

    println!("{}", "Configuration".bold().underline());
    println!("  Settings file: {}", ctx.locations.settings.display());
    println!("  State file:    {}", ctx.locations.state.display());
    println!();

    let api_key = match &config.api_key {
        Some(key) => format!(
            "{} (from {})",
            mask_key(key),
            QpConfig::api_key_source(&ctx.settings)?
        ),
        None => "not set".red().to_string(),
    };
    println!("  {:<15} {}", "API key:".bold(), api_key);
    println!("  {:<15} {}", "Model:".bold(), config.model.cyan());
    println!("  {:<15} {}", "Base URL:".bold(), config.base_url);
    println!(
        "  {:<15} {}",
        "Default prompt:".bold(),
        preview(&config.default_prompt).dimmed()
    );
    let seed = config
        .seed_file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled defaults".to_string());
    println!("  {:<15} {}", "Seed file:".bold(), seed);

    if config.api_key.is_none() {
        console.warn(&format!(
            "No API key configured. Set '{}' or the {} environment variable",
            API_KEY_SETTING, API_KEY_ENV
        ));
    }
    Ok(())
}
