//! Model selection command

use super::prompt_error;
use crate::app::AppContext;
use crate::console::CliConsole;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use quickprompts_core::config::{KNOWN_MODELS, MODEL_SETTING};
use quickprompts_core::error::{QpError, QpResult};
use tracing::info;

const CUSTOM_MODEL_LABEL: &str = "Custom…";

/// Set the model from `name`, or from a picklist when omitted
pub fn execute(ctx: &AppContext, name: Option<&str>, console: &CliConsole) -> QpResult<()> {
    let model = match name {
        Some(name) => validate_model_name(name)?,
        None => pick_model(&ctx.config.model)?.ok_or(QpError::Cancelled)?,
    };

    ctx.settings.set(MODEL_SETTING, &model)?;
    info!(%model, "Model updated");
    console.success(&format!("Model set to {}", model));
    Ok(())
}

fn validate_model_name(name: &str) -> QpResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(QpError::user_input("Model name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Picklist entries: known models, current one marked, then the custom entry
fn model_items(current: &str) -> Vec<String> {
    KNOWN_MODELS
        .iter()
        .map(|model| {
            if *model == current {
                format!("{} (current)", model)
            } else {
                model.to_string()
            }
        })
        .chain(std::iter::once(CUSTOM_MODEL_LABEL.to_string()))
        .collect()
}

fn pick_model(current: &str) -> QpResult<Option<String>> {
    let theme = ColorfulTheme::default();
    let default = KNOWN_MODELS
        .iter()
        .position(|model| *model == current)
        .unwrap_or(KNOWN_MODELS.len());

    let selection = Select::with_theme(&theme)
        .with_prompt("Select a model")
        .items(&model_items(current))
        .default(default)
        .interact_opt()
        .map_err(prompt_error)?;

    match selection {
        None => Ok(None),
        Some(index) if index < KNOWN_MODELS.len() => Ok(Some(KNOWN_MODELS[index].to_string())),
        Some(_) => {
            let custom = Input::<String>::with_theme(&theme)
                .with_prompt("Model identifier")
                .with_initial_text(current)
                .interact_text()
                .map_err(prompt_error)?;
            validate_model_name(&custom).map(Some)
        }
    }
}
