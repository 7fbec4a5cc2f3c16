//! Configuration resolution from settings and environment

use crate::error::QpResult;
use crate::settings::JsonStore;
use std::path::PathBuf;

/// Setting holding the completion API key
pub const API_KEY_SETTING: &str = "quickprompts.apiKey";
/// Setting holding the model identifier
pub const MODEL_SETTING: &str = "quickprompts.model";
/// Setting holding the completion endpoint base URL
pub const BASE_URL_SETTING: &str = "quickprompts.baseUrl";
/// Setting holding the instruction used by the default rewrite
pub const DEFAULT_PROMPT_SETTING: &str = "quickprompts.defaultPrompt";
/// Setting pointing at an override seed document
pub const SEED_FILE_SETTING: &str = "quickprompts.seedFile";

/// Environment fallback for the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REWRITE_PROMPT: &str = "Rewrite the following text to improve its clarity, \
grammar and flow while preserving its meaning. Return only the rewritten text.";

/// Models offered by the model picker
pub const KNOWN_MODELS: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4.1",
    "gpt-4.1-mini",
    "o3-mini",
];

/// Configuration resolved once per command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QpConfig {
    /// API key, absent when neither the setting nor the env var is set
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub default_prompt: String,
    pub seed_file: Option<PathBuf>,
}

impl Default for QpConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_prompt: DEFAULT_REWRITE_PROMPT.to_string(),
            seed_file: None,
        }
    }
}

impl QpConfig {
    /// Resolve from user settings and the process environment
    pub fn resolve(settings: &JsonStore) -> QpResult<Self> {
        Self::resolve_with_env(settings, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with_env<F>(settings: &JsonStore, env: F) -> QpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = match settings.get_string(API_KEY_SETTING)? {
            Some(key) => Some(key),
            None => env(API_KEY_ENV)
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
        };

        Ok(Self {
            api_key,
            model: settings
                .get_string(MODEL_SETTING)?
                .unwrap_or(defaults.model),
            base_url: settings
                .get_string(BASE_URL_SETTING)?
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            default_prompt: settings
                .get_string(DEFAULT_PROMPT_SETTING)?
                .unwrap_or(defaults.default_prompt),
            seed_file: settings.get_string(SEED_FILE_SETTING)?.map(PathBuf::from),
        })
    }

    /// Where the API key came from, for display
    pub fn api_key_source(settings: &JsonStore) -> QpResult<&'static str> {
        if settings.get_string(API_KEY_SETTING)?.is_some() {
            Ok("settings")
        } else if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty()) {
            Ok("environment")
        } else {
            Ok("not set")
        }
    }
}

/// Mask a key for display, keeping only a short prefix and suffix
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_when_settings_empty() {
        let dir = tempdir().unwrap();
        let settings = JsonStore::new(dir.path().join("settings.json"));
        let config = QpConfig::resolve_with_env(&settings, no_env).unwrap();
        assert_eq!(config, QpConfig::default());
        assert_eq!(config.model, "gpt-4o");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_settings_key_wins_over_env() {
        let dir = tempdir().unwrap();
        let settings = JsonStore::new(dir.path().join("settings.json"));
        settings
            .set_field(API_KEY_SETTING, json!("sk-from-settings"))
            .unwrap();
        let config =
            QpConfig::resolve_with_env(&settings, |_| Some("sk-from-env".to_string())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-from-settings"));
    }

    #[test]
    fn test_env_fallback_for_key() {
        let dir = tempdir().unwrap();
        let settings = JsonStore::new(dir.path().join("settings.json"));
        let config = QpConfig::resolve_with_env(&settings, |name| {
            (name == API_KEY_ENV).then(|| "sk-from-env".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
    }

    #[test]
    fn test_blank_env_key_is_absent() {
        let dir = tempdir().unwrap();
        let settings = JsonStore::new(dir.path().join("settings.json"));
        let config = QpConfig::resolve_with_env(&settings, |_| Some("  ".to_string())).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_model_and_base_url_from_settings() {
        let dir = tempdir().unwrap();
        let settings = JsonStore::new(dir.path().join("settings.json"));
        settings.set_field(MODEL_SETTING, json!("gpt-4.1")).unwrap();
        settings
            .set_field(BASE_URL_SETTING, json!("http://localhost:8080/v1/"))
            .unwrap();
        let config = QpConfig::resolve_with_env(&settings, no_env).unwrap();
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("short"), "*****");
        assert_eq!(mask_key("sk-abcdefghijklmnop"), "sk-...mnop");
    }
}
