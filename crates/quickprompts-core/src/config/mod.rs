//! Resolved runtime configuration
//!
//! Values come from the user settings document, with the API key falling back
//! to the process environment.

mod resolved;

pub use resolved::{
    API_KEY_ENV, API_KEY_SETTING, BASE_URL_SETTING, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_PROMPT_SETTING, DEFAULT_REWRITE_PROMPT, KNOWN_MODELS, MODEL_SETTING, QpConfig,
    SEED_FILE_SETTING, mask_key,
};
