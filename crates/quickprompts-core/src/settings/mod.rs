//! Durable key-value settings area
//!
//! Two JSON documents live in the settings directory:
//!
//! - `settings.json`: user settings (`quickprompts.apiKey`, `quickprompts.model`, ...)
//! - `state.json`: extension state, including the persisted prompt catalog
//!
//! Keys are dot-notation paths, so every value is namespaced under
//! `quickprompts.` and the documents can be shared with other tools.

mod locations;
mod store;

pub use locations::{HOME_ENV, SettingsLocations};
pub use store::JsonStore;
