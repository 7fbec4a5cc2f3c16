//! quickprompts core library
//!
//! Rewrites selected text with stored prompts. The pieces, leaves first:
//!
//! - [`settings`]: namespaced JSON key-value documents on disk
//! - [`config`]: API key, model and endpoint resolution
//! - [`catalog`]: the persisted prompt list, its seed document and queries
//! - [`completion`]: the single outbound completion call
//! - [`document`]: the editor document and selection seam
//! - [`selection`]: category → prompt → apply flow
//! - [`editor`]: the catalog editing form and its message protocol

pub mod catalog;
pub mod completion;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod selection;
pub mod settings;

pub use catalog::{CatalogStore, PromptEntry, SeedOutcome};
pub use completion::{CompletionBackend, CompletionClient, CompletionRequest, OpenAiBackend};
pub use config::QpConfig;
pub use document::{EditorDocument, LineRange, TextBuffer};
pub use editor::{CatalogEditor, EditorMessage, EditorReply};
pub use error::{QpError, QpResult};
pub use selection::{Picker, PromptItem, SelectionFlow, SelectionState};
pub use settings::{JsonStore, SettingsLocations};
