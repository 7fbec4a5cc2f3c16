//! Editor panel message protocol
//!
//! Inbound: `{"command": "save", "prompts": [{"key", "value", "category"}, ...]}`
//!
//! Outbound: `{"event": "saved", "count": N}` or `{"event": "error", "message": "..."}`.
//! Transports may also send `{"event": "loaded", "prompts": [...]}` when the
//! panel opens so it can render the current catalog.

use crate::catalog::{CatalogStore, PromptEntry};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Message sent by the editor panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum EditorMessage {
    /// Replace the whole catalog with this list
    Save { prompts: Vec<PromptEntry> },
}

/// Reply sent back to the editor panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum EditorReply {
    /// Current catalog, sent when the panel opens
    Loaded { prompts: Vec<PromptEntry> },
    Saved { count: usize },
    Error { message: String },
}

/// Persist an inbound message and build the acknowledgement
pub fn handle_message(store: &CatalogStore, message: EditorMessage) -> EditorReply {
    match message {
        EditorMessage::Save { prompts } => match store.replace_all(&prompts) {
            Ok(()) => {
                info!(count = prompts.len(), "Prompts saved from editor");
                EditorReply::Saved {
                    count: prompts.len(),
                }
            }
            Err(e) => {
                error!("Failed to save prompts: {}", e);
                EditorReply::Error {
                    message: e.to_string(),
                }
            }
        },
    }
}

/// Snapshot of the catalog for a freshly opened panel
pub fn loaded_reply(store: &CatalogStore) -> EditorReply {
    match store.load() {
        Ok(prompts) => EditorReply::Loaded { prompts },
        Err(e) => EditorReply::Error {
            message: e.to_string(),
        },
    }
}

/// Parse and handle one raw JSON message
pub fn handle_raw_message(store: &CatalogStore, raw: &str) -> EditorReply {
    match serde_json::from_str::<EditorMessage>(raw) {
        Ok(message) => handle_message(store, message),
        Err(e) => EditorReply::Error {
            message: format!("Invalid editor message: {}", e),
        },
    }
}
