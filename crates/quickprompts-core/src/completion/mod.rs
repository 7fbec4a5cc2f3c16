//! Completion client
//!
//! One outbound call per rewrite: the instruction goes in as the system turn,
//! the selected text as the user turn, and the trimmed reply comes back.
//! The client never retries; a retry is the user running the flow again.

mod backend;
mod client;
mod error_utils;
mod openai;

pub use backend::{CompletionBackend, CompletionRequest};
pub use client::CompletionClient;
pub use error_utils::sanitize_upstream_error;
pub use openai::OpenAiBackend;

#[cfg(test)]
pub use backend::MockCompletionBackend;
