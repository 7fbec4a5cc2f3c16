//! Transport seam for the completion call

use crate::error::QpResult;
use async_trait::async_trait;

/// A fully resolved completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub instruction: String,
    pub input: String,
    pub model: String,
    pub api_key: String,
}

/// Sends one completion request and returns the raw reply text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Perform the call. Every failure must be a `QpError::Remote`.
    async fn send(&self, request: &CompletionRequest) -> QpResult<String>;
}
