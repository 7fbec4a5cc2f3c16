//! Completion client contract

use super::backend::{CompletionBackend, CompletionRequest};
use super::openai::OpenAiBackend;
use crate::error::{QpError, QpResult};
use tracing::{debug, instrument};

/// Wraps a backend with the key check and output normalization
pub struct CompletionClient {
    backend: Box<dyn CompletionBackend>,
}

impl CompletionClient {
    /// Create a client over any backend
    pub fn new(backend: impl CompletionBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a client for an OpenAI-compatible endpoint
    pub fn openai(base_url: impl Into<String>) -> QpResult<Self> {
        Ok(Self::new(OpenAiBackend::new(base_url)?))
    }

    /// Rewrite `input` following `instruction`
    ///
    /// Fails with `Auth` before any network activity when no key is
    /// available. Any other failure is `Remote`. An empty reply is a valid
    /// result.
    #[instrument(skip_all, fields(model = %model, input_chars = input.chars().count()))]
    pub async fn complete(
        &self,
        instruction: &str,
        input: &str,
        model: &str,
        api_key: Option<&str>,
    ) -> QpResult<String> {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| QpError::auth("No API key configured"))?;

        let request = CompletionRequest {
            instruction: instruction.to_string(),
            input: input.to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        };

        let output = match self.backend.send(&request).await {
            Ok(output) => output,
            Err(e @ QpError::Remote { .. }) => return Err(e),
            Err(e) => return Err(QpError::remote(e.to_string())),
        };

        let output = output.trim().to_string();
        debug!(output_chars = output.chars().count(), "Completion received");
        Ok(output)
    }
}
