//! OpenAI-compatible chat completions backend

use super::backend::{CompletionBackend, CompletionRequest};
use super::error_utils::sanitize_upstream_error;
use crate::error::{QpError, QpResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Backend speaking `POST {base_url}/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    base_url: String,
    http_client: Client,
}

impl OpenAiBackend {
    /// Create a backend for the given base URL (e.g. `https://api.openai.com/v1`)
    pub fn new(base_url: impl Into<String>) -> QpResult<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("quickprompts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QpError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, http_client))
    }

    /// Create a backend reusing an existing HTTP client
    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn request_body(request: &CompletionRequest) -> Value {
        json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": request.instruction},
                {"role": "user", "content": request.input},
            ],
        })
    }

    fn parse_response(body: &Value) -> QpResult<String> {
        let choice = body
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .ok_or_else(|| QpError::remote("Completion response contained no choices"))?;

        // A null or missing content is an empty completion, not an error
        Ok(choice
            .pointer("/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    #[instrument(skip_all, fields(model = %request.model), level = "debug")]
    async fn send(&self, request: &CompletionRequest) -> QpResult<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&request.api_key)
            .json(&Self::request_body(request))
            .send()
            .await
            .map_err(|e| QpError::remote(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QpError::remote_with_status(
                format!(
                    "API error (status {}): {}",
                    status,
                    sanitize_upstream_error(&error_text)
                ),
                status.as_u16(),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QpError::remote(format!("Failed to parse completion response: {}", e)))?;

        debug!(status = status.as_u16(), "Completion response received");
        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            instruction: "fix grammar".to_string(),
            input: "teh cat".to_string(),
            model: "gpt-4o".to_string(),
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = OpenAiBackend::request_body(&request());
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "fix grammar");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "teh cat");
    }

    #[test]
    fn test_parse_response_content() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "the cat"}}]});
        assert_eq!(OpenAiBackend::parse_response(&body).unwrap(), "the cat");
    }

    #[test]
    fn test_parse_response_null_content_is_empty() {
        let body = json!({"choices": [{"message": {"content": null}}]});
        assert_eq!(OpenAiBackend::parse_response(&body).unwrap(), "");
    }

    #[test]
    fn test_parse_response_without_choices() {
        let err = OpenAiBackend::parse_response(&json!({"choices": []})).unwrap_err();
        assert!(matches!(err, QpError::Remote { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let backend = OpenAiBackend::with_client("http://localhost:1/v1/", Client::new());
        assert_eq!(backend.base_url, "http://localhost:1/v1");
    }
}
