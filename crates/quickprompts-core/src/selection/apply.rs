//! Apply step: send the selection through the completion client

use crate::completion::CompletionClient;
use crate::config::{API_KEY_ENV, API_KEY_SETTING, QpConfig};
use crate::document::EditorDocument;
use crate::error::{QpError, QpResult};
use tracing::{error, info};

/// Progress indicator shown while the completion call is in flight
pub trait Progress {
    fn begin(&self, message: &str);
    fn end(&self);
}

/// Progress that shows nothing
pub struct NoProgress;

impl Progress for NoProgress {
    fn begin(&self, _message: &str) {}
    fn end(&self) {}
}

/// What the apply step changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub input_chars: usize,
    pub output_chars: usize,
}

/// Rewrite the document's selection with `instruction`
///
/// Preconditions are checked in order before any network call: an active
/// document, a non-empty selection, an API key. On a remote failure the
/// document is left untouched.
pub async fn apply_instruction(
    document: Option<&mut dyn EditorDocument>,
    instruction: &str,
    client: &CompletionClient,
    config: &QpConfig,
    progress: &dyn Progress,
) -> QpResult<ApplyOutcome> {
    let document = document.ok_or_else(|| QpError::user_input("No active document"))?;

    let input = document
        .selected_text()
        .map(str::to_string)
        .ok_or_else(|| QpError::user_input("No text selected"))?;

    if config.api_key.is_none() {
        return Err(QpError::config_for_setting(
            format!(
                "No API key configured. Set {} or the {} environment variable",
                API_KEY_SETTING, API_KEY_ENV
            ),
            API_KEY_SETTING,
        ));
    }

    progress.begin(&format!("Rewriting with {}...", config.model));
    let result = client
        .complete(
            instruction,
            &input,
            &config.model,
            config.api_key.as_deref(),
        )
        .await;
    progress.end();

    let output = result.inspect_err(|e| error!("Completion failed: {}", e))?;

    document.replace_selection(&output)?;

    let outcome = ApplyOutcome {
        input_chars: input.chars().count(),
        output_chars: output.chars().count(),
    };
    info!(
        input_chars = outcome.input_chars,
        output_chars = outcome.output_chars,
        "Selection rewritten"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockCompletionBackend;
    use crate::document::TextBuffer;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingProgress {
        begun: Cell<u32>,
        ended: Cell<u32>,
    }

    impl Progress for CountingProgress {
        fn begin(&self, _message: &str) {
            self.begun.set(self.begun.get() + 1);
        }
        fn end(&self) {
            self.ended.set(self.ended.get() + 1);
        }
    }

    fn config_with_key() -> QpConfig {
        QpConfig {
            api_key: Some("sk-test".to_string()),
            ..QpConfig::default()
        }
    }

    fn never_called() -> CompletionClient {
        let mut backend = MockCompletionBackend::new();
        backend.expect_send().never();
        CompletionClient::new(backend)
    }

    #[tokio::test]
    async fn test_no_document() {
        let err = apply_instruction(None, "fix", &never_called(), &config_with_key(), &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, QpError::UserInput { .. }));
        assert!(err.to_string().contains("No active document"));
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let mut doc = TextBuffer::new("some text");
        let err = apply_instruction(
            Some(&mut doc),
            "fix",
            &never_called(),
            &config_with_key(),
            &NoProgress,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("No text selected"));
        assert_eq!(doc.text(), "some text");
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let mut doc = TextBuffer::select_all("teh cat");
        let progress = CountingProgress::default();
        let err = apply_instruction(
            Some(&mut doc),
            "fix",
            &never_called(),
            &QpConfig::default(),
            &progress,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, QpError::Config { setting: Some(ref s), .. } if s == API_KEY_SETTING));
        assert_eq!(progress.begun.get(), 0);
    }

    #[tokio::test]
    async fn test_success_replaces_selection() {
        let mut backend = MockCompletionBackend::new();
        backend
            .expect_send()
            .withf(|req| req.instruction == "fix grammar" && req.input == "teh cat")
            .times(1)
            .returning(|_| Ok(" the cat\n".to_string()));
        let client = CompletionClient::new(backend);

        let mut doc = TextBuffer::with_selection("I saw teh cat.", 6..13).unwrap();
        let progress = CountingProgress::default();
        let outcome = apply_instruction(
            Some(&mut doc),
            "fix grammar",
            &client,
            &config_with_key(),
            &progress,
        )
        .await
        .unwrap();

        assert_eq!(doc.text(), "I saw the cat.");
        assert_eq!(outcome, ApplyOutcome { input_chars: 7, output_chars: 7 });
        assert_eq!((progress.begun.get(), progress.ended.get()), (1, 1));
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_document_untouched() {
        let mut backend = MockCompletionBackend::new();
        backend
            .expect_send()
            .times(1)
            .returning(|_| Err(QpError::remote_with_status("quota exceeded", 429)));
        let client = CompletionClient::new(backend);

        let mut doc = TextBuffer::select_all("original");
        let progress = CountingProgress::default();
        let err = apply_instruction(
            Some(&mut doc),
            "fix",
            &client,
            &config_with_key(),
            &progress,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(doc.text(), "original");
        assert_eq!(progress.ended.get(), 1);
    }

    #[tokio::test]
    async fn test_empty_completion_clears_selection() {
        let mut backend = MockCompletionBackend::new();
        backend.expect_send().returning(|_| Ok(String::new()));
        let client = CompletionClient::new(backend);

        let mut doc = TextBuffer::with_selection("keep DROP keep", 5..10).unwrap();
        apply_instruction(Some(&mut doc), "delete", &client, &config_with_key(), &NoProgress)
            .await
            .unwrap();
        assert_eq!(doc.text(), "keep keep");
    }
}
