//! Upstream error sanitization

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static SECRET_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsk-[A-Za-z0-9_\-*]{8,}").expect("valid secret key regex"));

/// Reduce an upstream error body to a short, secret-free message
///
/// OpenAI-style bodies (`{"error": {"message": ...}}`) yield just the message.
pub fn sanitize_upstream_error(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    let text = match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => extract_message(&json).unwrap_or_else(|| json.to_string()),
        Err(_) => trimmed.to_string(),
    };

    truncate_with_suffix(redact_inline_secrets(&text))
}

fn extract_message(json: &Value) -> Option<String> {
    let error = json.get("error")?;
    match error {
        Value::String(s) => Some(s.clone()),
        other => other
            .get("message")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted_bearer = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    SECRET_KEY_RE
        .replace_all(&redacted_bearer, REDACTED)
        .into_owned()
}

fn truncate_with_suffix(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}
