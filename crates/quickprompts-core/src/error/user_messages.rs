//! User-facing notices for errors
//!
//! Every failure is surfaced as a short transient notice. The category picks
//! the notice severity; the text is what the user sees.

use super::types::QpError;

/// Error category for user-facing notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No document, empty selection, no prompts
    UserInput,
    /// Missing or invalid settings, including the API key
    Configuration,
    /// The completion service failed
    Remote,
    /// Editor save refused
    Validation,
    /// Settings or catalog storage failed
    Storage,
    /// User dismissed a picker
    Cancellation,
    /// Anything else
    Internal,
}

impl ErrorCategory {
    /// Get a user-friendly category name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UserInput => "Nothing to do",
            Self::Configuration => "Configuration Error",
            Self::Remote => "Completion Error",
            Self::Validation => "Invalid Prompts",
            Self::Storage => "Storage Error",
            Self::Cancellation => "Cancelled",
            Self::Internal => "Internal Error",
        }
    }

    /// Whether the notice is informational rather than an error
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::UserInput | Self::Cancellation)
    }
}

/// A transient notice describing a failed operation
#[derive(Debug, Clone)]
pub struct UserNotice {
    pub category: ErrorCategory,
    pub message: String,
    pub hint: Option<String>,
}

impl UserNotice {
    /// Format the notice on a single line, followed by the hint if any
    pub fn format_display(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{}: {} ({})", self.category.display_name(), self.message, hint),
            None => format!("{}: {}", self.category.display_name(), self.message),
        }
    }
}

impl QpError {
    /// Category of the notice this error should produce
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UserInput { .. } => ErrorCategory::UserInput,
            // A missing key is reported as a configuration problem
            Self::Config { .. } | Self::Auth { .. } => ErrorCategory::Configuration,
            Self::Remote { .. } => ErrorCategory::Remote,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Settings { .. } | Self::Io { .. } | Self::Json { .. } => ErrorCategory::Storage,
            Self::Cancelled => ErrorCategory::Cancellation,
            Self::Other { .. } => ErrorCategory::Internal,
        }
    }

    /// Build the notice shown to the user
    pub fn user_notice(&self) -> UserNotice {
        let hint = match self {
            Self::Config {
                setting: Some(setting),
                ..
            } => Some(format!("set '{}'", setting)),
            Self::Auth { .. } => Some(format!(
                "set '{}' or the {} environment variable",
                crate::config::API_KEY_SETTING,
                crate::config::API_KEY_ENV
            )),
            Self::Remote {
                status_code: Some(401),
                ..
            } => Some("check that your API key is valid".to_string()),
            Self::Remote {
                status_code: Some(429),
                ..
            } => Some("rate limited or out of quota, try again later".to_string()),
            Self::Settings { path: Some(p), .. } | Self::Io { path: Some(p), .. } => {
                Some(p.clone())
            }
            _ => None,
        };

        let message = match self {
            Self::UserInput { message } | Self::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };

        UserNotice {
            category: self.category(),
            message,
            hint,
        }
    }
}
