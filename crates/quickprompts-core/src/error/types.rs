//! Core error type for quickprompts

use thiserror::Error;

/// Result type alias for quickprompts operations
pub type QpResult<T> = Result<T, QpError>;

/// Main error type for quickprompts
#[derive(Error, Debug, Clone)]
pub enum QpError {
    /// Missing document, empty selection, no prompts, unknown prompt
    #[error("{message}")]
    UserInput { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        setting: Option<String>,
    },

    /// No API key was available for the completion call
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// The completion service call failed
    #[error("Completion failed: {message}")]
    Remote {
        message: String,
        status_code: Option<u16>,
    },

    /// Editor surface refused to save
    #[error("{message}")]
    Validation {
        message: String,
        invalid_rows: usize,
    },

    /// Settings document errors
    #[error("Settings error: {message}")]
    Settings {
        message: String,
        path: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// The user dismissed a picker
    #[error("Cancelled")]
    Cancelled,

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl QpError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserInput { .. } => "QP_USER_INPUT",
            Self::Config { .. } => "QP_CONFIG",
            Self::Auth { .. } => "QP_AUTH",
            Self::Remote { .. } => "QP_REMOTE",
            Self::Validation { .. } => "QP_VALIDATION",
            Self::Settings { .. } => "QP_SETTINGS",
            Self::Io { .. } => "QP_IO",
            Self::Json { .. } => "QP_JSON",
            Self::Cancelled => "QP_CANCELLED",
            Self::Other { .. } => "QP_OTHER",
        }
    }

    /// Whether the error came from the user dismissing a picker
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
