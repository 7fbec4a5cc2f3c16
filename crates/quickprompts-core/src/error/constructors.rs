//! Constructor methods for QpError

use super::types::QpError;

impl QpError {
    /// Create a new user input error
    pub fn user_input(message: impl Into<String>) -> Self {
        Self::UserInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            setting: None,
        }
    }

    /// Create a configuration error naming the offending setting
    pub fn config_for_setting(message: impl Into<String>, setting: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            setting: Some(setting.into()),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a remote error with the upstream HTTP status
    pub fn remote_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Remote {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>, invalid_rows: usize) -> Self {
        Self::Validation {
            message: message.into(),
            invalid_rows,
        }
    }

    /// Create a new settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
            path: None,
        }
    }

    /// Create a settings error for a specific file
    pub fn settings_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error for a specific path
    pub fn io_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
