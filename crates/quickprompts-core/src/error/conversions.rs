//! From trait implementations for QpError conversions

use super::types::QpError;

impl From<std::io::Error> for QpError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for QpError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

// Any transport failure of the completion call is a remote error
impl From<reqwest::Error> for QpError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::remote_with_status(error.to_string(), status.as_u16()),
            None => Self::remote(error.to_string()),
        }
    }
}

impl From<tempfile::PersistError> for QpError {
    fn from(error: tempfile::PersistError) -> Self {
        let path = error.file.path().display().to_string();
        Self::io_at(error.error.to_string(), path)
    }
}
