//! JSON document with dot-notation fields

use crate::error::{QpError, QpResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// A JSON document on disk addressed by dot-notation paths
///
/// Every write loads the current document, applies the change and replaces
/// the file through a temp file in the same directory, so readers never see
/// a half-written document. Concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get a raw field value
    ///
    /// Returns None if the path doesn't exist
    pub fn get_field(&self, path: &str) -> QpResult<Option<Value>> {
        let root = self.load_document()?;
        Ok(get_nested_value(&root, path).cloned())
    }

    /// Get a field and deserialize it
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> QpResult<Option<T>> {
        match self.get_field(path)? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                QpError::settings_at(
                    format!("Invalid value for '{}': {}", path, e),
                    self.path.display().to_string(),
                )
            }),
            None => Ok(None),
        }
    }

    /// Get a string field, treating blank strings as absent
    pub fn get_string(&self, path: &str) -> QpResult<Option<String>> {
        Ok(self
            .get::<String>(path)?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    /// Whether a field is present, regardless of its value
    pub fn contains(&self, path: &str) -> QpResult<bool> {
        Ok(self.get_field(path)?.is_some())
    }

    /// Set a field using dot-notation path
    pub fn set_field(&self, path: &str, value: Value) -> QpResult<()> {
        let mut root = self.load_document()?;
        set_nested_value(&mut root, path, value);
        self.save_document(&root)
    }

    /// Serialize and set a field
    pub fn set<T: Serialize>(&self, path: &str, value: &T) -> QpResult<()> {
        let value = serde_json::to_value(value)?;
        self.set_field(path, value)
    }

    /// Remove a field using dot-notation path
    pub fn remove_field(&self, path: &str) -> QpResult<()> {
        let mut root = self.load_document()?;
        remove_nested_value(&mut root, path);
        self.save_document(&root)
    }

    /// Load the document, returning an empty object if it doesn't exist
    fn load_document(&self) -> QpResult<Value> {
        if !self.path.exists() {
            return Ok(Value::Object(Map::new()));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            QpError::io_at(
                format!("Failed to read settings: {}", e),
                self.path.display().to_string(),
            )
        })?;

        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&content).map_err(|e| {
            QpError::settings_at(
                format!("Failed to parse settings: {}", e),
                self.path.display().to_string(),
            )
        })
    }

    /// Replace the document on disk, creating parent directories if needed
    fn save_document(&self, value: &Value) -> QpResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| {
            QpError::io_at(
                format!("Failed to create directory: {}", e),
                parent.display().to_string(),
            )
        })?;

        let content = serde_json::to_string_pretty(value)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)?;

        debug!("Saved settings document to {}", self.path.display());
        Ok(())
    }
}

/// Set a nested value in a JSON object using dot-notation path
fn set_nested_value(root: &mut Value, path: &str, value: Value) {
    let mut parts = path.split('.').peekable();
    let mut current = root;

    while let Some(part) = parts.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return;
        };

        if parts.peek().is_none() {
            map.insert(part.to_string(), value);
            return;
        }

        let next = map
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !next.is_object() {
            *next = Value::Object(Map::new());
        }
        current = next;
    }
}

/// Get a nested value from a JSON object using dot-notation path
fn get_nested_value<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |current, part| current.get(part))
}

/// Remove a nested value from a JSON object using dot-notation path
fn remove_nested_value(root: &mut Value, path: &str) {
    let (parent_path, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (Some(parent), key),
        None => (None, path),
    };

    let parent = match parent_path {
        Some(parent_path) => {
            let mut current = &mut *root;
            for part in parent_path.split('.') {
                match current.get_mut(part) {
                    Some(next) => current = next,
                    None => return,
                }
            }
            current
        }
        None => root,
    };

    if let Some(obj) = parent.as_object_mut() {
        obj.remove(key);
    }
}
