//! Settings directory discovery

use std::path::{Path, PathBuf};

/// Environment variable overriding the settings directory
pub const HOME_ENV: &str = "QUICKPROMPTS_HOME";

/// Locations of the settings and state documents
#[derive(Debug, Clone)]
pub struct SettingsLocations {
    /// User settings (`<dir>/settings.json`)
    pub settings: PathBuf,
    /// Persisted state (`<dir>/state.json`)
    pub state: PathBuf,
}

impl SettingsLocations {
    /// Locations inside a specific directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            settings: dir.join("settings.json"),
            state: dir.join("state.json"),
        }
    }

    /// Default per-user locations (`~/.config/quickprompts` on Linux)
    pub fn with_defaults() -> Self {
        Self::in_dir(Self::default_dir())
    }

    /// The per-user settings directory
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quickprompts")
    }
}
