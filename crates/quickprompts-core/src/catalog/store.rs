//! Persisted catalog

use super::entry::PromptEntry;
use super::seed::{SeedOutcome, parse_seed_document, read_seed_document};
use crate::error::QpResult;
use crate::settings::JsonStore;
use std::path::Path;
use tracing::{debug, info, warn};

/// Key of the catalog inside the state document
pub const CATALOG_KEY: &str = "quickprompts.prompts";

/// The catalog as persisted in the state document
///
/// There is no per-entry update: every write replaces the whole list.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    state: JsonStore,
}

impl CatalogStore {
    /// Create a catalog backed by the given state document
    pub fn new(state: JsonStore) -> Self {
        Self { state }
    }

    /// The persisted list, or an empty list if none exists
    pub fn load(&self) -> QpResult<Vec<PromptEntry>> {
        Ok(self.state.get(CATALOG_KEY)?.unwrap_or_default())
    }

    /// Whether any catalog record exists, even an empty one
    pub fn has_data(&self) -> QpResult<bool> {
        self.state.contains(CATALOG_KEY)
    }

    /// Overwrite the whole persisted list
    pub fn replace_all(&self, entries: &[PromptEntry]) -> QpResult<()> {
        self.state.set(CATALOG_KEY, &entries)?;
        debug!(count = entries.len(), "Replaced prompt catalog");
        Ok(())
    }

    /// Seed the catalog from `document` unless it already holds data
    pub fn seed_if_empty(&self, document: &str) -> QpResult<SeedOutcome> {
        if self.has_data()? {
            return Ok(SeedOutcome::Unchanged);
        }

        let entries = parse_seed_document(document);
        if entries.is_empty() {
            warn!("Seed document contained no prompts, catalog left empty");
            return Ok(SeedOutcome::Unchanged);
        }

        self.replace_all(&entries)?;
        info!(count = entries.len(), "Seeded prompt catalog");
        Ok(SeedOutcome::Seeded(entries.len()))
    }

    /// Seed from an override file or the bundled document
    ///
    /// An unreadable document is logged and leaves the catalog untouched.
    pub fn seed_from(&self, seed_file: Option<&Path>) -> QpResult<SeedOutcome> {
        if self.has_data()? {
            return Ok(SeedOutcome::Unchanged);
        }

        match read_seed_document(seed_file) {
            Ok(document) => self.seed_if_empty(&document),
            Err(e) => {
                warn!("Skipping catalog seed: {}", e);
                Ok(SeedOutcome::Unchanged)
            }
        }
    }
}
