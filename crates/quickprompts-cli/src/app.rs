//! Per-invocation application context

use quickprompts_core::catalog::SeedOutcome;
use quickprompts_core::error::QpResult;
use quickprompts_core::{
    CatalogStore, CompletionClient, JsonStore, PromptEntry, QpConfig, SettingsLocations,
};
use std::path::Path;
use tracing::{debug, info};

/// Settings, catalog and resolved configuration for one command
pub struct AppContext {
    pub locations: SettingsLocations,
    pub settings: JsonStore,
    pub catalog: CatalogStore,
    pub config: QpConfig,
}

impl AppContext {
    /// Open the stores and resolve configuration once
    pub fn open(settings_dir: Option<&Path>) -> QpResult<Self> {
        let locations = match settings_dir {
            Some(dir) => SettingsLocations::in_dir(dir),
            None => SettingsLocations::with_defaults(),
        };
        debug!(
            settings = %locations.settings.display(),
            state = %locations.state.display(),
            "Opening settings"
        );

        let settings = JsonStore::new(locations.settings.clone());
        let config = QpConfig::resolve(&settings)?;
        let catalog = CatalogStore::new(JsonStore::new(locations.state.clone()));

        Ok(Self {
            locations,
            settings,
            catalog,
            config,
        })
    }

    /// Seed the catalog if this is the first activation, then load it
    pub fn activate_catalog(&self) -> QpResult<Vec<PromptEntry>> {
        match self.catalog.seed_from(self.config.seed_file.as_deref())? {
            SeedOutcome::Seeded(count) => info!(count, "Catalog seeded with default prompts"),
            SeedOutcome::Unchanged => debug!("Catalog already initialized"),
        }
        self.catalog.load()
    }

    pub fn completion_client(&self) -> QpResult<CompletionClient> {
        CompletionClient::openai(self.config.base_url.as_str())
    }
}
