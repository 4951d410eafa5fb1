//! Assistant catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigError;
use crate::domain::assistant::AssistantCatalog;

/// Where the assistant catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantsConfig {
    /// JSON document of the form `{ "assistants": [...] }`.
    /// Without it the catalog is empty.
    pub catalog_path: Option<PathBuf>,
}

impl AssistantsConfig {
    /// Read and parse the catalog once at startup.
    pub fn load_catalog(&self) -> Result<AssistantCatalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(AssistantCatalog::default());
        };

        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

        AssistantCatalog::from_json(&raw)
            .map_err(|e| ConfigError::CatalogLoad(format!("{}: {}", path.display(), e)))
    }
}
