use std::path::Path;

use hanzi_config::dictionary::DictionaryConfig;
use hanzi_core::{FallbackTable, LoadError};

const EMBEDDED_FALLBACK: &str = include_str!("../data/fallback.json");

pub struct FallbackLoader;

impl FallbackLoader {
    /// Load the bundled fallback table
    pub fn load_embedded() -> Result<FallbackTable, LoadError> {
        tracing::info!("Loading embedded fallback table...");
        let table = FallbackTable::from_json(EMBEDDED_FALLBACK)?;
        tracing::info!("Loaded {} fallback records", table.len());
        Ok(table)
    }

    /// Load a fallback table from file path
    pub fn load_from_file(path: &Path) -> Result<FallbackTable, LoadError> {
        tracing::info!("Loading fallback table from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let table = FallbackTable::from_json(&json)?;
        tracing::info!("Loaded {} fallback records from file", table.len());
        Ok(table)
    }

    /// Configured fallback file, else the bundled table
    pub fn from_config(config: &DictionaryConfig) -> Result<FallbackTable, LoadError> {
        if let Some(path) = &config.fallback_path {
            match Self::load_from_file(Path::new(path)) {
                Ok(table) => return Ok(table),
                Err(e) => {
                    tracing::warn!("Failed to load fallback table from {}: {}", path, e);
                    tracing::warn!("Using embedded fallback table");
                }
            }
        }

        Self::load_embedded()
    }
}
