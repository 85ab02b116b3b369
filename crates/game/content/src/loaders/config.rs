//! Run settings loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::settings::RunSettings;

/// Loader for run settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load run settings from a TOML file.
    ///
    /// Missing keys fall back to the defaults of [`RunSettings`]; unknown
    /// keys are rejected so typos do not silently change a run.
    pub fn load(path: &Path) -> LoadResult<RunSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings {}: {}", path.display(), e))
    }

    /// Parse run settings from TOML text.
    pub fn parse(content: &str) -> LoadResult<RunSettings> {
        let settings: RunSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        settings
            .into_run_config(0)
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid run settings: {}", e))?;

        Ok(settings)
    }
}
