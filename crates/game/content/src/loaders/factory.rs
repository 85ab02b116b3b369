//! Content factory for loading everything a runtime needs from one directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};
use crate::scenario::Scenario;
use crate::settings::RunSettings;

/// Content factory that loads run data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── settings.toml
/// └── scenarios/
///     ├── retreat-only.ron
///     └── opener.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    const SETTINGS_FILE: &'static str = "settings.toml";
    const SCENARIO_DIR: &'static str = "scenarios";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load run settings from `settings.toml`, or the defaults when the file
    /// does not exist.
    pub fn load_settings(&self) -> LoadResult<RunSettings> {
        let path = self.data_dir.join(Self::SETTINGS_FILE);
        if !path.exists() {
            return Ok(RunSettings::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join(Self::SCENARIO_DIR)
            .join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }

    /// Load every scenario in `scenarios/`, sorted by file name.
    pub fn load_scenarios(&self) -> LoadResult<Vec<Scenario>> {
        let dir = self.data_dir.join(Self::SCENARIO_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| ScenarioLoader::load(path)).collect()
    }
}
