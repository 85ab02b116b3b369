//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scripted scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a single scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.name.trim().is_empty() {
            anyhow::bail!("Scenario name must not be empty");
        }
        scenario
            .settings
            .into_run_config(0)
            .validate()
            .map_err(|e| {
                anyhow::anyhow!("Scenario '{}' has invalid settings: {}", scenario.name, e)
            })?;

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckrun_core::CardType;

    const RETREAT_ONLY: &str = r#"(
        name: "retreat-only",
        settings: (avatar_hp: 20, avatar_mp: 5, rounds: 1, seed: Some(7)),
        moves: [Retreat],
    )"#;

    #[test]
    fn parses_scenario() {
        let scenario = ScenarioLoader::parse(RETREAT_ONLY).unwrap();
        assert_eq!(scenario.name, "retreat-only");
        assert_eq!(scenario.settings.seed, Some(7));
        assert_eq!(scenario.settings.rounds, 1);
        assert_eq!(scenario.moves, vec![CardType::Retreat]);
        assert_eq!(scenario.fallback_card(), CardType::Retreat);
    }

    #[test]
    fn settings_and_fallback_are_optional() {
        let scenario = ScenarioLoader::parse(
            r#"(name: "opener", moves: [Attack, Attack, Rest], fallback: Some(Attack))"#,
        )
        .unwrap();
        assert_eq!(scenario.settings.rounds, 10);
        assert_eq!(scenario.settings.seed, None);
        assert_eq!(scenario.fallback_card(), CardType::Attack);
    }

    #[test]
    fn rejects_unknown_cards() {
        let err = ScenarioLoader::parse(r#"(name: "bad", moves: [Fireball])"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario RON"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retreat.ron");
        std::fs::write(&path, RETREAT_ONLY).unwrap();

        let scenario = ScenarioLoader::load(&path).unwrap();
        assert_eq!(scenario.name, "retreat-only");
    }
}
