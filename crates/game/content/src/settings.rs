//! Run settings as they are written on disk.

use deckrun_core::{AvatarStats, RuleOptions, RunConfig};

/// On-disk form of a [`RunConfig`].
///
/// Every field is optional in the file and falls back to the engine defaults.
/// A missing `seed` means "pick one when the run starts".
///
/// ```toml
/// avatar_hp = 20
/// avatar_mp = 5
/// rounds = 3
/// seed = 42
///
/// [rules]
/// max_illegal_moves = 5
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RunSettings {
    pub avatar_hp: i32,
    pub avatar_mp: i32,
    pub rounds: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u64>,
    pub rules: RuleOptions,
}

impl RunSettings {
    /// Resolves the settings into an engine config, using `fallback_seed`
    /// when the file does not pin a seed.
    pub fn into_run_config(self, fallback_seed: u64) -> RunConfig {
        RunConfig {
            avatar: AvatarStats::new(self.avatar_hp, self.avatar_mp),
            round_count: self.rounds,
            seed: self.seed.unwrap_or(fallback_seed),
            rules: self.rules,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            avatar_hp: RunConfig::DEFAULT_AVATAR_HP,
            avatar_mp: RunConfig::DEFAULT_AVATAR_MP,
            rounds: RunConfig::DEFAULT_ROUNDS,
            seed: None,
            rules: RuleOptions::default(),
        }
    }
}

impl From<RunConfig> for RunSettings {
    fn from(config: RunConfig) -> Self {
        Self {
            avatar_hp: config.avatar.max_hp,
            avatar_mp: config.avatar.max_mp,
            rounds: config.round_count,
            seed: Some(config.seed),
            rules: config.rules,
        }
    }
}
