use crate::error::ConfigError;
use crate::state::AvatarStats;

/// Rule knobs and safety limits of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleOptions {
    /// Illegal moves tolerated before the run is aborted.
    pub max_illegal_moves: u32,

    /// Turns a single round may last before the run is aborted.
    pub max_round_turns: u32,

    /// Whether a limited card is spent even when its cast then fails for
    /// lack of mana. `true` matches the classic rules.
    pub spend_card_on_failed_cast: bool,

    /// Whether retreating always escapes before the creep acts. When
    /// `false`, only slow creeps let the avatar go unpunished.
    pub free_retreat: bool,
}

impl RuleOptions {
    pub const DEFAULT_MAX_ILLEGAL_MOVES: u32 = 10;
    pub const DEFAULT_MAX_ROUND_TURNS: u32 = 50;

    pub const fn new() -> Self {
        Self {
            max_illegal_moves: Self::DEFAULT_MAX_ILLEGAL_MOVES,
            max_round_turns: Self::DEFAULT_MAX_ROUND_TURNS,
            spend_card_on_failed_cast: true,
            free_retreat: false,
        }
    }
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to start a run. The seed makes it fully reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub avatar: AvatarStats,
    pub round_count: u32,
    pub seed: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: RuleOptions,
}

impl RunConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AVATAR_HP: i32 = 40;
    pub const DEFAULT_AVATAR_MP: i32 = 20;
    pub const DEFAULT_ROUNDS: u32 = 10;

    pub fn new(avatar_max_hp: i32, avatar_max_mp: i32, round_count: u32, seed: u64) -> Self {
        Self {
            avatar: AvatarStats::new(avatar_max_hp, avatar_max_mp),
            round_count,
            seed,
            rules: RuleOptions::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rules(mut self, rules: RuleOptions) -> Self {
        self.rules = rules;
        self
    }

    /// Rejects configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.avatar.max_hp <= 0 {
            return Err(ConfigError::NonPositiveHp(self.avatar.max_hp));
        }
        if self.avatar.max_mp < 0 {
            return Err(ConfigError::NegativeMp(self.avatar.max_mp));
        }
        if self.round_count == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.rules.max_illegal_moves == 0 {
            return Err(ConfigError::ZeroLimit("max_illegal_moves"));
        }
        if self.rules.max_round_turns == 0 {
            return Err(ConfigError::ZeroLimit("max_round_turns"));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_AVATAR_HP,
            Self::DEFAULT_AVATAR_MP,
            Self::DEFAULT_ROUNDS,
            0,
        )
    }
}
