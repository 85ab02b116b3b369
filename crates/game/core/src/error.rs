//! Error types for deckrun-core.
//!
//! Gameplay never fails: illegal moves, immunities, and suppressed attacks
//! are ordinary rule outcomes recorded in the action log. The only errors
//! are configuration mistakes caught before a run starts. Identifier lookups
//! cannot fail because card and creep kinds are closed enums; lookups by
//! name go through `FromStr` and report [`strum::ParseError`].

/// A run configuration the engine refuses to start with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("avatar max HP must be positive (got {0})")]
    NonPositiveHp(i32),

    #[error("avatar max MP must not be negative (got {0})")]
    NegativeMp(i32),

    #[error("a run needs at least one round")]
    NoRounds,

    #[error("safety limit `{0}` must be at least 1")]
    ZeroLimit(&'static str),
}
