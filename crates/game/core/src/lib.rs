//! Deterministic rules of a card-driven dungeon run.
//!
//! `deckrun-core` defines the canonical game (cards, creeps, encounters, the
//! turn loop) and exposes pure, synchronous APIs that the runtime and offline
//! tools share. All state mutation flows through [`engine::GameEngine`], and
//! everything observable about a run is emitted as an ordered [`ActionLog`].
pub mod action;
pub mod chooser;
pub mod config;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, ActionLog, ActionSink, Tee, Tone};
pub use chooser::Chooser;
pub use config::{RuleOptions, RunConfig};
pub use encounter::pick_creep;
pub use engine::{AbortReason, GameEngine, RunResult, RunStatus, simulate};
pub use env::{CardStats, CreepStats, Dice, PcgRng, RngOracle, compute_seed};
pub use error::ConfigError;
pub use state::{
    Avatar, AvatarStats, Card, CardCount, CardType, Creep, CreepTrait, CreepTraits, CreepType,
    Deck, GameState, IntRange, calculate_healed,
};
