//! Data-driven run definitions and loaders.
//!
//! This crate turns files into inputs for the engine:
//! - Run settings (data-driven via TOML)
//! - Scripted scenarios (data-driven via RON)
//!
//! Content is consumed by the runtime and never appears in game state.

pub mod scenario;
pub mod settings;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::Scenario;
pub use settings::RunSettings;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
