//! Read-only rule data and the run's source of randomness.
//!
//! [`tables`] holds the static card and creep catalogs; [`rng`] provides the
//! seeded [`Dice`] each run owns. Neither is ever mutated by game logic other
//! than by drawing from the dice.
pub mod rng;
pub mod tables;

pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use tables::{CardStats, CreepStats};
