//! Runtime orchestration for deterministic deckrun simulations.
//!
//! This crate wires together choosers, run settings, action sinks, and worker
//! threads into a cohesive runtime API. Consumers embed [`Runtime`] to play
//! runs, stream their action logs, replay scenarios, and evaluate choosers
//! over many seeds.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] forwards the action log to observers
//! - [`report`] summarizes finished runs
//! - `workers` keeps the simulation driver internal to the crate
pub mod api;
pub mod events;
pub mod report;
pub mod runtime;

mod workers;

pub use api::{
    AggressiveChooser, CautiousChooser, Result, RetreatChooser, RuntimeError, ScriptedChooser,
};
pub use events::{ChannelSink, TracingSink};
pub use report::{BatchReport, RunReport, log_digest};
pub use runtime::{RunStream, Runtime, RuntimeBuilder, RuntimeConfig};
