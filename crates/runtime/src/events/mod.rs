//! Delivery of the action log to observers.
//!
//! The engine writes every action to an [`deckrun_core::ActionSink`]; the
//! sinks here forward them to `tracing` or to an async consumer while the run
//! is still in progress. Ordering is always preserved.

mod sinks;

pub use sinks::{ChannelSink, TracingSink};
