//! Action log protocol.
//!
//! An [`Action`] is one discrete, immutable effect (a score change, a
//! narration line, a new creep, ...). The engine appends actions to an
//! [`ActionSink`] in the exact order things happen, which makes the log a
//! replay script for presentation layers: within a turn, avatar effects come
//! before creep effects, and every turn closes with [`Action::Wait`].
mod log;
mod types;
#[cfg(feature = "serde")]
mod wire;

pub use log::{ActionLog, ActionSink, Tee};
pub use types::{Action, Tone};
