//! Unified error types surfaced by the runtime API.
//!
//! Wraps configuration, content-loading, and worker failures so clients can
//! bubble them up with consistent context. Gameplay outcomes such as illegal
//! moves or defeat are never errors; they are part of the run report.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid run configuration")]
    Config(#[from] deckrun_core::ConfigError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("failed to encode action log")]
    Encode(#[source] serde_json::Error),
}
