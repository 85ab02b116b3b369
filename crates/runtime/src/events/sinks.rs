//! Action sinks that forward the log out of the engine as it is produced.

use deckrun_core::{Action, ActionSink};
use tokio::sync::mpsc;
use tracing::debug;

/// Logs every action at `debug` level, then hands it to the inner sink.
pub struct TracingSink<S> {
    inner: S,
    recorded: usize,
}

impl<S: ActionSink> TracingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, recorded: 0 }
    }

    /// Number of actions seen so far.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ActionSink> ActionSink for TracingSink<S> {
    fn record(&mut self, action: Action) {
        debug!(index = self.recorded, tag = action.tag(), "{}", action);
        self.recorded += 1;
        self.inner.record(action);
    }
}

/// Streams actions into a bounded tokio channel.
///
/// Blocks when the channel is full, so it must be driven from a blocking
/// thread. Once the receiver is gone, actions are dropped and the run keeps
/// going to completion.
pub struct ChannelSink {
    tx: mpsc::Sender<Action>,
    closed: bool,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx, closed: false }
    }

    /// Whether the receiving side has gone away.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ActionSink for ChannelSink {
    fn record(&mut self, action: Action) {
        if self.closed {
            return;
        }
        if self.tx.blocking_send(action).is_err() {
            debug!("action stream receiver dropped");
            self.closed = true;
        }
    }
}
