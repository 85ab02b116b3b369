//! Simulation worker that drives one run of the engine to completion.
//!
//! The worker is synchronous: it owns the [`GameEngine`] for the duration of
//! the run and is meant to execute on a blocking thread. Every action goes
//! through a [`TracingSink`] before landing in the run's log.

use deckrun_core::{Action, ActionLog, ActionSink, Chooser, GameEngine, RunConfig, Tee};
use tokio::sync::mpsc;
use tracing::{info, info_span};

use crate::api::Result;
use crate::events::{ChannelSink, TracingSink};
use crate::report::RunReport;

/// Executes a single run with a fixed, fully resolved configuration.
pub struct SimulationWorker {
    config: RunConfig,
}

impl SimulationWorker {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Plays the run and returns its report.
    pub fn run<C>(self, chooser: &mut C) -> Result<RunReport>
    where
        C: Chooser + ?Sized,
    {
        self.drive(chooser, ActionLog::new(), |log| log)
    }

    /// Plays the run while streaming every action into `tx`.
    ///
    /// The sender is dropped when the run ends, which closes the stream.
    pub fn run_streaming<C>(self, chooser: &mut C, tx: mpsc::Sender<Action>) -> Result<RunReport>
    where
        C: Chooser + ?Sized,
    {
        let sink = Tee::new(ActionLog::new(), ChannelSink::new(tx));
        self.drive(chooser, sink, |tee| tee.into_parts().0)
    }

    fn drive<C, S>(
        self,
        chooser: &mut C,
        sink: S,
        into_log: impl FnOnce(S) -> ActionLog,
    ) -> Result<RunReport>
    where
        C: Chooser + ?Sized,
        S: ActionSink,
    {
        let config = self.config;
        let span = info_span!("simulation", seed = config.seed, rounds = config.round_count);
        let _guard = span.enter();

        let mut engine = GameEngine::new(config)?;
        info!(
            avatar_hp = config.avatar.max_hp,
            avatar_mp = config.avatar.max_mp,
            "run started"
        );

        let mut sink = TracingSink::new(sink);
        let status = engine.run(chooser, &mut sink);
        let log = into_log(sink.into_inner());

        let report = RunReport::from_result(config.seed, engine.into_result(status, log))?;
        info!(
            outcome = %report.outcome,
            score = report.score,
            turns = report.turns,
            illegal_moves = report.illegal_moves,
            "run finished"
        );
        Ok(report)
    }
}
