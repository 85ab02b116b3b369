//! Turn loop and run lifecycle.
//!
//! The [`GameEngine`] is the only place that mutates [`GameState`]. Each
//! [`GameEngine::step`] runs the safety checks and, while the run is still
//! going, plays exactly one turn: the chooser picks a card, the card resolves,
//! the creep answers, and the turn closes with [`Action::Wait`]. Everything
//! observable about the run is written to an [`ActionSink`] in order.

mod status;
mod turn;

pub use status::{AbortReason, RunResult, RunStatus};

use crate::action::{Action, ActionLog, ActionSink};
use crate::chooser::Chooser;
use crate::config::RunConfig;
use crate::encounter::pick_creep;
use crate::env::{Dice, PcgRng, RngOracle};
use crate::error::ConfigError;
use crate::state::GameState;

/// Authoritative reducer for one run.
///
/// The engine owns its state and its dice, so independent runs never share
/// anything mutable and may execute in parallel.
#[derive(Clone, Debug)]
pub struct GameEngine<R: RngOracle = PcgRng> {
    config: RunConfig,
    state: GameState,
    dice: Dice<R>,
    status: RunStatus,
    illegal_moves: u32,
    opened: bool,
}

impl GameEngine<PcgRng> {
    /// Creates an engine at run start, seeded from `config.seed`.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        Self::with_oracle(config, PcgRng)
    }
}

impl<R: RngOracle> GameEngine<R> {
    /// Creates an engine that draws from a custom oracle.
    pub fn with_oracle(config: RunConfig, oracle: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut dice = Dice::with_oracle(config.seed, oracle);
        let creep = pick_creep(1, config.round_count, &mut dice).ok_or(ConfigError::NoRounds)?;
        let next_creep = pick_creep(2, config.round_count, &mut dice);

        Ok(Self {
            config,
            state: GameState::new(config.avatar, creep, next_creep),
            dice,
            status: RunStatus::Running,
            illegal_moves: 0,
            opened: false,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Illegal moves made so far in this run.
    pub fn illegal_moves(&self) -> u32 {
        self.illegal_moves
    }

    /// Number of random values drawn so far.
    pub fn draws(&self) -> u64 {
        self.dice.draws()
    }

    /// Advances the run by one turn.
    ///
    /// The first call opens the log with [`Action::NextRound`]. Safety checks
    /// run before every turn and may end the run instead of playing it. Once
    /// the run has finished, further calls are no-ops returning the final
    /// status.
    pub fn step<C, S>(&mut self, chooser: &mut C, sink: &mut S) -> RunStatus
    where
        C: Chooser + ?Sized,
        S: ActionSink + ?Sized,
    {
        if self.status.is_finished() {
            return self.status;
        }
        if !self.opened {
            self.opened = true;
            sink.record(Action::NextRound);
        }

        if let Some(status) = self.check_run_end(sink) {
            self.status = status;
            return status;
        }

        self.play_turn(chooser, sink);
        self.status
    }

    /// Steps until the run reaches a terminal status.
    pub fn run<C, S>(&mut self, chooser: &mut C, sink: &mut S) -> RunStatus
    where
        C: Chooser + ?Sized,
        S: ActionSink + ?Sized,
    {
        while self.step(chooser, sink).is_running() {}
        self.status
    }

    /// Runs to completion into a fresh log and hands back the outcome.
    pub fn finish<C>(mut self, chooser: &mut C) -> RunResult
    where
        C: Chooser + ?Sized,
    {
        let mut log = ActionLog::new();
        let status = self.run(chooser, &mut log);
        self.into_result(status, log)
    }

    /// Packages the engine's final state with an externally collected log.
    pub fn into_result(self, status: RunStatus, log: ActionLog) -> RunResult {
        RunResult {
            status,
            state: self.state,
            illegal_moves: self.illegal_moves,
            log,
        }
    }

    /// Safety checks run at the top of every turn, in priority order.
    fn check_run_end<S>(&mut self, sink: &mut S) -> Option<RunStatus>
    where
        S: ActionSink + ?Sized,
    {
        let rules = self.config.rules;
        if self.illegal_moves >= rules.max_illegal_moves {
            return Some(Self::abort(AbortReason::IllegalMoves, sink));
        }
        if self.state.round_turn >= rules.max_round_turns {
            return Some(Self::abort(AbortReason::RoundTooLong, sink));
        }
        if self.state.round > self.config.round_count {
            return Some(self.victory(sink));
        }
        None
    }

    fn abort<S>(reason: AbortReason, sink: &mut S) -> RunStatus
    where
        S: ActionSink + ?Sized,
    {
        sink.record(Action::red_log(reason.message()));
        RunStatus::Aborted(reason)
    }

    /// Awards the remaining HP as a survival bonus.
    fn victory<S>(&mut self, sink: &mut S) -> RunStatus
    where
        S: ActionSink + ?Sized,
    {
        let bonus = self.state.avatar.hp;
        sink.record(Action::Victory);
        self.state.score += bonus;
        sink.record(Action::UpdateScore { delta: bonus });
        sink.record(Action::green_log(format!("Got {bonus} survival bonus points")));
        RunStatus::Victory
    }
}

/// Runs a whole game with the default dice and returns its outcome.
pub fn simulate<C>(config: RunConfig, chooser: &mut C) -> Result<RunResult, ConfigError>
where
    C: Chooser + ?Sized,
{
    Ok(GameEngine::new(config)?.finish(chooser))
}
