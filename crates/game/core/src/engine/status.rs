//! Lifecycle of a run.

use crate::action::ActionLog;
use crate::state::GameState;

/// Why a run was stopped before reaching a natural end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum AbortReason {
    /// The chooser exceeded the illegal-move allowance.
    IllegalMoves,
    /// A single round exceeded the turn allowance.
    RoundTooLong,
}

impl AbortReason {
    /// Narration emitted when the run is aborted for this reason.
    pub const fn message(self) -> &'static str {
        match self {
            AbortReason::IllegalMoves => "Game over: too many illegal moves!",
            AbortReason::RoundTooLong => "Game over: round lasted for too long!",
        }
    }
}

/// State machine of a run. Every state except `Running` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunStatus {
    #[default]
    Running,
    Victory,
    Defeat,
    Aborted(AbortReason),
}

impl RunStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, RunStatus::Running)
    }

    pub const fn is_finished(self) -> bool {
        !self.is_running()
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Running => f.write_str("running"),
            RunStatus::Victory => f.write_str("victory"),
            RunStatus::Defeat => f.write_str("defeat"),
            RunStatus::Aborted(reason) => write!(f, "aborted ({reason})"),
        }
    }
}

/// Everything a finished run leaves behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub status: RunStatus,
    /// State after the last turn, including the final score.
    pub state: GameState,
    pub illegal_moves: u32,
    pub log: ActionLog,
}

impl RunResult {
    pub fn score(&self) -> i32 {
        self.state.score
    }
}
