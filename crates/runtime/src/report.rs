//! Run and batch reports.

use deckrun_core::{ActionLog, RunResult, RunStatus};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::api::{Result, RuntimeError};

/// Summary of one finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    /// Seed the run was played with; replaying it reproduces the log.
    pub seed: u64,
    pub outcome: RunStatus,
    pub score: i32,
    pub turns: u32,
    /// Rounds left behind, whether by defeating or fleeing the creep.
    pub rounds: u32,
    pub illegal_moves: u32,
    /// Hex SHA-256 of the encoded action log.
    pub log_digest: String,
    pub log: ActionLog,
}

impl RunReport {
    pub fn from_result(seed: u64, result: RunResult) -> Result<Self> {
        let log_digest = log_digest(&result.log)?;
        Ok(Self {
            seed,
            outcome: result.status,
            score: result.state.score,
            turns: result.state.turn - 1,
            rounds: result.state.round - 1,
            illegal_moves: result.illegal_moves,
            log_digest,
            log: result.log,
        })
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == RunStatus::Victory
    }
}

/// Hashes the wire encoding of `log`, one action after another.
pub fn log_digest(log: &ActionLog) -> Result<String> {
    let mut hasher = Sha256::new();
    for action in log {
        let bytes = serde_json::to_vec(action).map_err(RuntimeError::Encode)?;
        hasher.update(&bytes);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Aggregate of many independent runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Individual reports, in the order the seeds were given.
    pub runs: Vec<RunReport>,
    pub victories: usize,
    pub defeats: usize,
    pub aborted: usize,
    pub mean_score: f64,
    pub best_score: Option<i32>,
}

impl BatchReport {
    pub fn from_runs(runs: Vec<RunReport>) -> Self {
        let mut report = Self::default();
        for run in &runs {
            match run.outcome {
                RunStatus::Victory => report.victories += 1,
                RunStatus::Defeat => report.defeats += 1,
                RunStatus::Aborted(_) => report.aborted += 1,
                RunStatus::Running => {}
            }
        }
        if !runs.is_empty() {
            let total: i64 = runs.iter().map(|run| i64::from(run.score)).sum();
            report.mean_score = total as f64 / runs.len() as f64;
        }
        report.best_score = runs.iter().map(|run| run.score).max();
        report.runs = runs;
        report
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
