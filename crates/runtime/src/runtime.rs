//! High-level runtime orchestrator.
//!
//! The runtime resolves run settings into engine configs, moves simulations
//! onto tokio's blocking pool, and exposes a builder-based API for clients to
//! play single runs, stream them, replay scenarios, or evaluate batches.

use std::path::Path;

use deckrun_content::{ContentFactory, RunSettings, Scenario};
use deckrun_core::{Action, Chooser, RunConfig};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::{Result, RuntimeError, ScriptedChooser};
use crate::report::{BatchReport, RunReport};
use crate::workers::SimulationWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub settings: RunSettings,
    /// Capacity of the channel behind [`Runtime::stream`].
    pub stream_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            settings: RunSettings::default(),
            stream_buffer_size: 256,
        }
    }
}

/// Main runtime that orchestrates game simulations.
///
/// Every run gets its own engine, dice, and chooser, so runs never share
/// mutable state and may proceed in parallel.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Creates a runtime from the settings found in a content directory.
    pub fn from_content_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        let settings = ContentFactory::new(data_dir.as_ref()).load_settings()?;
        Ok(Self::builder().settings(settings).build())
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Resolves the configured settings into a validated engine config.
    ///
    /// The seed is taken from `seed`, then from the settings, and is drawn
    /// at random when neither pins one.
    pub fn run_config(&self, seed: Option<u64>) -> Result<RunConfig> {
        let settings = match seed {
            Some(seed) => self.config.settings.with_seed(seed),
            None => self.config.settings,
        };
        resolve(settings)
    }

    /// Plays one run on the current thread.
    pub fn simulate<C>(&self, chooser: &mut C) -> Result<RunReport>
    where
        C: Chooser + ?Sized,
    {
        SimulationWorker::new(self.run_config(None)?).run(chooser)
    }

    /// Plays one run with an explicit seed on the current thread.
    pub fn simulate_seeded<C>(&self, seed: u64, chooser: &mut C) -> Result<RunReport>
    where
        C: Chooser + ?Sized,
    {
        SimulationWorker::new(self.run_config(Some(seed))?).run(chooser)
    }

    /// Starts a run on the blocking pool and streams its actions as they
    /// are produced.
    pub fn stream<C>(&self, mut chooser: C) -> Result<RunStream>
    where
        C: Chooser + Send + 'static,
    {
        let config = self.run_config(None)?;
        let (tx, rx) = mpsc::channel(self.config.stream_buffer_size.max(1));
        let worker = tokio::task::spawn_blocking(move || {
            SimulationWorker::new(config).run_streaming(&mut chooser, tx)
        });

        Ok(RunStream {
            seed: config.seed,
            actions: rx,
            worker,
        })
    }

    /// Replays a scripted scenario on the blocking pool.
    ///
    /// The scenario's own settings apply; the runtime settings are ignored.
    pub async fn replay(&self, scenario: &Scenario) -> Result<RunReport> {
        let config = resolve(scenario.settings)?;
        let mut chooser = ScriptedChooser::from_scenario(scenario);
        info!(scenario = %scenario.name, seed = config.seed, "replaying scenario");

        tokio::task::spawn_blocking(move || SimulationWorker::new(config).run(&mut chooser))
            .await
            .map_err(RuntimeError::WorkerJoin)?
    }

    /// Runs one independent simulation per seed, in parallel.
    ///
    /// `factory` builds a fresh chooser for each seed. Reports come back in
    /// the order the seeds were given.
    pub async fn evaluate<I, F, C>(&self, seeds: I, factory: F) -> Result<BatchReport>
    where
        I: IntoIterator<Item = u64>,
        F: Fn(u64) -> C,
        C: Chooser + Send + 'static,
    {
        let mut workers = Vec::new();
        for seed in seeds {
            let config = self.run_config(Some(seed))?;
            let mut chooser = factory(seed);
            workers.push(tokio::task::spawn_blocking(move || {
                SimulationWorker::new(config).run(&mut chooser)
            }));
        }

        let mut runs = Vec::with_capacity(workers.len());
        for worker in workers {
            let report = worker.await.map_err(RuntimeError::WorkerJoin)??;
            debug!(
                seed = report.seed,
                outcome = %report.outcome,
                score = report.score,
                "batch run finished"
            );
            runs.push(report);
        }

        let batch = BatchReport::from_runs(runs);
        info!(
            runs = batch.len(),
            victories = batch.victories,
            defeats = batch.defeats,
            aborted = batch.aborted,
            mean_score = batch.mean_score,
            "batch evaluated"
        );
        Ok(batch)
    }
}

/// A run in progress on the blocking pool.
pub struct RunStream {
    seed: u64,
    actions: mpsc::Receiver<Action>,
    worker: JoinHandle<Result<RunReport>>,
}

impl RunStream {
    /// Seed the streamed run is played with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next action of the run, or `None` once the run has finished.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.actions.recv().await
    }

    /// Drains any unread actions and waits for the final report.
    pub async fn finish(mut self) -> Result<RunReport> {
        while self.actions.recv().await.is_some() {}
        self.worker.await.map_err(RuntimeError::WorkerJoin)?
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the run settings
    pub fn settings(mut self, settings: RunSettings) -> Self {
        self.config.settings = settings;
        self
    }

    /// Pin the seed of every run that does not pass its own
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.settings = self.config.settings.with_seed(seed);
        self
    }

    /// Set the capacity of streamed action channels
    pub fn stream_buffer_size(mut self, size: usize) -> Self {
        self.config.stream_buffer_size = size;
        self
    }

    pub fn build(self) -> Runtime {
        Runtime::new(self.config)
    }
}

/// Turns settings into a validated config, drawing a seed if none is set.
fn resolve(settings: RunSettings) -> Result<RunConfig> {
    let config = settings.into_run_config(rand::random());
    config.validate()?;
    Ok(config)
}
