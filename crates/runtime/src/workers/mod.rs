//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker plays runs; the runtime decides which thread it
//! plays them on.

mod simulation;

pub use simulation::SimulationWorker;
