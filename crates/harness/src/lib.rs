//! `millrace-harness` — lost-update experiment driver.
//!
//! Spawns two uncoordinated workers against one shared inventory, runs
//! many independent trials, and reports how often the final tally diverges
//! from the deterministic expectation.

pub mod experiment;
pub mod report;

pub use experiment::{ConsumeMode, Experiment, ExperimentConfig, WORKERS};
pub use report::{ExperimentSummary, TrialOutcome};
