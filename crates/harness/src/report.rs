//! Experiment result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use millrace_core::TrialId;

use crate::experiment::ConsumeMode;

/// Result of one two-worker trial.
#[derive(Debug, Clone, Serialize)]
pub struct TrialOutcome {
    pub trial_id: TrialId,
    pub mode: ConsumeMode,
    /// Final quantity of the tracked material after both workers joined.
    pub observed: i64,
    /// `initial - per_call_consumption * total_calls`.
    pub expected: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl TrialOutcome {
    /// A mismatch is the evidence of at least one lost update.
    pub fn is_mismatch(&self) -> bool {
        self.observed != self.expected
    }
}

/// Aggregated result of a full experiment run.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSummary {
    pub mode: ConsumeMode,
    pub trials: usize,
    pub iterations_per_worker: usize,
    /// Trials whose final quantity diverged from the expectation.
    pub mismatches: usize,
}
