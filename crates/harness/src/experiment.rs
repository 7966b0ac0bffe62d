//! Two-worker concurrency harness.
//!
//! Each trial spawns exactly two uncoordinated worker threads that hammer
//! the same `InventoryStore` through the selected consume path, joins
//! both, and compares the tracked material's final quantity against the
//! deterministic expectation. Joining is the only synchronization point;
//! the racy consume calls stay racy relative to each other.

use std::sync::Arc;
use std::thread;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use millrace_bom::{BillOfMaterials, Material, ProductionOrder};
use millrace_core::{DomainError, DomainResult, TrialId};
use millrace_inventory::{Availability, InventoryStore};

use crate::report::{ExperimentSummary, TrialOutcome};

/// Workers per trial. The expected-value arithmetic assumes exactly two
/// uncoordinated writers.
pub const WORKERS: usize = 2;

/// Which consume path the workers call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumeMode {
    /// Unguarded read-modify-write; loses updates under contention.
    Racy,
    /// Guarded read-modify-write; the corrected comparison baseline.
    Synchronized,
}

/// Experiment configuration.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Independent trials run sequentially by `Experiment::run`.
    pub trials: usize,
    /// Consume calls each worker performs per trial.
    pub iterations_per_worker: usize,
    /// Consume path under test.
    pub mode: ConsumeMode,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            iterations_per_worker: 100,
            mode: ConsumeMode::Racy,
        }
    }
}

impl ExperimentConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_iterations_per_worker(mut self, iterations: usize) -> Self {
        self.iterations_per_worker = iterations;
        self
    }

    pub fn with_mode(mut self, mode: ConsumeMode) -> Self {
        self.mode = mode;
        self
    }

    fn validate(&self) -> DomainResult<()> {
        if self.trials < 1 {
            return Err(DomainError::validation("trials must be positive"));
        }
        if self.iterations_per_worker < 1 {
            return Err(DomainError::validation(
                "iterations_per_worker must be positive",
            ));
        }
        Ok(())
    }
}

/// A lost-update experiment: BOM, inventory seed, order, and the material
/// whose final count is compared against the deterministic expectation.
///
/// All state is locally constructed and explicitly passed; each trial gets
/// a fresh inventory built from the seed, so trials are independent.
#[derive(Debug)]
pub struct Experiment {
    bom: Arc<BillOfMaterials>,
    seed: Vec<Material>,
    order: ProductionOrder,
    tracked_material: String,
    initial_quantity: i64,
    per_call_consumption: i64,
}

impl Experiment {
    /// The tracked material must appear in the order's recipe, otherwise
    /// no consumption happens and no deterministic expectation exists.
    pub fn new(
        bom: BillOfMaterials,
        seed: Vec<Material>,
        order: ProductionOrder,
        tracked_material: impl Into<String>,
    ) -> DomainResult<Self> {
        let tracked_material = tracked_material.into();
        let per_unit = bom
            .materials_for(order.product_name())
            .iter()
            .find(|m| m.name() == tracked_material)
            .map(Material::quantity)
            .ok_or_else(|| {
                DomainError::invariant("tracked material does not appear in the order's recipe")
            })?;

        let per_call_consumption = per_unit * order.quantity();
        let initial_quantity: i64 = seed
            .iter()
            .filter(|m| m.name() == tracked_material)
            .map(Material::quantity)
            .sum();

        Ok(Self {
            bom: Arc::new(bom),
            seed,
            order,
            tracked_material,
            initial_quantity,
            per_call_consumption,
        })
    }

    pub fn tracked_material(&self) -> &str {
        &self.tracked_material
    }

    /// `initial - per_call_consumption * total_calls` for a full trial.
    pub fn expected_final(&self, iterations_per_worker: usize) -> i64 {
        let total_calls = (WORKERS * iterations_per_worker) as i64;
        self.initial_quantity - self.per_call_consumption * total_calls
    }

    /// Feasibility pre-flight: the availability check over a fresh seed
    /// inventory. A query only; nothing is reserved.
    pub fn check_availability(&self) -> Availability {
        self.build_inventory().check_order(&self.bom, &self.order)
    }

    fn build_inventory(&self) -> InventoryStore {
        let inventory = InventoryStore::new();
        for material in &self.seed {
            inventory.add(material);
        }
        inventory
    }

    /// Run a single trial: spawn both workers, join both, read the result.
    pub fn run_trial(&self, mode: ConsumeMode, iterations_per_worker: usize) -> TrialOutcome {
        let trial_id = TrialId::new();
        let started_at = Utc::now();
        let inventory = Arc::new(self.build_inventory());

        let mut workers = Vec::with_capacity(WORKERS);
        for worker_no in 0..WORKERS {
            let inventory = Arc::clone(&inventory);
            let bom = Arc::clone(&self.bom);
            let order = self.order.clone();
            let handle = thread::Builder::new()
                .name(format!("consumer-{worker_no}"))
                .spawn(move || {
                    for _ in 0..iterations_per_worker {
                        match mode {
                            ConsumeMode::Racy => inventory.consume(&bom, &order),
                            ConsumeMode::Synchronized => {
                                inventory.consume_synchronized(&bom, &order)
                            }
                        }
                    }
                })
                .expect("failed to spawn consumer thread");
            workers.push(handle);
        }

        // The join is the only synchronization point between the workers
        // and the final read.
        for handle in workers {
            let _ = handle.join();
        }

        TrialOutcome {
            trial_id,
            mode,
            observed: inventory.quantity_of(&self.tracked_material),
            expected: self.expected_final(iterations_per_worker),
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Run `config.trials` independent sequential trials and tally how
    /// often the final quantity diverged from the expectation.
    pub fn run(&self, config: &ExperimentConfig) -> DomainResult<ExperimentSummary> {
        config.validate()?;

        info!(
            mode = ?config.mode,
            trials = config.trials,
            iterations_per_worker = config.iterations_per_worker,
            material = %self.tracked_material,
            "experiment started"
        );

        let mut mismatches = 0;
        for trial_no in 0..config.trials {
            let outcome = self.run_trial(config.mode, config.iterations_per_worker);
            if outcome.is_mismatch() {
                mismatches += 1;
            }
            info!(
                trial = %outcome.trial_id,
                trial_no,
                material = %self.tracked_material,
                observed = outcome.observed,
                expected = outcome.expected,
                mismatch = outcome.is_mismatch(),
                "trial finished"
            );
        }

        info!(mode = ?config.mode, mismatches, "experiment finished");

        Ok(ExperimentSummary {
            mode: config.mode,
            trials: config.trials,
            iterations_per_worker: config.iterations_per_worker,
            mismatches,
        })
    }
}
