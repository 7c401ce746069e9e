//! Simulation entry point and quality metrics.
//!
//! [`Simulator`] validates a workload and runs it through the selected
//! policy engine; [`SimulationKpi`] aggregates the per-process results.

mod kpi;

pub use kpi::SimulationKpi;

use crate::models::{ProcessSpec, SimulationOutcome};
use crate::policies::SchedulingPolicy;
use crate::validation::{validate_workload, ValidationError};

/// Runs workloads through one scheduling policy.
///
/// Each call to [`Simulator::run`] consumes its workload, so process
/// records cannot leak between runs; re-running a set of descriptors
/// means cloning it first.
///
/// # Example
///
/// ```
/// use tick_sched::{ProcessSpec, SchedulingPolicy, Simulator};
///
/// let workload = vec![
///     ProcessSpec::new(1, 0, 5),
///     ProcessSpec::new(2, 1, 3),
/// ];
/// let outcome = Simulator::new(SchedulingPolicy::RoundRobin { quantum: 2 })
///     .run(workload)
///     .unwrap();
///
/// assert_eq!(outcome.process(2).unwrap().completion_time, 7);
/// assert_eq!(outcome.makespan(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    policy: SchedulingPolicy,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Validates and runs a workload.
    ///
    /// Returns every validation error at once; the engines themselves
    /// never fail over validated input. An empty workload yields an empty
    /// outcome.
    pub fn run(&self, workload: Vec<ProcessSpec>) -> Result<SimulationOutcome, Vec<ValidationError>> {
        validate_workload(&workload, self.policy.quantum())?;
        Ok(SimulationOutcome::new(self.policy.run(workload)))
    }
}
