//! Simulation outcome model.
//!
//! The result of one policy run: every process with its computed metrics,
//! plus the query helpers a presentation layer needs to render a results
//! table and a Gantt strip.

use serde::{Deserialize, Serialize};

use super::{CompletedProcess, Timeline};

/// A finished simulation run.
///
/// Holds the completed processes in the order their completions were
/// recorded by the engine. Immutable by convention: a run produces one
/// outcome and nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Completed processes, in completion-record order.
    pub completed: Vec<CompletedProcess>,
}

impl SimulationOutcome {
    /// Wraps an engine's completed set.
    pub fn new(completed: Vec<CompletedProcess>) -> Self {
        Self { completed }
    }

    /// Finds a process by ID.
    pub fn process(&self, id: u32) -> Option<&CompletedProcess> {
        self.completed.iter().find(|p| p.id == id)
    }

    /// Latest completion time across all processes (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total CPU time executed: the sum of all burst times.
    pub fn total_busy_time(&self) -> i64 {
        self.completed.iter().map(|p| p.burst_time).sum()
    }

    /// Processes ordered by completion time.
    pub fn sorted_by_completion(&self) -> Vec<&CompletedProcess> {
        let mut sorted: Vec<&CompletedProcess> = self.completed.iter().collect();
        sorted.sort_by_key(|p| p.completion_time);
        sorted
    }

    /// Reconstructs the execution timeline for Gantt rendering.
    pub fn timeline(&self) -> Timeline {
        Timeline::from_outcome(self)
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
