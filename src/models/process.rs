//! Process model.
//!
//! A process is the unit of scheduling: it becomes eligible at a fixed
//! arrival instant, needs a fixed amount of CPU time, and carries a
//! priority used by the preemptive priority policy.
//!
//! # Lifecycle
//!
//! [`ProcessSpec`] (input descriptor) is admitted into a run as a
//! [`Process`] (working record), which a policy engine drives down to zero
//! remaining time and then consumes into a [`CompletedProcess`]. Because
//! [`Process::complete_at`] takes the record by value, a completion time
//! can never be revised and a finished record cannot re-enter a run.
//!
//! # Time Representation
//!
//! All times are integer ticks relative to a simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Input descriptor for one process.
///
/// Lower `priority` values mean higher scheduling precedence. Validity
/// (positive ID and burst time, non-negative arrival) is checked by
/// [`crate::validation::validate_workload`], not by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier, unique within a run.
    pub id: u32,
    /// Instant the process becomes eligible to run (ticks).
    pub arrival_time: i64,
    /// Total CPU time required (ticks).
    pub burst_time: i64,
    /// Scheduling precedence. Lower value = scheduled first.
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with priority 0.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher precedence).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Working record owned by exactly one policy run.
///
/// Invariant: `0 <= remaining_time <= burst_time`. Engines only ever run a
/// process for at most its remaining time.
#[derive(Debug, Clone)]
pub struct Process {
    spec: ProcessSpec,
    remaining_time: i64,
}

impl Process {
    /// Admits a spec into a simulation run.
    pub fn admit(spec: ProcessSpec) -> Self {
        let remaining_time = spec.burst_time;
        Self {
            spec,
            remaining_time,
        }
    }

    /// Process identifier.
    pub fn id(&self) -> u32 {
        self.spec.id
    }

    /// Instant the process becomes eligible to run.
    pub fn arrival_time(&self) -> i64 {
        self.spec.arrival_time
    }

    /// Scheduling precedence (lower = higher).
    pub fn priority(&self) -> i32 {
        self.spec.priority
    }

    /// Burst time not yet executed.
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Executes the process for `ticks` time units.
    pub fn run_for(&mut self, ticks: i64) {
        self.remaining_time -= ticks;
    }

    /// Whether all required CPU time has been executed.
    pub fn is_done(&self) -> bool {
        self.remaining_time == 0
    }

    /// Consumes the record and fixes the completion metrics.
    pub fn complete_at(self, completion_time: i64) -> CompletedProcess {
        let turnaround_time = completion_time - self.spec.arrival_time;
        CompletedProcess {
            id: self.spec.id,
            arrival_time: self.spec.arrival_time,
            burst_time: self.spec.burst_time,
            priority: self.spec.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - self.spec.burst_time,
        }
    }
}

/// Final metrics for one process.
///
/// For any correct schedule, `turnaround_time >= burst_time` and
/// `waiting_time >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: u32,
    /// Instant the process became eligible (ticks).
    pub arrival_time: i64,
    /// Total CPU time the process required (ticks).
    pub burst_time: i64,
    /// Scheduling precedence it carried (lower = higher).
    pub priority: i32,
    /// Instant the last tick of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}
