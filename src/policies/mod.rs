//! Scheduling policy engines.
//!
//! Four policies over the shared process and clock model. Each engine
//! consumes an owned workload and returns the completed set; a workload is
//! used by exactly one run.
//!
//! | Policy | Preemption | Selection |
//! |--------|------------|-----------|
//! | FCFS | none | arrival order |
//! | SRTF | every tick | least remaining burst |
//! | Round robin | quantum expiry | FIFO rotation |
//! | Preemptive priority | every tick | lowest priority value, then earliest arrival |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7

mod fcfs;
mod priority;
mod queue;
mod round_robin;
mod srtf;

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, ProcessSpec};

/// Policy selector, as chosen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    /// Non-preemptive, arrival order.
    Fcfs,
    /// Preemptive shortest remaining time, re-evaluated every tick.
    ShortestRemainingTime,
    /// FIFO rotation with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice per scheduling turn (ticks).
        quantum: i64,
    },
    /// Lowest priority value first, preemptible at every tick.
    PreemptivePriority,
}

impl SchedulingPolicy {
    /// Short policy name for display.
    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "FCFS",
            SchedulingPolicy::ShortestRemainingTime => "SRTF",
            SchedulingPolicy::RoundRobin { .. } => "RR",
            SchedulingPolicy::PreemptivePriority => "PRIORITY",
        }
    }

    /// The configured quantum, for policies that have one.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            SchedulingPolicy::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Runs this policy over an owned workload.
    ///
    /// Assumes the workload has passed validation.
    pub(crate) fn run(self, workload: Vec<ProcessSpec>) -> Vec<CompletedProcess> {
        match self {
            SchedulingPolicy::Fcfs => fcfs::schedule(workload),
            SchedulingPolicy::ShortestRemainingTime => srtf::schedule(workload),
            SchedulingPolicy::RoundRobin { quantum } => round_robin::schedule(workload, quantum),
            SchedulingPolicy::PreemptivePriority => priority::schedule(workload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(SchedulingPolicy::Fcfs.name(), "FCFS");
        assert_eq!(SchedulingPolicy::ShortestRemainingTime.name(), "SRTF");
        assert_eq!(SchedulingPolicy::RoundRobin { quantum: 2 }.name(), "RR");
        assert_eq!(SchedulingPolicy::PreemptivePriority.name(), "PRIORITY");
    }

    #[test]
    fn test_quantum_accessor() {
        assert_eq!(SchedulingPolicy::RoundRobin { quantum: 4 }.quantum(), Some(4));
        assert_eq!(SchedulingPolicy::Fcfs.quantum(), None);
        assert_eq!(SchedulingPolicy::PreemptivePriority.quantum(), None);
    }

    #[test]
    fn test_policy_json_round_trip() {
        let policy = SchedulingPolicy::RoundRobin { quantum: 3 };
        let json = serde_json::to_string(&policy).unwrap();
        let back: SchedulingPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
