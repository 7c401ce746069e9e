//! Run quality metrics.
//!
//! Aggregates the per-process results of a run into the indicators a
//! results screen reports next to the process table.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Total busy time | Sum of burst times |
//! | Avg waiting | mean(waiting_time) |
//! | Avg turnaround | mean(turnaround_time) |
//! | Avg completion | mean(completion_time) |
//! | CPU utilization | busy time / makespan |

use crate::models::SimulationOutcome;

/// Aggregate performance indicators for one run.
///
/// All time values are in ticks.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU time executed.
    pub total_busy_time: i64,
    /// Mean waiting time across processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across processes.
    pub avg_turnaround_time: f64,
    /// Mean completion time across processes.
    pub avg_completion_time: f64,
    /// Busy time over makespan (0.0..1.0; 1.0 means no idle gaps).
    pub cpu_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let makespan = outcome.makespan();
        let total_busy_time = outcome.total_busy_time();
        let count = outcome.process_count();

        let mean = |total: i64| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let total_waiting: i64 = outcome.completed.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = outcome.completed.iter().map(|p| p.turnaround_time).sum();
        let total_completion: i64 = outcome.completed.iter().map(|p| p.completion_time).sum();

        let cpu_utilization = if makespan > 0 {
            total_busy_time as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            makespan,
            total_busy_time,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_completion_time: mean(total_completion),
            cpu_utilization,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
