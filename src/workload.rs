//! Seeded workload generation.
//!
//! Produces random, always-valid workloads for tests and benchmarks.
//! Determinism comes from the caller's RNG; seed it for reproducible
//! workloads.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::ProcessSpec;

/// Random workload generator.
///
/// IDs are assigned 1..=count in order, so every generated workload passes
/// [`crate::validation::validate_workload`] as long as the burst range
/// stays positive.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use tick_sched::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let specs = WorkloadGenerator::new(4).generate(&mut rng);
/// assert_eq!(specs.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    process_count: usize,
    max_arrival_time: i64,
    burst_time_range: RangeInclusive<i64>,
    priority_range: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges (arrivals 0..=20,
    /// bursts 1..=10, priorities 0..=9).
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival_time: 20,
            burst_time_range: 1..=10,
            priority_range: 0..=9,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival_time(mut self, max_arrival_time: i64) -> Self {
        self.max_arrival_time = max_arrival_time;
        self
    }

    /// Sets the burst time range (must stay positive).
    pub fn with_burst_time_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst_time_range = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority_range = range;
        self
    }

    /// Generates the workload.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.process_count)
            .map(|id| {
                ProcessSpec::new(
                    id as u32,
                    rng.random_range(0..=self.max_arrival_time),
                    rng.random_range(self.burst_time_range.clone()),
                )
                .with_priority(rng.random_range(self.priority_range.clone()))
            })
            .collect()
    }
}
