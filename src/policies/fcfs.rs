//! First-come-first-served.
//!
//! Non-preemptive single pass: processes run to completion in arrival
//! order. Arrival ties keep their input order (the sort is stable).
//!
//! # Complexity
//! O(n log n) for the sort; one pass after that.

use crate::models::{CompletedProcess, Process, ProcessSpec};

pub(crate) fn schedule(workload: Vec<ProcessSpec>) -> Vec<CompletedProcess> {
    let mut records: Vec<Process> = workload.into_iter().map(Process::admit).collect();
    records.sort_by_key(|record| record.arrival_time());

    let mut completed = Vec::with_capacity(records.len());
    let mut now = 0;
    for mut record in records {
        if record.arrival_time() > now {
            // idle gap until the next arrival
            now = record.arrival_time();
        }
        let burst = record.remaining_time();
        record.run_for(burst);
        now += burst;
        completed.push(record.complete_at(now));
    }
    completed
}
