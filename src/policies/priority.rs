//! Preemptive priority scheduling.
//!
//! Runs the ready process with the lowest priority value for one tick at a
//! time, so a higher-priority arrival takes over at the next tick
//! boundary. Priority ties go to the earlier arrival; processes tied on
//! both rotate in push order, one tick each.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::queue::ArrivalQueue;
use crate::models::{CompletedProcess, Process, ProcessSpec};

/// Ready-pool entry ordered by (priority, arrival, push sequence).
///
/// The sequence number is reassigned on every push, so a process that just
/// ran goes behind processes it ties with exactly.
#[derive(Debug)]
struct ReadyEntry {
    priority: i32,
    arrival_time: i64,
    seq: u64,
    process: Process,
}

impl ReadyEntry {
    fn key(&self) -> (i32, i64, u64) {
        (self.priority, self.arrival_time, self.seq)
    }
}

impl PartialEq for ReadyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ReadyEntry {}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

pub(crate) fn schedule(workload: Vec<ProcessSpec>) -> Vec<CompletedProcess> {
    let mut completed = Vec::with_capacity(workload.len());
    let mut backlog = ArrivalQueue::new(workload);
    let mut ready: BinaryHeap<Reverse<ReadyEntry>> = BinaryHeap::new();
    let mut next_seq: u64 = 0;
    let mut now = 0;

    while !backlog.is_empty() || !ready.is_empty() {
        for process in backlog.admit_until(now) {
            push_ready(&mut ready, &mut next_seq, process);
        }

        match ready.pop() {
            Some(Reverse(mut entry)) => {
                entry.process.run_for(1);
                now += 1;

                if entry.process.is_done() {
                    completed.push(entry.process.complete_at(now));
                } else {
                    // back into the pool, re-compared against new arrivals
                    for process in backlog.admit_until(now) {
                        push_ready(&mut ready, &mut next_seq, process);
                    }
                    push_ready(&mut ready, &mut next_seq, entry.process);
                }
            }
            None => now += 1,
        }
    }
    completed
}

fn push_ready(ready: &mut BinaryHeap<Reverse<ReadyEntry>>, next_seq: &mut u64, process: Process) {
    let entry = ReadyEntry {
        priority: process.priority(),
        arrival_time: process.arrival_time(),
        seq: *next_seq,
        process,
    };
    *next_seq += 1;
    ready.push(Reverse(entry));
}
