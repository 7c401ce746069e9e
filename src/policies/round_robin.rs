//! Round robin.
//!
//! FIFO rotation with a fixed time quantum. A preempted process re-enters
//! the ready queue behind any process that arrived during its slice, so
//! rotation stays fair to new arrivals.
//!
//! The quantum is validated as positive before this engine runs.

use std::collections::VecDeque;

use super::queue::ArrivalQueue;
use crate::models::{CompletedProcess, Process, ProcessSpec};

pub(crate) fn schedule(workload: Vec<ProcessSpec>, quantum: i64) -> Vec<CompletedProcess> {
    let mut completed = Vec::with_capacity(workload.len());
    let mut backlog = ArrivalQueue::new(workload);
    let mut ready: VecDeque<Process> = VecDeque::new();
    let mut now = 0;

    while !backlog.is_empty() || !ready.is_empty() {
        ready.extend(backlog.admit_until(now));

        match ready.pop_front() {
            Some(mut current) => {
                let slice = quantum.min(current.remaining_time());
                current.run_for(slice);
                now += slice;

                if current.is_done() {
                    completed.push(current.complete_at(now));
                } else {
                    // arrivals during the slice go ahead of the preempted process
                    ready.extend(backlog.admit_until(now));
                    ready.push_back(current);
                }
            }
            // ready queue drained but processes are still due to arrive
            None => now += 1,
        }
    }
    completed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_two_rotation() {
        let completed = schedule(
            vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)],
            2,
        );

        // P1 0..2, P2 2..4, P1 4..6, P2 6..7 done, P1 7..8 done
        assert_eq!(completed[0].id, 2);
        assert_eq!(completed[0].completion_time, 7);
        assert_eq!(completed[1].id, 1);
        assert_eq!(completed[1].completion_time, 8);
    }

    #[test]
    fn test_slice_arrival_goes_ahead_of_preempted() {
        let completed = schedule(
            vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 1, 2)],
            2,
        );

        // P2 arrives during P1's first slice and runs before P1's second
        assert_eq!(completed[0].id, 2);
        assert_eq!(completed[0].completion_time, 4);
        assert_eq!(completed[1].id, 1);
        assert_eq!(completed[1].completion_time, 6);
    }

    #[test]
    fn test_large_quantum_behaves_like_fcfs() {
        let completed = schedule(
            vec![
                ProcessSpec::new(1, 0, 4),
                ProcessSpec::new(2, 2, 3),
                ProcessSpec::new(3, 2, 1),
            ],
            10,
        );

        assert_eq!(completed[0].id, 1);
        assert_eq!(completed[0].completion_time, 4);
        assert_eq!(completed[1].id, 2);
        assert_eq!(completed[1].completion_time, 7);
        assert_eq!(completed[2].id, 3);
        assert_eq!(completed[2].completion_time, 8);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let completed = schedule(
            vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 9, 2)],
            4,
        );

        assert_eq!(completed[0].completion_time, 2);
        // one-tick idle advances 2..9, then P2 runs to 11
        assert_eq!(completed[1].completion_time, 11);
        assert_eq!(completed[1].waiting_time, 0);
    }

    #[test]
    fn test_quantum_one_alternates() {
        let completed = schedule(
            vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 0, 2)],
            1,
        );

        // P1 0..1, P2 1..2, P1 2..3 done, P2 3..4 done
        assert_eq!(completed[0].id, 1);
        assert_eq!(completed[0].completion_time, 3);
        assert_eq!(completed[1].id, 2);
        assert_eq!(completed[1].completion_time, 4);
    }

    #[test]
    fn test_empty_workload() {
        assert!(schedule(Vec::new(), 3).is_empty());
    }
}
