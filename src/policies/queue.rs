//! Arrival-ordered backlog shared by the queue-driven policies.

use std::collections::VecDeque;

use crate::models::{Process, ProcessSpec};

/// Processes not yet admitted to a ready structure, ordered by arrival.
///
/// Round robin and preemptive priority pull from this backlog as the clock
/// reaches each arrival instant. The sort is stable, so simultaneous
/// arrivals are admitted in input order.
#[derive(Debug)]
pub(crate) struct ArrivalQueue {
    pending: VecDeque<Process>,
}

impl ArrivalQueue {
    /// Builds the backlog, sorting the workload by arrival time.
    pub fn new(mut workload: Vec<ProcessSpec>) -> Self {
        workload.sort_by_key(|spec| spec.arrival_time);
        Self {
            pending: workload.into_iter().map(Process::admit).collect(),
        }
    }

    /// Removes and returns every process that has arrived by `now`.
    pub fn admit_until(&mut self, now: i64) -> Vec<Process> {
        let mut admitted = Vec::new();
        while let Some(process) = self.pending.pop_front() {
            if process.arrival_time() <= now {
                admitted.push(process);
            } else {
                self.pending.push_front(process);
                break;
            }
        }
        admitted
    }

    /// Whether every process has been admitted.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_is_inclusive() {
        let mut backlog = ArrivalQueue::new(vec![
            ProcessSpec::new(1, 0, 1),
            ProcessSpec::new(2, 3, 1),
        ]);

        let at_zero = backlog.admit_until(0);
        assert_eq!(at_zero.len(), 1);
        assert_eq!(at_zero[0].id(), 1);

        assert!(backlog.admit_until(2).is_empty());

        let at_three = backlog.admit_until(3);
        assert_eq!(at_three.len(), 1);
        assert_eq!(at_three[0].id(), 2);
        assert!(backlog.is_empty());
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let mut backlog = ArrivalQueue::new(vec![
            ProcessSpec::new(3, 1, 1),
            ProcessSpec::new(1, 1, 1),
            ProcessSpec::new(2, 0, 1),
        ]);

        let admitted = backlog.admit_until(1);
        let ids: Vec<u32> = admitted.iter().map(|p| p.id()).collect();
        // Arrival 0 first, then the two t=1 arrivals in input order
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_admits_several_at_once() {
        let mut backlog = ArrivalQueue::new(vec![
            ProcessSpec::new(1, 0, 1),
            ProcessSpec::new(2, 1, 1),
            ProcessSpec::new(3, 2, 1),
        ]);

        assert_eq!(backlog.admit_until(5).len(), 3);
        assert!(backlog.is_empty());
    }
}
