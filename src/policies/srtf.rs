//! Shortest remaining time first.
//!
//! Preemptive: the remaining-time comparison is repeated at every tick, so
//! a newly arrived process with a shorter remaining burst preempts the
//! running one immediately. Remaining-time ties go to the earliest
//! position in input order. Unlike textbook (non-preemptive) SJF, which
//! this policy is sometimes confused with, selection is re-evaluated at
//! every tick.
//!
//! # Complexity
//! O(n * total burst time): one linear scan per simulated tick.

use crate::models::{CompletedProcess, Process, ProcessSpec};

pub(crate) fn schedule(workload: Vec<ProcessSpec>) -> Vec<CompletedProcess> {
    let mut slots: Vec<Option<Process>> = workload
        .into_iter()
        .map(|spec| Some(Process::admit(spec)))
        .collect();

    let mut completed = Vec::with_capacity(slots.len());
    let mut unfinished = slots.len();
    let mut now = 0;

    while unfinished > 0 {
        match shortest_eligible(&slots, now) {
            Some(idx) => {
                now += 1;
                let done = slots[idx]
                    .as_mut()
                    .map(|record| {
                        record.run_for(1);
                        record.is_done()
                    })
                    .unwrap_or(false);
                if done {
                    if let Some(record) = slots[idx].take() {
                        completed.push(record.complete_at(now));
                        unfinished -= 1;
                    }
                }
            }
            // nothing has arrived yet
            None => now += 1,
        }
    }
    completed
}

/// Index of the arrived, unfinished process with the least remaining time.
///
/// Strict comparison keeps the first-scanned process on ties.
fn shortest_eligible(slots: &[Option<Process>], now: i64) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, slot) in slots.iter().enumerate() {
        if let Some(record) = slot {
            if record.arrival_time() <= now {
                let shorter = match best {
                    Some((_, remaining)) => record.remaining_time() < remaining,
                    None => true,
                };
                if shorter {
                    best = Some((idx, record.remaining_time()));
                }
            }
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_arrival_preempts() {
        let completed = schedule(vec![
            ProcessSpec::new(1, 0, 5).with_priority(2),
            ProcessSpec::new(2, 1, 3).with_priority(1),
        ]);

        // P1 runs 0..1, P2 arrives with remaining 3 < 4 and runs 1..4,
        // P1 resumes 4..8
        assert_eq!(completed[0].id, 2);
        assert_eq!(completed[0].completion_time, 4);
        assert_eq!(completed[1].id, 1);
        assert_eq!(completed[1].completion_time, 8);
        assert_eq!(completed[1].waiting_time, 3);
    }

    #[test]
    fn test_equal_remaining_favors_earlier_index() {
        let completed = schedule(vec![
            ProcessSpec::new(1, 0, 3),
            ProcessSpec::new(2, 0, 3),
        ]);

        // P1 wins every tick-level tie until it finishes
        assert_eq!(completed[0].id, 1);
        assert_eq!(completed[0].completion_time, 3);
        assert_eq!(completed[1].id, 2);
        assert_eq!(completed[1].completion_time, 6);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let completed = schedule(vec![ProcessSpec::new(1, 4, 2)]);
        assert_eq!(completed[0].completion_time, 6);
        assert_eq!(completed[0].waiting_time, 0);
    }

    #[test]
    fn test_no_preemption_for_longer_arrival() {
        let completed = schedule(vec![
            ProcessSpec::new(1, 0, 3),
            ProcessSpec::new(2, 1, 5),
        ]);

        assert_eq!(completed[0].id, 1);
        assert_eq!(completed[0].completion_time, 3);
        assert_eq!(completed[1].id, 2);
        assert_eq!(completed[1].completion_time, 8);
    }

    #[test]
    fn test_empty_workload() {
        assert!(schedule(Vec::new()).is_empty());
    }
}
