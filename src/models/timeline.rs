//! Execution timeline reconstruction.
//!
//! The engines report only completion instants. The timeline is rebuilt
//! from those: completed processes are sorted by completion time and each
//! one is assigned the span from the previous completion instant to its
//! own. Under a non-preemptive policy every span equals the process burst;
//! under a preemptive policy a span aggregates the interleaved slices into
//! the region where the process finished, which is what a Gantt strip of
//! completion order shows.

use serde::{Deserialize, Serialize};

use super::SimulationOutcome;

/// One horizontal segment of the Gantt strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process the segment belongs to.
    pub process_id: u32,
    /// Segment start (inclusive, ticks).
    pub start: i64,
    /// Segment end (exclusive, ticks).
    pub end: i64,
}

impl TimeSlice {
    /// Segment length in ticks.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The full execution strip of one run, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Contiguous segments covering `[0, span)`.
    pub slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Rebuilds the timeline from a run's completion times.
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let mut slices = Vec::with_capacity(outcome.process_count());
        let mut previous = 0;
        for process in outcome.sorted_by_completion() {
            slices.push(TimeSlice {
                process_id: process.id,
                start: previous,
                end: process.completion_time,
            });
            previous = process.completion_time;
        }
        Self { slices }
    }

    /// End of the last segment (0 if empty).
    pub fn span(&self) -> i64 {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Finds the segment of a given process.
    pub fn slice_for(&self, process_id: u32) -> Option<&TimeSlice> {
        self.slices.iter().find(|s| s.process_id == process_id)
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, ProcessSpec};

    fn completed(id: u32, arrival: i64, burst: i64, completion: i64) -> crate::models::CompletedProcess {
        let mut record = Process::admit(ProcessSpec::new(id, arrival, burst));
        record.run_for(burst);
        record.complete_at(completion)
    }

    #[test]
    fn test_non_preemptive_spans_equal_bursts() {
        // FCFS-shaped outcome: completions at 5 and 8
        let outcome = SimulationOutcome::new(vec![
            completed(1, 0, 5, 5),
            completed(2, 1, 3, 8),
        ]);
        let timeline = outcome.timeline();

        assert_eq!(
            timeline.slices,
            vec![
                TimeSlice { process_id: 1, start: 0, end: 5 },
                TimeSlice { process_id: 2, start: 5, end: 8 },
            ]
        );
        assert_eq!(timeline.span(), 8);
    }

    #[test]
    fn test_preemptive_spans_follow_completion_order() {
        // SRTF-shaped outcome: short process finishes first at 4
        let outcome = SimulationOutcome::new(vec![
            completed(2, 1, 3, 4),
            completed(1, 0, 5, 8),
        ]);
        let timeline = outcome.timeline();

        assert_eq!(timeline.slices[0].process_id, 2);
        assert_eq!(timeline.slices[0].duration(), 4);
        assert_eq!(timeline.slices[1].process_id, 1);
        assert_eq!(timeline.slices[1].start, 4);
        assert_eq!(timeline.slices[1].end, 8);
    }

    #[test]
    fn test_slice_for() {
        let outcome = SimulationOutcome::new(vec![completed(7, 0, 2, 2)]);
        let timeline = outcome.timeline();
        assert_eq!(timeline.slice_for(7).unwrap().end, 2);
        assert!(timeline.slice_for(8).is_none());
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::from_outcome(&SimulationOutcome::default());
        assert!(timeline.is_empty());
        assert_eq!(timeline.span(), 0);
    }
}
