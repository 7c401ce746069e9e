//! Simulation domain models.
//!
//! Core data types for one scheduling run: the process in its three
//! lifecycle stages (spec, working record, completed result), the run
//! outcome, and the reconstructed execution timeline.

mod outcome;
mod process;
mod timeline;

pub use outcome::SimulationOutcome;
pub use process::{CompletedProcess, Process, ProcessSpec};
pub use timeline::{TimeSlice, Timeline};
