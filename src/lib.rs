//! Discrete-time CPU scheduling simulation.
//!
//! Simulates a single CPU executing a batch of processes under one of four
//! scheduling policies and reports each process's completion, turnaround,
//! and waiting time. Input collection and rendering (tables, Gantt strips)
//! belong to the caller; this crate is the scheduling engine.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `Process`,
//!   `CompletedProcess`, `SimulationOutcome`, `Timeline`
//! - **`policies`**: The four engines and the `SchedulingPolicy` selector
//! - **`simulator`**: Validated run entry point and KPI aggregation
//! - **`validation`**: Workload integrity checks
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use tick_sched::{ProcessSpec, SchedulingPolicy, Simulator};
//!
//! let workload = vec![
//!     ProcessSpec::new(1, 0, 5).with_priority(2),
//!     ProcessSpec::new(2, 1, 3).with_priority(1),
//! ];
//!
//! let outcome = Simulator::new(SchedulingPolicy::Fcfs).run(workload).unwrap();
//! assert_eq!(outcome.process(1).unwrap().completion_time, 5);
//! assert_eq!(outcome.process(2).unwrap().completion_time, 8);
//! assert_eq!(outcome.process(2).unwrap().waiting_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7-8

pub mod models;
pub mod policies;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use models::{CompletedProcess, ProcessSpec, SimulationOutcome, TimeSlice, Timeline};
pub use policies::SchedulingPolicy;
pub use simulator::{SimulationKpi, Simulator};
pub use validation::{ValidationError, ValidationErrorKind};
