//! Input validation for simulation workloads.
//!
//! Checks every process descriptor before a run starts, so the policy
//! engines never see malformed input. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Zero or duplicate process IDs
//! - Non-positive round robin quantum
//!
//! A workload with zero processes is valid and yields an empty outcome.

use std::collections::HashSet;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process requires zero or negative CPU time.
    NonPositiveBurstTime,
    /// A process arrives before the simulation epoch.
    NegativeArrivalTime,
    /// A process ID is zero.
    InvalidProcessId,
    /// Two processes share the same ID.
    DuplicateProcessId,
    /// The round robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload and, when present, the round robin quantum.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_workload(workload: &[ProcessSpec], quantum: Option<i64>) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for spec in workload {
        if spec.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessId,
                "Process ID must be positive",
            ));
        } else if !seen_ids.insert(spec.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProcessId,
                format!("Duplicate process ID: {}", spec.id),
            ));
        }

        if spec.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurstTime,
                format!(
                    "Process {} has non-positive burst time {}",
                    spec.id, spec.burst_time
                ),
            ));
        }

        if spec.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Process {} has negative arrival time {}",
                    spec.id, spec.arrival_time
                ),
            ));
        }
    }

    if let Some(quantum) = quantum {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Time quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
