//! Structural validation of job and crew snapshots.
//!
//! Checks run per entity before optimization. Offending entities are
//! excluded and reported; they never abort the run. Detects:
//! - non-positive durations, efficiencies, and capacities
//! - inverted time windows and working hours
//! - coordinates outside valid latitude/longitude ranges
//! - duplicate entity ids within a batch

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::{Crew, Job};

/// Which input entity an issue refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRef {
    Job(String),
    Crew(String),
}

/// Categories of structural problems in input snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    #[error("estimated duration must be positive")]
    NonPositiveDuration,
    #[error("time window ends before it starts")]
    InvertedTimeWindow,
    #[error("coordinate outside valid latitude/longitude range")]
    CoordinateOutOfRange,
    #[error("fuel efficiency must be positive")]
    NonPositiveFuelEfficiency,
    #[error("vehicle job capacity must be positive")]
    ZeroJobCapacity,
    #[error("working hours end before they start")]
    InvertedWorkingHours,
    #[error("id already used by an earlier entity in the batch")]
    DuplicateId,
}

/// One excluded entity and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub entity: EntityRef,
    pub kind: ValidationErrorKind,
}

impl ValidationIssue {
    pub fn job(id: &str, kind: ValidationErrorKind) -> Self {
        Self {
            entity: EntityRef::Job(id.to_string()),
            kind,
        }
    }

    pub fn crew(id: &str, kind: ValidationErrorKind) -> Self {
        Self {
            entity: EntityRef::Crew(id.to_string()),
            kind,
        }
    }
}

/// Structural problems with a single job snapshot.
pub fn job_issues(job: &Job) -> Vec<ValidationErrorKind> {
    let mut issues = Vec::new();

    if job.estimated_duration_minutes <= 0 {
        issues.push(ValidationErrorKind::NonPositiveDuration);
    }
    if job.time_window.is_inverted() {
        issues.push(ValidationErrorKind::InvertedTimeWindow);
    }
    if !job.location.coordinate.in_range() {
        issues.push(ValidationErrorKind::CoordinateOutOfRange);
    }

    issues
}

/// Structural problems with a single crew snapshot.
pub fn crew_issues(crew: &Crew) -> Vec<ValidationErrorKind> {
    let mut issues = Vec::new();

    if crew.vehicle.fuel_efficiency <= 0.0 {
        issues.push(ValidationErrorKind::NonPositiveFuelEfficiency);
    }
    if crew.vehicle.capacity_jobs == 0 {
        issues.push(ValidationErrorKind::ZeroJobCapacity);
    }
    if crew.working_hours.start >= crew.working_hours.end {
        issues.push(ValidationErrorKind::InvertedWorkingHours);
    }
    if !crew.home_base.coordinate.in_range() {
        issues.push(ValidationErrorKind::CoordinateOutOfRange);
    }

    issues
}

/// Tracks ids seen so far in a batch; repeats are rejected.
#[derive(Debug, Default)]
pub struct IdRegistry {
    seen: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id`, returning false if an earlier entity already claimed it.
    pub fn claim(&mut self, id: &str) -> bool {
        self.seen.insert(id.to_string())
    }
}
