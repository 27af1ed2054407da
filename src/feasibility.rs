//! Whether a job can be appended to a crew's in-progress route.
//!
//! Two gates: the crew must cover every required skill, and the job must be
//! reachable and serviceable inside its time window. A crew arriving before
//! the window opens waits; service never starts before `earliest`.

use jiff::SignedDuration;
use jiff::civil::DateTime;

use crate::model::{Coordinate, Crew, Job};
use crate::travel::{TravelLeg, TravelModel};

/// Fuzzy skill comparison: either string containing the other counts.
///
/// Permissive on purpose — "clean" on a crew satisfies "deep_clean" on a job
/// and vice versa. Skill vocabularies are free-form strings owned by the
/// calling service.
pub fn skill_matches(required: &str, offered: &str) -> bool {
    offered.contains(required) || required.contains(offered)
}

/// True when every required skill fuzzy-matches at least one crew skill.
pub fn crew_qualified(crew: &Crew, job: &Job) -> bool {
    job.required_skills
        .iter()
        .all(|required| crew.skills.iter().any(|offered| skill_matches(required, offered)))
}

/// A candidate insertion that passed both gates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibleVisit {
    /// Travel from the crew's current position to the job site.
    pub leg: TravelLeg,
    pub arrival: DateTime,
    /// `max(arrival, earliest)` — early arrivals wait out the window.
    pub service_start: DateTime,
    /// When the crew is free again.
    pub departure: DateTime,
}

/// Evaluate appending `job` to the crew's route from position `at` at `now`.
///
/// Returns `None` when the crew lacks a required skill or the job cannot be
/// started and finished by the window's `latest` bound.
pub fn check<M: TravelModel>(
    crew: &Crew,
    job: &Job,
    at: Coordinate,
    now: DateTime,
    travel: &M,
) -> Option<FeasibleVisit> {
    if !crew_qualified(crew, job) {
        return None;
    }

    let leg = travel.leg(at, job.location.coordinate);
    let arrival = now.saturating_add(SignedDuration::from_mins(i64::from(leg.duration_minutes)));
    let service_start = arrival.max(job.time_window.earliest);
    let departure = service_start
        .saturating_add(SignedDuration::from_mins(i64::from(job.estimated_duration_minutes)));

    if service_start > job.time_window.latest || departure > job.time_window.latest {
        return None;
    }

    Some(FeasibleVisit {
        leg,
        arrival,
        service_start,
        departure,
    })
}
