//! Greedy route construction and fleet orchestration.
//!
//! One run assigns pending jobs to crews for a single planning date. Each
//! crew in turn repeatedly takes the feasible job with the lowest
//! priority-weighted distance from its current position, then drives home.
//! This is a heuristic: single pass, no improvement phase, no backtracking.
//! Crews earlier in the caller's list get first pick of the shared pool.

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cost;
use crate::feasibility::{self, FeasibleVisit};
use crate::model::{Coordinate, Crew, Job, JobStatus, Location};
use crate::travel::TravelModel;
use crate::validation::{self, IdRegistry, ValidationErrorKind, ValidationIssue};

/// Tunable parameters for one optimization run.
#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Currency units per fuel unit.
    pub fuel_price_per_unit: f64,
    /// Run-level ceiling on jobs per crew. The effective ceiling is the
    /// smaller of this and the crew vehicle's own capacity.
    pub per_crew_job_cap: usize,
    /// Flat per-route labor cost used in the efficiency denominator.
    pub fixed_labor_estimate: f64,
    /// Flat per-job revenue used in the efficiency numerator.
    pub average_job_value: f64,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            fuel_price_per_unit: 3.5,
            per_crew_job_cap: 6,
            fixed_labor_estimate: 100.0,
            average_job_value: 200.0,
        }
    }
}

impl OptimizeOptions {
    /// A bad tunable silently corrupts every cost in the run, so this fails
    /// the whole call instead of excluding entities.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fuel_price_per_unit < 0.0 {
            return Err(ConfigError::NegativeFuelPrice(self.fuel_price_per_unit));
        }
        if self.per_crew_job_cap == 0 {
            return Err(ConfigError::ZeroJobCap);
        }
        if self.fixed_labor_estimate < 0.0 {
            return Err(ConfigError::NegativeLaborEstimate(self.fixed_labor_estimate));
        }
        if self.average_job_value < 0.0 {
            return Err(ConfigError::NegativeJobValue(self.average_job_value));
        }
        Ok(())
    }
}

/// A tunable parameter outside its valid domain. Aborts the run before any
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("fuel price per unit must be non-negative, got {0}")]
    NegativeFuelPrice(f64),
    #[error("per-crew job cap must be at least 1")]
    ZeroJobCap,
    #[error("fixed labor estimate must be non-negative, got {0}")]
    NegativeLaborEstimate(f64),
    #[error("average job value must be non-negative, got {0}")]
    NegativeJobValue(f64),
}

/// One directed travel leg in a finished route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub from: Location,
    pub to: Location,
    pub distance_miles: f64,
    pub duration_minutes: i32,
    pub fuel_cost: f64,
}

/// The plan for one crew on the planning date.
///
/// A non-empty route has one segment per job (the approach leg) plus a
/// closing leg back to the crew's home base. `end_time` is `start_time`
/// plus `total_duration_minutes`, which counts travel, service, and any
/// waiting for a window to open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedRoute {
    pub crew_id: String,
    pub segments: Vec<RouteSegment>,
    pub jobs: Vec<Job>,
    pub total_distance_miles: f64,
    pub total_duration_minutes: i32,
    pub total_fuel_cost: f64,
    pub estimated_revenue: f64,
    pub efficiency: f64,
    pub start_time: DateTime,
    pub end_time: DateTime,
}

/// Why a job went unassigned this run. Not an error; the job stays pending
/// for a later run or manual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignedReason {
    /// No crew in the fleet covers the job's required skills.
    NoQualifiedCrew,
    /// At least one crew qualifies, but none could fit the time window.
    NoFeasibleWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnassignedJob {
    pub job_id: String,
    pub reason: UnassignedReason,
}

/// Fleet-wide totals over the returned routes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FleetStats {
    pub jobs_covered: usize,
    pub jobs_uncovered: usize,
    pub total_distance_miles: f64,
    pub total_fuel_cost: f64,
    pub total_revenue: f64,
    pub average_efficiency: f64,
}

/// Everything one optimization run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetPlan {
    /// Non-empty routes only; crews that took no job are omitted.
    pub routes: Vec<OptimizedRoute>,
    pub stats: FleetStats,
    pub unassigned: Vec<UnassignedJob>,
    /// Entities excluded by validation. The run continued without them.
    pub issues: Vec<ValidationIssue>,
}

/// The shared candidate pool for one run.
///
/// Owned by exactly one crew's builder at a time and handed on with the
/// consumed jobs removed, so assignment by one crew can never alias another
/// crew's view. Pool order preserves caller order, which is what makes the
/// tie-break deterministic.
#[derive(Debug)]
struct JobPool {
    jobs: Vec<Job>,
}

impl JobPool {
    fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    fn iter(&self) -> impl Iterator<Item = (usize, &Job)> {
        self.jobs.iter().enumerate()
    }

    fn take(&mut self, index: usize) -> Job {
        self.jobs.remove(index)
    }

    fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }
}

/// Assign routes for the given fleet and planning date.
///
/// Crews are processed in caller order and greedily deplete the shared job
/// pool in turn, so crew order affects the outcome; callers that care should
/// order crews deliberately. Inputs are never mutated. Invalid entities are
/// excluded and reported in the plan; a bad tunable fails the whole call.
pub fn optimize<M: TravelModel>(
    jobs: &[Job],
    crews: &[Crew],
    planning_date: Date,
    travel: &M,
    options: OptimizeOptions,
) -> Result<FleetPlan, ConfigError> {
    options.validate()?;

    let mut issues = Vec::new();
    let candidates = screen_jobs(jobs, &mut issues);
    let fleet = screen_crews(crews, &mut issues);

    info!(
        date = %planning_date,
        jobs = candidates.len(),
        crews = fleet.len(),
        excluded = issues.len(),
        "starting optimization run"
    );

    let mut pool = JobPool::new(candidates);
    let mut routes = Vec::new();
    for crew in &fleet {
        let (route, rest) = build_route(crew, pool, planning_date, travel, &options);
        pool = rest;
        if let Some(route) = route {
            routes.push(route);
        }
    }

    let unassigned: Vec<UnassignedJob> = pool
        .into_jobs()
        .iter()
        .map(|job| UnassignedJob {
            job_id: job.id.clone(),
            reason: unassigned_reason(job, &fleet),
        })
        .collect();

    let stats = fleet_stats(&routes, unassigned.len());
    info!(
        routes = routes.len(),
        covered = stats.jobs_covered,
        uncovered = stats.jobs_uncovered,
        "optimization run complete"
    );

    Ok(FleetPlan {
        routes,
        stats,
        unassigned,
        issues,
    })
}

/// Keep pending, structurally valid jobs; report the rest.
fn screen_jobs(jobs: &[Job], issues: &mut Vec<ValidationIssue>) -> Vec<Job> {
    let mut ids = IdRegistry::new();
    let mut candidates = Vec::new();

    for job in jobs {
        if job.status != JobStatus::Pending {
            continue;
        }
        if !ids.claim(&job.id) {
            warn!(job = %job.id, "excluding job with duplicate id");
            issues.push(ValidationIssue::job(&job.id, ValidationErrorKind::DuplicateId));
            continue;
        }
        let kinds = validation::job_issues(job);
        if kinds.is_empty() {
            candidates.push(job.clone());
        } else {
            warn!(job = %job.id, problems = ?kinds, "excluding invalid job");
            issues.extend(kinds.into_iter().map(|kind| ValidationIssue::job(&job.id, kind)));
        }
    }

    candidates
}

/// Keep structurally valid crews; report the rest.
fn screen_crews<'a>(crews: &'a [Crew], issues: &mut Vec<ValidationIssue>) -> Vec<&'a Crew> {
    let mut ids = IdRegistry::new();
    let mut fleet = Vec::new();

    for crew in crews {
        if !ids.claim(&crew.id) {
            warn!(crew = %crew.id, "excluding crew with duplicate id");
            issues.push(ValidationIssue::crew(&crew.id, ValidationErrorKind::DuplicateId));
            continue;
        }
        let kinds = validation::crew_issues(crew);
        if kinds.is_empty() {
            fleet.push(crew);
        } else {
            warn!(crew = %crew.id, problems = ?kinds, "excluding invalid crew");
            issues.extend(kinds.into_iter().map(|kind| ValidationIssue::crew(&crew.id, kind)));
        }
    }

    fleet
}

/// Build one crew's route, consuming jobs from the pool.
///
/// Returns the route (None if the crew took no job) and the pool with the
/// consumed jobs removed, ready for the next crew.
fn build_route<M: TravelModel>(
    crew: &Crew,
    mut pool: JobPool,
    planning_date: Date,
    travel: &M,
    options: &OptimizeOptions,
) -> (Option<OptimizedRoute>, JobPool) {
    let start_time = planning_date.to_datetime(crew.working_hours.start);
    let cap = options.per_crew_job_cap.min(crew.vehicle.capacity_jobs);

    let mut current_location = crew.home_base.clone();
    let mut current_time = start_time;
    let mut segments: Vec<RouteSegment> = Vec::new();
    let mut jobs: Vec<Job> = Vec::new();

    while jobs.len() < cap {
        let Some((index, visit)) =
            select_next(crew, &pool, current_location.coordinate, current_time, travel)
        else {
            break;
        };

        let job = pool.take(index);
        debug!(
            crew = %crew.id,
            job = %job.id,
            distance_miles = visit.leg.distance_miles,
            service_start = %visit.service_start,
            "assigned job"
        );

        segments.push(segment(
            current_location,
            job.location.clone(),
            visit.leg.distance_miles,
            visit.leg.duration_minutes,
            crew,
            options,
        ));
        current_location = job.location.clone();
        current_time = visit.departure;
        jobs.push(job);
    }

    if jobs.is_empty() {
        return (None, pool);
    }

    // Closing leg back to the depot.
    let home = travel.leg(current_location.coordinate, crew.home_base.coordinate);
    current_time =
        current_time.saturating_add(SignedDuration::from_mins(i64::from(home.duration_minutes)));
    segments.push(segment(
        current_location,
        crew.home_base.clone(),
        home.distance_miles,
        home.duration_minutes,
        crew,
        options,
    ));

    let total_distance_miles: f64 = segments.iter().map(|s| s.distance_miles).sum();
    let total_fuel_cost: f64 = segments.iter().map(|s| s.fuel_cost).sum();
    // Elapsed wall-clock, so waiting at an early arrival is counted.
    let total_duration_minutes = start_time.duration_until(current_time).as_mins() as i32;
    let estimated_revenue = cost::estimated_revenue(jobs.len(), options.average_job_value);
    let efficiency =
        cost::route_efficiency(estimated_revenue, total_fuel_cost, options.fixed_labor_estimate);

    let route = OptimizedRoute {
        crew_id: crew.id.clone(),
        segments,
        jobs,
        total_distance_miles,
        total_duration_minutes,
        total_fuel_cost,
        estimated_revenue,
        efficiency,
        start_time,
        end_time: current_time,
    };

    (Some(route), pool)
}

/// The feasible candidate with the lowest priority-weighted distance.
///
/// Strict `<` comparison over pool order keeps the first-encountered
/// candidate on ties, and pool order preserves caller order, so selection
/// is deterministic for identical input.
fn select_next<M: TravelModel>(
    crew: &Crew,
    pool: &JobPool,
    at: Coordinate,
    now: DateTime,
    travel: &M,
) -> Option<(usize, FeasibleVisit)> {
    let mut best: Option<(usize, FeasibleVisit, f64)> = None;

    for (index, job) in pool.iter() {
        let Some(visit) = feasibility::check(crew, job, at, now, travel) else {
            continue;
        };
        let weighted = visit.leg.distance_miles * job.priority.selection_weight();
        if best.as_ref().is_none_or(|(_, _, score)| weighted < *score) {
            best = Some((index, visit, weighted));
        }
    }

    best.map(|(index, visit, _)| (index, visit))
}

fn segment(
    from: Location,
    to: Location,
    distance_miles: f64,
    duration_minutes: i32,
    crew: &Crew,
    options: &OptimizeOptions,
) -> RouteSegment {
    let fuel = cost::fuel_cost(
        distance_miles,
        crew.vehicle.fuel_efficiency,
        options.fuel_price_per_unit,
    );
    RouteSegment {
        from,
        to,
        distance_miles,
        duration_minutes,
        fuel_cost: fuel,
    }
}

/// Coarse reason for the dispatcher: a skills gap reads very differently
/// from a capacity or timing squeeze.
fn unassigned_reason(job: &Job, fleet: &[&Crew]) -> UnassignedReason {
    if fleet.iter().any(|crew| feasibility::crew_qualified(crew, job)) {
        UnassignedReason::NoFeasibleWindow
    } else {
        UnassignedReason::NoQualifiedCrew
    }
}

fn fleet_stats(routes: &[OptimizedRoute], jobs_uncovered: usize) -> FleetStats {
    let jobs_covered = routes.iter().map(|r| r.jobs.len()).sum();
    let average_efficiency = if routes.is_empty() {
        0.0
    } else {
        routes.iter().map(|r| r.efficiency).sum::<f64>() / routes.len() as f64
    };

    FleetStats {
        jobs_covered,
        jobs_uncovered,
        total_distance_miles: routes.iter().map(|r| r.total_distance_miles).sum(),
        total_fuel_cost: routes.iter().map(|r| r.total_fuel_cost).sum(),
        total_revenue: routes.iter().map(|r| r.estimated_revenue).sum(),
        average_efficiency,
    }
}
