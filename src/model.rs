//! Domain snapshot types consumed and produced by the optimizer.
//!
//! These are plain data shapes: the calling scheduler owns the entities and
//! hands the optimizer fresh copies per run. Everything derives serde so the
//! same shapes can cross an RPC boundary unchanged.

use jiff::civil::{DateTime, Time};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
///
/// Valid latitudes are [-90, 90] and longitudes [-180, 180]; the range is
/// enforced by input validation, not by the distance math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// What a physical point is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Depot,
    Customer,
    SupplyStop,
}

/// A named physical point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub kind: LocationKind,
}

/// Service window bounds for one job. `earliest <= latest` is required input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest: DateTime,
    pub latest: DateTime,
}

impl TimeWindow {
    pub fn new(earliest: DateTime, latest: DateTime) -> Self {
        Self { earliest, latest }
    }

    pub fn is_inverted(&self) -> bool {
        self.earliest > self.latest
    }
}

/// Job urgency, ordinal from least to most time-critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

impl Priority {
    /// Multiplier applied to distance when scoring candidates.
    ///
    /// Lower weight pulls a job earlier in greedy selection, so an urgent job
    /// beats a normal one at equal distance and can beat it at up to ~1.8x
    /// the distance.
    pub fn selection_weight(&self) -> f64 {
        match self {
            Priority::Urgent => 0.5,
            Priority::High => 0.7,
            Priority::Normal => 0.9,
            Priority::Low => 1.0,
        }
    }
}

/// Assignment lifecycle of a job. Only `Pending` jobs are candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
}

/// One unit of billable work at a customer location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub customer_name: String,
    pub location: Location,
    /// On-site service time. Must be positive.
    pub estimated_duration_minutes: i32,
    pub priority: Priority,
    pub time_window: TimeWindow,
    /// Skills the crew must cover. Missing on the wire means "none required".
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub status: JobStatus,
}

/// The crew's vehicle, as far as routing cares about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Distance units per fuel unit. Must be positive.
    pub fuel_efficiency: f64,
    /// Hard ceiling on jobs per day for this vehicle. Must be positive.
    pub capacity_jobs: usize,
}

/// Daily shift bounds. Only `start` anchors the route; `end` is carried for
/// the calling scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: Time,
    pub end: Time,
}

/// One mobile work unit: a vehicle, a skill set, and a home depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    pub id: String,
    pub name: String,
    pub vehicle: Vehicle,
    pub working_hours: WorkingHours,
    pub home_base: Location,
    #[serde(default)]
    pub skills: Vec<String>,
}
