//! Great-circle travel estimation.
//!
//! Straight-line distance plus an assumed urban driving speed. Ignores the
//! road network, which is fine for ranking nearby candidates; swap in a
//! different [`TravelModel`] if a real matrix becomes available.

use crate::model::Coordinate;

/// Average driving speed assumption for time estimation.
pub const AVERAGE_SPEED_MPH: f64 = 25.0;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two coordinates in miles.
///
/// Does not validate coordinate ranges; validation rejects malformed points
/// before they reach here.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Estimated driving time in whole minutes at the default urban speed.
pub fn travel_minutes(distance_miles: f64) -> i32 {
    minutes_at_speed(distance_miles, AVERAGE_SPEED_MPH)
}

fn minutes_at_speed(distance_miles: f64, speed_mph: f64) -> i32 {
    let hours = distance_miles / speed_mph;
    (hours * 60.0).round() as i32
}

/// One estimated travel leg between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelLeg {
    pub distance_miles: f64,
    pub duration_minutes: i32,
}

/// Provides distance and duration estimates for route legs.
///
/// The solver queries legs one at a time as the route grows, so providers
/// don't need to precompute a full matrix.
pub trait TravelModel {
    fn leg(&self, from: Coordinate, to: Coordinate) -> TravelLeg;
}

/// Haversine-based travel model.
///
/// Estimates travel time using straight-line distance and an assumed speed.
#[derive(Debug, Clone)]
pub struct HaversineModel {
    /// Assumed average driving speed in mph.
    pub speed_mph: f64,
}

impl Default for HaversineModel {
    fn default() -> Self {
        Self {
            speed_mph: AVERAGE_SPEED_MPH,
        }
    }
}

impl HaversineModel {
    pub fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }
}

impl TravelModel for HaversineModel {
    fn leg(&self, from: Coordinate, to: Coordinate) -> TravelLeg {
        let distance_miles = haversine_miles(from, to);
        TravelLeg {
            distance_miles,
            duration_minutes: minutes_at_speed(distance_miles, self.speed_mph),
        }
    }
}
