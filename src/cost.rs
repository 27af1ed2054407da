//! Route money math: fuel spend, revenue estimate, efficiency score.
//!
//! All of this is deliberately coarse. Revenue is a flat per-job figure and
//! labor is a flat per-route figure; the score ranks routes against each
//! other, it is not an accounting number.

/// Fuel spend for a leg or a whole route.
///
/// `fuel_efficiency` is distance units per fuel unit and must be positive;
/// crew validation guarantees that before any cost is computed.
pub fn fuel_cost(distance_miles: f64, fuel_efficiency: f64, fuel_price_per_unit: f64) -> f64 {
    (distance_miles / fuel_efficiency) * fuel_price_per_unit
}

/// Flat per-job revenue estimate for a route.
pub fn estimated_revenue(job_count: usize, average_job_value: f64) -> f64 {
    job_count as f64 * average_job_value
}

/// Revenue per unit of cost. Zero when the route has no cost to divide by.
pub fn route_efficiency(estimated_revenue: f64, total_fuel_cost: f64, fixed_labor_estimate: f64) -> f64 {
    let denominator = total_fuel_cost + fixed_labor_estimate;
    if denominator > 0.0 {
        estimated_revenue / denominator
    } else {
        0.0
    }
}
