//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data: real Miami metro locations (from
//! OpenStreetMap) grouped by area, for building believable fleet scenarios.

pub mod miami_locations;

pub use miami_locations::*;
