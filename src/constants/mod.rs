//! Constants module for spherical-Earth calculations

use std::f64::consts::PI;

// Earth model
/// Mean sea level radius of the spherical Earth model in meters
///
/// Every conversion in this crate uses this value; there is no other Earth
/// radius.
pub const EARTH_MSL: f64 = 6_371_200.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Validation limits
/// Minimum allowable elevation AMSL of anything, in meters
pub const MIN_ELEV: f64 = -2_000.0;
/// Maximum allowable elevation AMSL of anything, in meters
pub const MAX_ELEV: f64 = 30_000.0;
/// Minimum allowable altitude AMSL of anything, in meters
pub const MIN_ALT: f64 = -2_000.0;
/// Maximum allowable altitude AMSL of anything, in meters
pub const MAX_ALT: f64 = 100_000.0;

// Numeric tolerances
/// Stand-in for the distance from the polar axis when a vector lies on it
pub const POLE_EPSILON: f64 = 1e-9;
/// Relative tolerance below which two 2D directions count as parallel
pub const PARALLEL_EPSILON: f64 = 1e-12;
/// Distance in meters within which a sphere intersection is considered to
/// coincide with a projection point
pub const PROJECTION_POINT_EPSILON: f64 = 1e-3;
