//! Sphere tiling helpers
//!
//! A sphere is tiled into bands of latitude, each band cut into cells of
//! longitude. Both counts are chosen so that no cell edge is longer than
//! the requested partition size.

use num_traits::ToPrimitive;
use std::f64::consts::{PI, TAU};

use crate::constants::DEG2RAD;
use crate::coordinates::geo::is_valid_lat;
use crate::{GeomError, Result};

fn check_partition(radius: f64, partition: f64) -> Result<()> {
    if !(partition > 0.0) {
        return Err(GeomError::InvalidParameter(format!(
            "partition size must be positive, got {partition}"
        )));
    }
    if !(radius >= partition) {
        return Err(GeomError::InvalidParameter(format!(
            "radius {radius} is smaller than partition size {partition}"
        )));
    }
    Ok(())
}

fn to_count(value: f64) -> Result<u32> {
    value.ceil().to_u32().ok_or_else(|| {
        GeomError::InvalidParameter(format!("subdivision count {value} out of range"))
    })
}

/// Number of latitude subdivisions for a sphere of `radius`, counting both
/// poles
///
/// # Errors
///
/// [`GeomError::InvalidParameter`] if `partition` is not positive or is
/// larger than `radius`, or if the count does not fit in a `u32`.
///
/// # Examples
///
/// ```rust
/// use navgeom::lat_subdivisions;
///
/// assert_eq!(lat_subdivisions(1.0, 1.0).unwrap(), 5);
/// ```
pub fn lat_subdivisions(radius: f64, partition: f64) -> Result<u32> {
    check_partition(radius, partition)?;
    to_count(radius * PI / partition)?
        .checked_add(1)
        .ok_or_else(|| {
            GeomError::InvalidParameter(format!(
                "latitude subdivisions for radius {radius} overflow a u32"
            ))
        })
}

/// Number of longitude subdivisions along the parallel at `lat` degrees
///
/// Always at least 1, including at the poles.
///
/// # Errors
///
/// [`GeomError::InvalidParameter`] if `lat` is outside [-90, 90], or on the
/// same partition rules as [`lat_subdivisions`].
pub fn lon_subdivisions(radius: f64, lat: f64, partition: f64) -> Result<u32> {
    if !is_valid_lat(lat) {
        return Err(GeomError::InvalidParameter(format!(
            "latitude {lat} outside [-90, 90]"
        )));
    }
    check_partition(radius, partition)?;
    let r = (lat * DEG2RAD).cos() * radius;
    to_count(TAU * r / partition).map(|n| n.max(1))
}
