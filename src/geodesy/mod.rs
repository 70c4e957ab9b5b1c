//! Conversions between geodetic positions and Earth-centered vectors, and
//! great-circle measurements on the spherical Earth.
//!
//! The Earth is treated as a perfect sphere of radius
//! [`EARTH_MSL`](crate::constants::EARTH_MSL). This is adequate for
//! navigation display and route geometry, not for surveying.
//!
//! In 3-space the axes originate at the globe's center:
//! - x: through latitude 0°, longitude +90°
//! - y: through latitude 0°, longitude 0°
//! - z: through latitude +90°

use crate::constants::{DEG2RAD, EARTH_MSL, POLE_EPSILON, RAD2DEG};
use crate::coordinates::{GeoPos2, GeoPos3, Vect3};
use crate::{GeomError, Result};

/// Converts a geodetic position into a vector from the Earth's center
///
/// # Mathematical Conversion
///
/// - `R = EARTH_MSL + elev`
/// - `x = R * cos(lat) * sin(lon)`
/// - `y = R * cos(lat) * cos(lon)`
/// - `z = R * sin(lat)`
///
/// # Examples
///
/// ```rust
/// use navgeom::constants::EARTH_MSL;
/// use navgeom::{geo_to_vect, GeoPos3};
///
/// let v = geo_to_vect(GeoPos3::new(0.0, 0.0, 0.0));
/// assert_eq!(v.x, 0.0);
/// assert_eq!(v.y, EARTH_MSL);
/// assert_eq!(v.z, 0.0);
/// ```
pub fn geo_to_vect(pos: GeoPos3) -> Vect3 {
    let lat_rad = pos.lat * DEG2RAD;
    let lon_rad = pos.lon * DEG2RAD;

    // Distance from the center at the given elevation
    let r = EARTH_MSL + pos.elev;
    // Radius of the parallel at this latitude
    let r0 = r * lat_rad.cos();

    Vect3 {
        x: r0 * lon_rad.sin(),
        y: r0 * lon_rad.cos(),
        z: r * lat_rad.sin(),
    }
}

/// Converts a vector from the Earth's center back into a geodetic position
///
/// On the polar axis the longitude is undefined and comes out as 0°; the
/// distance from the axis is clamped to [`POLE_EPSILON`] so the latitude
/// still resolves to ±90°.
pub fn vect_to_geo(v: Vect3) -> GeoPos3 {
    let mut r0 = (v.x * v.x + v.y * v.y).sqrt();
    let r = v.abs();
    if r0 == 0.0 {
        r0 = POLE_EPSILON;
    }

    let lat_rad = (v.z / r0).atan();
    // atan2 folds the quadrant correction for y < 0 into one call
    let lon_rad = v.x.atan2(v.y);

    GeoPos3 {
        lat: lat_rad * RAD2DEG,
        lon: lon_rad * RAD2DEG,
        elev: r - EARTH_MSL,
    }
}

/// Surface vector of a two-dimensional position
pub(crate) fn surface_vect(pos: GeoPos2) -> Vect3 {
    geo_to_vect(pos.with_elev(0.0))
}

/// Great-circle distance between two points in meters
///
/// The distance follows from the chord between the two surface vectors:
/// `2 * asin(|chord| / 2R) * R`.
///
/// # Examples
///
/// ```rust
/// use navgeom::constants::EARTH_MSL;
/// use navgeom::{gc_distance, GeoPos2};
/// use std::f64::consts::FRAC_PI_2;
///
/// let d = gc_distance(GeoPos2::new(0.0, 0.0), GeoPos2::new(0.0, 90.0));
/// assert!((d - FRAC_PI_2 * EARTH_MSL).abs() < 1e-6);
/// ```
pub fn gc_distance(start: GeoPos2, end: GeoPos2) -> f64 {
    let chord = (surface_vect(end) - surface_vect(start)).abs();
    let alpha = (chord / 2.0 / EARTH_MSL).min(1.0).asin();
    2.0 * alpha * EARTH_MSL
}

/// True heading of the great-circle track from `start` to `end`, measured at
/// the point `fraction` of the way along it
///
/// `fraction = 0.0` gives the initial course at `start` and `1.0` the final
/// course arriving at `end`. The result is in degrees in `[0, 360)`.
///
/// # Errors
///
/// - [`GeomError::InvalidParameter`] if `fraction` is outside `[0, 1]`
/// - [`GeomError::DegenerateInput`] if the endpoints coincide or are
///   antipodal (no unique great circle), or the track point lies on a pole
///   (no defined north)
pub fn gc_point_hdg(start: GeoPos2, end: GeoPos2, fraction: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(GeomError::InvalidParameter(format!(
            "great-circle fraction {fraction} outside [0, 1]"
        )));
    }

    let s = surface_vect(start) * (1.0 / EARTH_MSL);
    let e = surface_vect(end) * (1.0 / EARTH_MSL);
    let norm = s.cross(&e);
    let sin_omega = norm.abs();
    if sin_omega < 1e-12 {
        return Err(GeomError::DegenerateInput(format!(
            "no unique great circle between {start:?} and {end:?}"
        )));
    }

    // Slerp to the track point
    let omega = sin_omega.atan2(s.dot(&e));
    let p = (s * ((1.0 - fraction) * omega).sin() + e * (fraction * omega).sin())
        * (1.0 / sin_omega);

    let track = norm.cross(&p);
    let east = p.cross(&Vect3::new(0.0, 0.0, 1.0));
    let east_len = east.abs();
    if east_len < 1e-12 {
        return Err(GeomError::DegenerateInput(
            "track point lies on a pole, heading undefined".to_string(),
        ));
    }
    let east = east * (1.0 / east_len);
    let north = east.cross(&p);

    let hdg = track.dot(&east).atan2(track.dot(&north)) * RAD2DEG;
    log::trace!("gc_point_hdg: fraction={fraction} p={p:?} hdg={hdg}");
    Ok(hdg.rem_euclid(360.0))
}
