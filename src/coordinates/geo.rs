//! Geodetic positions on the spherical Earth model
//!
//! Latitude and longitude are stored in degrees. Elevation is in meters above
//! the reference sphere of radius [`EARTH_MSL`](crate::constants::EARTH_MSL).
//! Nothing in this crate requires validated positions, but parsers and other
//! callers at the boundary can use the validators here.

use crate::constants::{MAX_ALT, MAX_ELEV, MIN_ALT, MIN_ELEV};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPos2 {
    pub lat: f64,
    pub lon: f64,
}

/// Latitude/longitude in degrees plus elevation in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPos3 {
    pub lat: f64,
    pub lon: f64,
    pub elev: f64,
}

impl GeoPos2 {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPos2 { lat, lon }
    }

    /// Lifts the position to the given elevation
    pub fn with_elev(&self, elev: f64) -> GeoPos3 {
        GeoPos3::new(self.lat, self.lon, elev)
    }

    /// True if both latitude and longitude are within range
    pub fn is_valid(&self) -> bool {
        is_valid_lat(self.lat) && is_valid_lon(self.lon)
    }
}

impl GeoPos3 {
    pub fn new(lat: f64, lon: f64, elev: f64) -> Self {
        GeoPos3 { lat, lon, elev }
    }

    /// Drops the elevation
    pub fn to_geo2(&self) -> GeoPos2 {
        GeoPos2::new(self.lat, self.lon)
    }

    /// True if latitude, longitude and elevation are within the default
    /// limits
    pub fn is_valid(&self) -> bool {
        self.is_valid_within(&ElevationLimits::default())
    }

    /// Like [`GeoPos3::is_valid`] with a caller-supplied elevation window
    pub fn is_valid_within(&self, limits: &ElevationLimits) -> bool {
        is_valid_lat(self.lat) && is_valid_lon(self.lon) && limits.contains(self.elev)
    }
}

impl From<GeoPos3> for GeoPos2 {
    fn from(pos: GeoPos3) -> Self {
        pos.to_geo2()
    }
}

/// Inclusive elevation window in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationLimits {
    pub min: f64,
    pub max: f64,
}

impl ElevationLimits {
    pub fn new(min: f64, max: f64) -> Self {
        ElevationLimits { min, max }
    }

    pub fn contains(&self, elev: f64) -> bool {
        elev >= self.min && elev <= self.max
    }
}

impl Default for ElevationLimits {
    fn default() -> Self {
        Self::new(MIN_ELEV, MAX_ELEV)
    }
}

pub fn is_valid_lat(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_lon(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

pub fn is_valid_elev(elev: f64) -> bool {
    ElevationLimits::default().contains(elev)
}

pub fn is_valid_alt(alt: f64) -> bool {
    (MIN_ALT..=MAX_ALT).contains(&alt)
}

/// True heading in degrees, 360 included
pub fn is_valid_hdg(hdg: f64) -> bool {
    (0.0..=360.0).contains(&hdg)
}
