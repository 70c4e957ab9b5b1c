//! Navgeom: spherical-Earth geodesy and flat-plane projection math
//!
//! This crate provides the vector algebra and projection engine used by
//! navigation logic: conversion between geodetic positions and Earth-centered
//! Cartesian vectors, sphere and line intersections, rotation-based coordinate
//! translation, and orthographic, gnomonic, stereographic and Lambert
//! conformal conic projections.
//!
//! The Earth is modelled as a perfect sphere of radius
//! [`constants::EARTH_MSL`], so results are unsuitable for surveying-grade
//! work.
//!
//! ```rust
//! use navgeom::{FlatPlaneProjection, GeoPos2, PlaneProjection};
//!
//! let proj = FlatPlaneProjection::gnomonic(GeoPos2::new(50.0, 14.0), 0.0);
//! let plane = proj.geo_to_plane(GeoPos2::new(50.5, 14.5)).unwrap();
//! let back = proj.plane_to_geo(plane).unwrap().unwrap();
//! assert!((back.lat - 50.5).abs() < 1e-6);
//! assert!((back.lon - 14.5).abs() < 1e-6);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod geodesy;
pub mod intersect;
pub mod matrix;
pub mod projection;
pub mod tiling;

// Re-export commonly used types
pub use coordinates::{ElevationLimits, GeoPos2, GeoPos3, Vect2, Vect3};
pub use geodesy::{gc_distance, gc_point_hdg, geo_to_vect, vect_to_geo};
pub use intersect::{vect2_intersect, vect_sphere_intersect, SphereIntersection};
pub use projection::{FlatPlaneProjection, GeoTranslate, LambertConformalConic, PlaneProjection};
pub use tiling::{lat_subdivisions, lon_subdivisions};

/// Main error type for the navgeom library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// Zero-length vectors, parallel lines, zero projection distance and
    /// other inputs with no well-defined geometry
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested operation is not provided by this transform
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type for navgeom operations
pub type Result<T> = std::result::Result<T, GeomError>;
