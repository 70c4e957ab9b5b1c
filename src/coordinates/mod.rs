pub mod geo;
pub mod vector;

pub use geo::{ElevationLimits, GeoPos2, GeoPos3};
pub use vector::{Vect2, Vect3};
