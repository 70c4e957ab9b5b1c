//! Intersection solvers
//!
//! - `sphere`: where a (possibly bounded) line in 3-space meets a sphere
//! - `line`: where two (possibly bounded) lines in 2-space meet

pub mod line;
pub mod sphere;

pub use line::vect2_intersect;
pub use sphere::{vect_sphere_intersect, SphereIntersection};
