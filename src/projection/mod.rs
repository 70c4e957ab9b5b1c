//! Map projections between the sphere and a plane
//!
//! - [`GeoTranslate`]: rotation of geodetic coordinates onto a new origin
//! - [`FlatPlaneProjection`]: perspective projections onto a tangent plane
//! - [`LambertConformalConic`]: conic projection for navigation charts

pub mod flat_plane;
pub mod lambert;
pub mod translate;

pub use flat_plane::FlatPlaneProjection;
pub use lambert::LambertConformalConic;
pub use translate::GeoTranslate;

use crate::coordinates::{GeoPos2, Vect2};
use crate::Result;

/// A prepared, read-only mapping from the sphere to a plane
///
/// Implementors are immutable after construction and may be shared freely
/// between threads.
pub trait PlaneProjection: Send + Sync {
    /// Projects a position onto the plane, or `None` if it has no image
    fn geo_to_plane(&self, pos: GeoPos2) -> Option<Vect2>;

    /// Back-projects a plane point onto the sphere
    ///
    /// `Ok(None)` means the point lies outside the projection's image. A
    /// projection without an inverse returns [`crate::GeomError::Unsupported`].
    fn plane_to_geo(&self, p: Vect2) -> Result<Option<GeoPos2>>;

    fn geo_to_plane_batch(&self, positions: &[GeoPos2]) -> Vec<Option<Vect2>> {
        positions.iter().map(|pos| self.geo_to_plane(*pos)).collect()
    }
}
