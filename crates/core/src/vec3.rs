//! Vector type alias for 3D positions and extents.

use nalgebra::Vector3;

/// 3D vector type for world positions, cell centers, spacing and extents.
///
/// Reservoir coordinates span kilometres laterally and metres vertically,
/// so this uses `f64` rather than `f32`.
pub type Vec3 = Vector3<f64>;
