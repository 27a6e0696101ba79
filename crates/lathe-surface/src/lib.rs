#![warn(missing_docs)]

//! Lathe surfaces for the sketching pipeline.
//!
//! A [`RevolutionSurface`] samples a profile at a fixed number of rows,
//! sweeps every sample around the world Y axis, and keeps the resulting
//! structured grid in flat `f32` buffers ready for upload. The index buffer
//! is built once; later profile changes rewrite positions and normals in
//! place.
//!
//! # Example
//!
//! ```
//! use lathe_curve::ProfileCurve;
//! use lathe_math::Point3;
//! use lathe_surface::RevolutionSurface;
//! use std::f64::consts::PI;
//!
//! let mut curve = ProfileCurve::new(Point3::new(1.0, 0.0, 0.0));
//! curve.add_point(Point3::new(1.0, 2.0, 0.0));
//!
//! let mut surface = RevolutionSurface::new(&curve, 16, 24, 2.0 * PI).unwrap();
//! assert_eq!(surface.num_triangles(), 15 * 23 * 2);
//!
//! curve.add_point(Point3::new(1.5, 3.0, 0.0));
//! surface.set_curve(&curve);
//! assert_eq!(surface.generation(), 2);
//! ```

mod grid;
mod normals;
mod params;
mod surface;

pub use grid::grid_indices;
pub use normals::compute_vertex_normals;
pub use params::SurfaceParams;
pub use surface::RevolutionSurface;

use thiserror::Error;

/// Errors from surface construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The grid would be degenerate: fewer than two rows or columns, a
    /// sweep outside (0, 2π], or more vertices than `u32` indices address.
    #[error("invalid surface dimension {rows}x{columns} over {sweep} radians")]
    InvalidDimension {
        /// Samples along the profile.
        rows: usize,
        /// Samples around the axis.
        columns: usize,
        /// Angular sweep in radians.
        sweep: f64,
    },
}
