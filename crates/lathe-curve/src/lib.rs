#![warn(missing_docs)]

//! Profile curves for the lathe sketching pipeline.
//!
//! A [`ProfileCurve`] collects pointer samples, drops samples that sit too
//! close to the previous one, and refits a Catmull-Rom spline through the
//! accepted points once there are enough of them. Evaluation is a cheap
//! piecewise-linear lookup over the dense fitted samples, so the surface
//! builder can query it once per grid row without refitting.
//!
//! # Example
//!
//! ```
//! use lathe_curve::{Profile, ProfileCurve};
//! use lathe_math::Point3;
//!
//! let mut curve = ProfileCurve::new(Point3::new(1.0, 0.0, 0.0));
//! curve.add_point(Point3::new(2.0, 1.25, 0.0));
//! curve.add_point(Point3::new(2.0, 3.75, 0.0));
//! curve.add_point(Point3::new(1.0, 5.0, 0.0));
//!
//! assert_eq!(curve.fitted_samples().unwrap().len(), 31);
//! assert_eq!(curve.point_at(1.0), Point3::new(1.0, 5.0, 0.0));
//! ```

mod catmull_rom;
mod profile;

pub use catmull_rom::{catmull_rom_point, fit_catmull_rom};
pub use profile::{sample_polyline, CurveSettings, Profile, ProfileCurve};

use thiserror::Error;

/// Errors from curve configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Minimum point spacing is negative or not finite.
    #[error("invalid minimum point spacing: {0}")]
    InvalidSpacing(f64),

    /// Spline subdivision count must be at least one.
    #[error("spline subdivisions must be at least 1, got {0}")]
    InvalidSubdivisions(u32),
}
