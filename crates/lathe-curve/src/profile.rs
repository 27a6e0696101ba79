//! Sketched profile curves.

use lathe_math::{lerp, Point3};

use crate::catmull_rom::fit_catmull_rom;
use crate::CurveError;

/// Point-sampling contract between a profile and whatever consumes it.
///
/// `t` runs from `0.0` (first point) to `1.0` (last point). Values outside
/// that range are clamped.
pub trait Profile {
    /// Evaluate the profile at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;
}

/// Piecewise-linear evaluation over an ordered point sequence.
///
/// The parameter is mapped to a fractional index `s = (len - 1) * t` and the
/// two bracketing points are blended. `t ≤ 0` yields the first point and
/// `t ≥ 1` yields the last one exactly. An empty slice yields the origin.
pub fn sample_polyline(points: &[Point3], t: f64) -> Point3 {
    let n = points.len();
    match n {
        0 => Point3::origin(),
        1 => points[0],
        _ => {
            // NaN falls through to the first point.
            if !(t > 0.0) {
                return points[0];
            }
            if t >= 1.0 {
                return points[n - 1];
            }
            let s = (n - 1) as f64 * t;
            let j = (s.floor() as usize).min(n - 2);
            lerp(&points[j], &points[j + 1], s - j as f64)
        }
    }
}

impl Profile for [Point3] {
    fn point_at(&self, t: f64) -> Point3 {
        sample_polyline(self, t)
    }
}

impl Profile for Vec<Point3> {
    fn point_at(&self, t: f64) -> Point3 {
        sample_polyline(self, t)
    }
}

/// Fitting parameters for a [`ProfileCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    min_spacing: f64,
    subdivisions: u32,
}

impl CurveSettings {
    /// Default minimum distance between accepted points.
    pub const DEFAULT_MIN_SPACING: f64 = 0.2;
    /// Default number of spline samples per control span.
    pub const DEFAULT_SUBDIVISIONS: u32 = 10;

    /// Create validated settings.
    ///
    /// # Errors
    ///
    /// - `InvalidSpacing` if `min_spacing` is negative or not finite
    /// - `InvalidSubdivisions` if `subdivisions` is zero
    pub fn new(min_spacing: f64, subdivisions: u32) -> Result<Self, CurveError> {
        if !min_spacing.is_finite() || min_spacing < 0.0 {
            return Err(CurveError::InvalidSpacing(min_spacing));
        }
        if subdivisions == 0 {
            return Err(CurveError::InvalidSubdivisions(subdivisions));
        }
        Ok(Self {
            min_spacing,
            subdivisions,
        })
    }

    /// Points closer than this to the last accepted point are dropped.
    pub fn min_spacing(&self) -> f64 {
        self.min_spacing
    }

    /// Spline samples emitted per span between two control points.
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            min_spacing: Self::DEFAULT_MIN_SPACING,
            subdivisions: Self::DEFAULT_SUBDIVISIONS,
        }
    }
}

/// A freehand profile curve built up one pointer sample at a time.
///
/// The curve always holds at least one control point. Once four or more
/// points have been accepted, a Catmull-Rom spline is refitted through all
/// of them on every accepted point and evaluation switches from the raw
/// control polygon to the dense fitted samples.
#[derive(Debug, Clone)]
pub struct ProfileCurve {
    control_points: Vec<Point3>,
    fitted: Option<Vec<Point3>>,
    settings: CurveSettings,
}

impl ProfileCurve {
    /// Control points needed before a spline is fitted.
    pub const MIN_FIT_POINTS: usize = 4;

    /// Start a curve at `p` with default settings.
    pub fn new(p: Point3) -> Self {
        Self::with_settings(p, CurveSettings::default())
    }

    /// Start a curve at `p` with explicit settings.
    pub fn with_settings(p: Point3, settings: CurveSettings) -> Self {
        Self {
            control_points: vec![p],
            fitted: None,
            settings,
        }
    }

    /// Append a control point.
    ///
    /// Points closer than the minimum spacing to the last accepted point are
    /// ignored and `false` is returned. Otherwise the point is kept, the
    /// spline is refitted when enough points exist, and `true` is returned.
    pub fn add_point(&mut self, p: Point3) -> bool {
        let last = self.last_point();
        if (p - last).norm() < self.settings.min_spacing {
            return false;
        }

        self.control_points.push(p);
        if self.control_points.len() >= Self::MIN_FIT_POINTS {
            self.fitted = Some(fit_catmull_rom(
                &self.control_points,
                self.settings.subdivisions,
            ));
        }
        true
    }

    /// Accepted control points, in insertion order.
    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Dense spline samples, if the curve has been fitted yet.
    pub fn fitted_samples(&self) -> Option<&[Point3]> {
        self.fitted.as_deref()
    }

    /// The sequence evaluation runs over: fitted samples when present,
    /// otherwise the raw control points.
    pub fn active_points(&self) -> &[Point3] {
        self.fitted_samples().unwrap_or(&self.control_points)
    }

    /// Whether a spline has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The most recently accepted control point.
    pub fn last_point(&self) -> Point3 {
        // Never empty: construction seeds one point and nothing removes any.
        self.control_points[self.control_points.len() - 1]
    }

    /// Number of accepted control points.
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Always `false`; a curve is created with one point and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Fitting parameters of this curve.
    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    /// `count` evenly spaced points along the curve, ends included.
    pub fn sample(&self, count: usize) -> Vec<Point3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..count)
                .map(|i| self.point_at(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }
}

impl Profile for ProfileCurve {
    fn point_at(&self, t: f64) -> Point3 {
        sample_polyline(self.active_points(), t)
    }
}
