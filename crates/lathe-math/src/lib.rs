#![warn(missing_docs)]

//! Math types for the lathe sketching pipeline.
//!
//! Thin aliases over nalgebra plus the few scalar helpers shared by the
//! curve, surface and drawing crates.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Linear interpolation between two points, `a + (b - a) * t`.
///
/// `t` is not clamped.
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}

/// Distance from `p` to the world Y axis (the revolution axis).
pub fn axis_distance(p: &Point3) -> f64 {
    p.x.hypot(p.z)
}

/// Flatten a point into three `f32` components for GPU-style buffers.
pub fn to_f32_array(p: &Point3) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in world units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 world units).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, -2.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_relative_eq!(lerp(&a, &b, 1.0), b);
        assert_relative_eq!(lerp(&a, &b, 0.5), Point3::new(2.0, 2.0, -1.0));
    }

    #[test]
    fn test_axis_distance() {
        assert_relative_eq!(axis_distance(&Point3::new(3.0, 10.0, 4.0)), 5.0);
        assert_eq!(axis_distance(&Point3::new(0.0, 7.0, 0.0)), 0.0);
    }

    #[test]
    fn test_tolerance_is_zero() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(-1e-10));
        assert!(tol.is_zero(0.0));
        assert!(!tol.is_zero(1e-6));
        assert!(!Tolerance { linear: 1e-12 }.is_zero(1e-10));
    }
}
