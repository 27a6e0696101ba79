//! Uniform Catmull-Rom spline fitting.

use lathe_math::Point3;

/// Evaluate one uniform Catmull-Rom span between `p1` and `p2` at `t ∈ [0, 1]`.
///
/// `p0` and `p3` are the neighbouring control points that shape the
/// tangents. The span passes through `p1` at `t = 0` and `p2` at `t = 1`.
pub fn catmull_rom_point(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3, t: f64) -> Point3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let c = 2.0 * p1.coords
        + (p2.coords - p0.coords) * t
        + (2.0 * p0.coords - 5.0 * p1.coords + 4.0 * p2.coords - p3.coords) * t2
        + (3.0 * p1.coords - p0.coords - 3.0 * p2.coords + p3.coords) * t3;

    Point3::from(c * 0.5)
}

/// Fit an open Catmull-Rom spline through `points`.
///
/// The end points are duplicated to supply the missing outer tangents, each
/// of the `points.len() - 1` spans is sampled `subdivisions` times, and the
/// last control point closes the sequence. The result holds
/// `(points.len() - 1) * subdivisions + 1` samples and starts and ends
/// exactly on the first and last control point.
///
/// Fewer than two points are returned unchanged.
pub fn fit_catmull_rom(points: &[Point3], subdivisions: u32) -> Vec<Point3> {
    if points.len() < 2 || subdivisions == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let at = |i: isize| points[i.clamp(0, last as isize) as usize];

    let mut samples = Vec::with_capacity(last * subdivisions as usize + 1);
    for seg in 0..last as isize {
        let (p0, p1, p2, p3) = (at(seg - 1), at(seg), at(seg + 1), at(seg + 2));
        for c in 0..subdivisions {
            let t = c as f64 / subdivisions as f64;
            samples.push(catmull_rom_point(&p0, &p1, &p2, &p3, t));
        }
    }
    samples.push(points[last]);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 2.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_span_interpolates_inner_points() {
        let p = zigzag();
        let start = catmull_rom_point(&p[0], &p[1], &p[2], &p[3], 0.0);
        let end = catmull_rom_point(&p[0], &p[1], &p[2], &p[3], 1.0);
        assert_relative_eq!(start, p[1], epsilon = 1e-12);
        assert_relative_eq!(end, p[2], epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let p: Vec<_> = (0..4).map(|i| Point3::new(i as f64, 2.0 * i as f64, 0.0)).collect();
        let mid = catmull_rom_point(&p[0], &p[1], &p[2], &p[3], 0.5);
        assert_relative_eq!(mid, Point3::new(1.5, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_fit_sample_count() {
        let samples = fit_catmull_rom(&zigzag(), 10);
        assert_eq!(samples.len(), 4 * 10 + 1);

        let samples = fit_catmull_rom(&zigzag(), 3);
        assert_eq!(samples.len(), 4 * 3 + 1);
    }

    #[test]
    fn test_fit_passes_through_control_points() {
        let points = zigzag();
        let samples = fit_catmull_rom(&points, 8);
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(samples[i * 8], *p, epsilon = 1e-12);
        }
        assert_eq!(samples.first(), points.first());
        assert_eq!(samples.last(), points.last());
    }

    #[test]
    fn test_fit_short_input_is_unchanged() {
        let one = vec![Point3::new(1.0, 1.0, 1.0)];
        assert_eq!(fit_catmull_rom(&one, 10), one);
        assert!(fit_catmull_rom(&[], 10).is_empty());
    }
}
