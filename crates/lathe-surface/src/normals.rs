//! Smooth vertex normals from positions and indices.

use lathe_math::{Tolerance, Vec3};

fn vertex(positions: &[f32], i: u32) -> Vec3 {
    let k = i as usize * 3;
    Vec3::new(
        positions[k] as f64,
        positions[k + 1] as f64,
        positions[k + 2] as f64,
    )
}

/// Recompute vertex normals into `normals` (same layout as `positions`).
///
/// Each triangle `(a, b, c)` contributes its unit face normal
/// `(a - b) × (c - b)` to its three vertices; the sums are then normalized.
/// Zero-area triangles contribute nothing, and a vertex touched only by
/// such triangles keeps a zero normal.
pub fn compute_vertex_normals(positions: &[f32], indices: &[u32], normals: &mut [f32]) {
    let tol = Tolerance::DEFAULT;
    let mut acc = vec![Vec3::zeros(); positions.len() / 3];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (
            vertex(positions, tri[0]),
            vertex(positions, tri[1]),
            vertex(positions, tri[2]),
        );
        let n = (a - b).cross(&(c - b));
        let len = n.norm();
        if tol.is_zero(len) {
            continue;
        }
        let n = n / len;
        for &i in tri {
            acc[i as usize] += n;
        }
    }

    for (out, n) in normals.chunks_exact_mut(3).zip(&acc) {
        let len = n.norm();
        let n = if tol.is_zero(len) { Vec3::zeros() } else { n / len };
        out[0] = n.x as f32;
        out[1] = n.y as f32;
        out[2] = n.z as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_triangle() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let mut normals = [0.0; 9];
        compute_vertex_normals(&positions, &[0, 1, 2], &mut normals);
        // (a - b) x (c - b) = (-1, 0, 0) x (-1, 0, 1) = (0, 1, 0)
        for n in normals.chunks(3) {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 1.0);
            assert_relative_eq!(n[2], 0.0);
        }
    }

    #[test]
    fn test_shared_vertex_averages() {
        // Two triangles folded 90 degrees along the edge v0-v1.
        let positions = [
            0.0, 0.0, 0.0, // v0
            1.0, 0.0, 0.0, // v1
            0.0, 0.0, 1.0, // v2, in the XZ plane
            0.0, -1.0, 0.0, // v3, in the XY plane
        ];
        // Face normals are +Y and -Z; the shared edge is walked both ways.
        let indices = [0, 1, 2, 1, 0, 3];
        let mut normals = [0.0; 12];
        compute_vertex_normals(&positions, &indices, &mut normals);

        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(normals[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(normals[1], h, epsilon = 1e-6);
        assert_relative_eq!(normals[2], -h, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_leaves_zero() {
        let positions = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let mut normals = [9.0; 9];
        compute_vertex_normals(&positions, &[0, 1, 2], &mut normals);
        assert!(normals.iter().all(|&v| v == 0.0));
    }
}
