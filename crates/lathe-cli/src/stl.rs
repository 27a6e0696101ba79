//! Binary STL export of lathe meshes.

use lathe_drawing::MeshBuffers;
use lathe_math::{Tolerance, Vec3};

const HEADER: &[u8] = b"lathe surface export";

fn vertex(positions: &[f32], i: u32) -> [f32; 3] {
    let k = i as usize * 3;
    [positions[k], positions[k + 1], positions[k + 2]]
}

/// Same orientation as the surface vertex normals.
fn facet_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let to_vec = |p: [f32; 3]| Vec3::new(p[0] as f64, p[1] as f64, p[2] as f64);
    let (a, b, c) = (to_vec(a), to_vec(b), to_vec(c));
    let n = (a - b).cross(&(c - b));
    let len = n.norm();
    if Tolerance::DEFAULT.is_zero(len) {
        return [0.0; 3];
    }
    [(n.x / len) as f32, (n.y / len) as f32, (n.z / len) as f32]
}

/// Encode meshes as one binary STL: 80-byte header, triangle count, and
/// 50 bytes per triangle (normal, three vertices, attribute word).
pub fn to_stl_bytes<'a>(meshes: impl IntoIterator<Item = &'a MeshBuffers>) -> Vec<u8> {
    let meshes: Vec<_> = meshes.into_iter().collect();
    let count: usize = meshes.iter().map(|m| m.indices.len() / 3).sum();

    let mut out = Vec::with_capacity(84 + count * 50);
    let mut header = [0u8; 80];
    header[..HEADER.len()].copy_from_slice(HEADER);
    out.extend_from_slice(&header);
    out.extend_from_slice(&(count as u32).to_le_bytes());

    for mesh in meshes {
        for tri in mesh.indices.chunks_exact(3) {
            let a = vertex(&mesh.positions, tri[0]);
            let b = vertex(&mesh.positions, tri[1]);
            let c = vertex(&mesh.positions, tri[2]);
            for v in [facet_normal(a, b, c), a, b, c] {
                for x in v {
                    out.extend_from_slice(&x.to_le_bytes());
                }
            }
            out.extend_from_slice(&0u16.to_le_bytes());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_drawing::{BufferSink, Color, MeshSink};

    #[test]
    fn test_stl_layout() {
        let mut sink = BufferSink::new();
        let positions: [f32; 12] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let white = Color::new(1.0, 1.0, 1.0);
        sink.create_indexed(&positions, &[0.0; 12], &[0, 1, 2, 1, 3, 2], white);
        sink.create_indexed(&positions, &[0.0; 12], &[0, 1, 2], white);

        let bytes = to_stl_bytes(sink.meshes().map(|(_, m)| m));
        assert_eq!(bytes.len(), 84 + 3 * 50);
        assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 3);
        assert!(bytes.starts_with(HEADER));

        // First facet normal is +Y for (0,0,0) (1,0,0) (0,0,1).
        let ny = f32::from_le_bytes([bytes[88], bytes[89], bytes[90], bytes[91]]);
        assert!((ny - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_export() {
        let bytes = to_stl_bytes(std::iter::empty::<&MeshBuffers>());
        assert_eq!(bytes.len(), 84);
    }
}
