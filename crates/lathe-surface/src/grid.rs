//! Fixed index topology of a structured grid.

/// Triangle indices for a `rows x columns` vertex grid laid out row-major.
///
/// Every cell `(i, j)` with top-left vertex `k = i * columns + j` becomes
/// the triangles `(k, k+1, k+1+columns)` and `(k, k+1+columns, k+columns)`,
/// so the whole grid shares one winding. Grids smaller than 2x2 have no
/// cells and yield no indices.
///
/// # Panics
///
/// Panics if the grid has more vertices than `u32` indices can address;
/// [`SurfaceParams`](crate::SurfaceParams) rejects such grids up front.
pub fn grid_indices(rows: usize, columns: usize) -> Vec<u32> {
    if rows < 2 || columns < 2 {
        return Vec::new();
    }
    assert!(
        rows.checked_mul(columns)
            .is_some_and(|v| v <= crate::SurfaceParams::MAX_VERTICES),
        "{rows}x{columns} grid exceeds u32 index range"
    );

    let m = columns as u32;
    let mut indices = Vec::with_capacity((rows - 1) * (columns - 1) * 6);
    for i in 0..rows as u32 - 1 {
        for j in 0..m - 1 {
            let k = i * m + j;
            indices.extend_from_slice(&[k, k + 1, k + 1 + m, k, k + 1 + m, k + m]);
        }
    }
    indices
}
