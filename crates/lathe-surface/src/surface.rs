//! Revolution of a profile into a structured triangle grid.

use lathe_curve::Profile;
use lathe_math::Point3;

use crate::grid::grid_indices;
use crate::normals::compute_vertex_normals;
use crate::{SurfaceError, SurfaceParams};

/// A lathe mesh swept from a profile around the world Y axis.
///
/// Row `i` of the grid is the profile sampled at `t = i / (rows - 1)`; its
/// x coordinate is the radius and its y coordinate the height. Column `j`
/// is the angle `φ_j = sweep * j / (columns - 1)`, and vertex `(i, j)` sits
/// at `(r cos φ_j, h, r sin φ_j)`.
///
/// Indices are fixed at construction. Every profile update rewrites the
/// whole position and normal buffers and bumps [`generation`](Self::generation).
#[derive(Debug, Clone)]
pub struct RevolutionSurface {
    params: SurfaceParams,
    /// `(cos φ_j, sin φ_j)` per column.
    angles: Vec<(f64, f64)>,
    /// Profile samples from the last recompute, one per row.
    rows: Vec<Point3>,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    generation: u64,
}

impl RevolutionSurface {
    /// Build a surface from `profile`.
    ///
    /// # Arguments
    ///
    /// * `profile` - Curve whose first coordinate is radius and second is height
    /// * `rows` - Samples along the profile (n)
    /// * `columns` - Samples around the axis (m)
    /// * `sweep` - Angular range in radians, `2π` for a closed lathe
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `rows < 2`, `columns < 2`, `sweep` is not in
    /// (0, 2π], or the grid has more vertices than `u32` indices address.
    pub fn new<P: Profile + ?Sized>(
        profile: &P,
        rows: usize,
        columns: usize,
        sweep: f64,
    ) -> Result<Self, SurfaceError> {
        let params = SurfaceParams::new(rows, columns, sweep)?;
        Ok(Self::with_params(profile, params))
    }

    /// Build a surface from already validated parameters.
    pub fn with_params<P: Profile + ?Sized>(profile: &P, params: SurfaceParams) -> Self {
        let n = params.rows();
        let m = params.columns();

        let angles = (0..m)
            .map(|j| {
                let phi = params.sweep() * j as f64 / (m - 1) as f64;
                (phi.cos(), phi.sin())
            })
            .collect();

        let mut surface = Self {
            params,
            angles,
            rows: Vec::with_capacity(n),
            positions: vec![0.0; n * m * 3],
            normals: vec![0.0; n * m * 3],
            indices: grid_indices(n, m),
            generation: 0,
        };
        surface.compute_points(profile);
        surface
    }

    /// Replace the profile and regenerate positions and normals in place.
    pub fn set_curve<P: Profile + ?Sized>(&mut self, profile: &P) {
        self.compute_points(profile);
    }

    /// Replace the profile with a raw point sequence.
    pub fn set_curve_points(&mut self, points: &[Point3]) {
        self.compute_points(points);
    }

    fn compute_points<P: Profile + ?Sized>(&mut self, profile: &P) {
        let n = self.params.rows();
        let m = self.params.columns();

        self.rows.clear();
        self.rows
            .extend((0..n).map(|i| profile.point_at(i as f64 / (n - 1) as f64)));

        for (i, p) in self.rows.iter().enumerate() {
            let (radius, height) = (p.x, p.y);
            for (j, &(cos, sin)) in self.angles.iter().enumerate() {
                let k = (i * m + j) * 3;
                self.positions[k] = (radius * cos) as f32;
                self.positions[k + 1] = height as f32;
                self.positions[k + 2] = (radius * sin) as f32;
            }
        }

        compute_vertex_normals(&self.positions, &self.indices, &mut self.normals);
        self.generation += 1;
    }

    /// Flat vertex positions `[x0, y0, z0, x1, ...]`, row-major by profile then angle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat vertex normals, same layout as [`positions`](Self::positions).
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Triangle indices, three per triangle. Never changes after construction.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Profile samples used for the current geometry, one per row.
    pub fn profile_samples(&self) -> &[Point3] {
        &self.rows
    }

    /// Position of grid vertex `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn vertex(&self, row: usize, column: usize) -> Point3 {
        assert!(row < self.params.rows() && column < self.params.columns());
        let k = (row * self.params.columns() + column) * 3;
        Point3::new(
            self.positions[k] as f64,
            self.positions[k + 1] as f64,
            self.positions[k + 2] as f64,
        )
    }

    /// Number of completed geometry recomputes, starting at 1 after construction.
    ///
    /// A host that uploads on another thread should only submit buffers whose
    /// generation it has observed as complete.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Construction parameters.
    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    /// Samples along the profile.
    pub fn rows(&self) -> usize {
        self.params.rows()
    }

    /// Samples around the axis.
    pub fn columns(&self) -> usize {
        self.params.columns()
    }

    /// Number of vertices in the grid.
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the grid.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }
}
