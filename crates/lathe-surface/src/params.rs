//! Grid resolution and sweep range.

use std::f64::consts::PI;

use crate::SurfaceError;

/// Validated construction parameters for a [`RevolutionSurface`](crate::RevolutionSurface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParams {
    rows: usize,
    columns: usize,
    sweep: f64,
}

impl SurfaceParams {
    /// Default open-fan sweep (three quarters of a turn).
    pub const FAN_SWEEP: f64 = 1.5 * PI;
    /// Full revolution.
    pub const FULL_SWEEP: f64 = 2.0 * PI;
    /// Largest vertex count accepted for a `u32` index buffer.
    pub const MAX_VERTICES: usize = u32::MAX as usize;

    /// Create validated parameters.
    ///
    /// # Arguments
    ///
    /// * `rows` - Samples along the profile (n)
    /// * `columns` - Samples around the axis (m)
    /// * `sweep` - Angular range in radians, in (0, 2π]
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `rows < 2`, `columns < 2`, `sweep` is not in
    /// (0, 2π], or `rows * columns` vertices cannot be addressed by `u32`
    /// indices.
    pub fn new(rows: usize, columns: usize, sweep: f64) -> Result<Self, SurfaceError> {
        let addressable = rows
            .checked_mul(columns)
            .is_some_and(|v| v <= Self::MAX_VERTICES);
        let sweep_ok = sweep.is_finite() && sweep > 0.0 && sweep <= Self::FULL_SWEEP + 1e-9;
        if rows < 2 || columns < 2 || !addressable || !sweep_ok {
            return Err(SurfaceError::InvalidDimension {
                rows,
                columns,
                sweep,
            });
        }
        Ok(Self {
            rows,
            columns,
            sweep,
        })
    }

    /// Full 2π revolution with the given resolution.
    pub fn full(rows: usize, columns: usize) -> Result<Self, SurfaceError> {
        Self::new(rows, columns, Self::FULL_SWEEP)
    }

    /// Samples along the profile.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Samples around the axis.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Angular range in radians.
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Whether the sweep closes into a full turn.
    pub fn is_full_turn(&self) -> bool {
        (self.sweep - Self::FULL_SWEEP).abs() < 1e-9
    }

    /// Vertex count of the grid.
    pub fn num_vertices(&self) -> usize {
        self.rows * self.columns
    }

    /// Triangle count of the grid.
    pub fn num_triangles(&self) -> usize {
        (self.rows - 1) * (self.columns - 1) * 2
    }
}
