//! Stroke lifecycle and incremental surface updates.

use lathe_curve::{CurveSettings, ProfileCurve};
use lathe_math::Point3;
use lathe_surface::{RevolutionSurface, SurfaceParams};
use tracing::{debug, info, trace};

use crate::{Color, DrawingConfig, DrawingError, MeshSink, Stroke};

/// Whether a stroke is currently receiving points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No active stroke.
    Idle,
    /// The stroke at this index receives `line_to` points.
    Active(usize),
}

/// A collection of strokes, each revolved into its own lathe surface.
///
/// All mutation happens synchronously inside the caller's event handlers;
/// points are processed strictly in arrival order. At most one stroke is
/// active at a time.
pub struct Drawing<S: MeshSink> {
    curve_settings: CurveSettings,
    surface_params: SurfaceParams,
    guide_samples: usize,
    palette: Vec<Color>,
    current_color: Color,
    strokes: Vec<Stroke<S::Handle>>,
    active: Option<usize>,
}

impl<S: MeshSink> Drawing<S> {
    /// Create an empty drawing.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found in `config`.
    pub fn new(config: DrawingConfig) -> Result<Self, DrawingError> {
        config.validate()?;
        let palette = config.palette_colors()?;
        Ok(Self {
            curve_settings: config.curve_settings()?,
            surface_params: config.surface_params()?,
            guide_samples: config.guide_samples,
            current_color: palette[0],
            palette,
            strokes: Vec::new(),
            active: None,
        })
    }

    /// Begin a new stroke at `p` and make it active.
    ///
    /// Any previously active stroke is ended. Returns the new stroke's index.
    pub fn start_stroke(&mut self, p: Point3) -> usize {
        let curve = ProfileCurve::with_settings(p, self.curve_settings);
        self.strokes.push(Stroke::new(curve, self.current_color));
        let index = self.strokes.len() - 1;
        self.active = Some(index);
        debug!(stroke = index, x = p.x, y = p.y, z = p.z, "stroke started");
        index
    }

    /// Extend the active stroke with `p`.
    ///
    /// Points too close to the previous one are ignored. From the second
    /// accepted point on, the stroke's surface is created (first time) or
    /// regenerated in place and its buffers are pushed to `sink`. Returns
    /// whether the point was accepted; without an active stroke this is a
    /// no-op returning `false`.
    pub fn line_to(&mut self, p: Point3, sink: &mut S) -> bool {
        let Some(index) = self.active else {
            trace!("line_to without an active stroke");
            return false;
        };
        let stroke = &mut self.strokes[index];

        if !stroke.curve.add_point(p) {
            trace!(stroke = index, "point too close to previous, skipped");
            return false;
        }
        if stroke.curve.len() < 2 {
            return true;
        }

        stroke.guide = stroke.curve.sample(self.guide_samples);
        sink.update_guide(index, &stroke.guide, stroke.curve.control_points());

        match &mut stroke.surface {
            Some((surface, handle)) => {
                surface.set_curve(&stroke.curve);
                let generation = surface.generation();
                sink.upload_positions(handle, surface.positions(), generation);
                sink.upload_normals(handle, surface.normals(), generation);
                trace!(stroke = index, generation, "surface updated");
            }
            None => {
                let surface = RevolutionSurface::with_params(&stroke.curve, self.surface_params);
                let handle = sink.create_indexed(
                    surface.positions(),
                    surface.normals(),
                    surface.indices(),
                    stroke.color,
                );
                debug!(
                    stroke = index,
                    vertices = surface.num_vertices(),
                    triangles = surface.num_triangles(),
                    "surface created"
                );
                stroke.surface = Some((surface, handle));
            }
        }
        true
    }

    /// Stop routing points to the active stroke. The stroke is kept.
    pub fn end_stroke(&mut self) {
        if let Some(index) = self.active.take() {
            debug!(
                stroke = index,
                points = self.strokes[index].curve.len(),
                "stroke ended"
            );
        }
    }

    /// Dispose every stroke's surface and guides and forget all strokes.
    pub fn clear(&mut self, sink: &mut S) {
        let count = self.strokes.len();
        for stroke in self.strokes.drain(..) {
            if let Some((_, handle)) = stroke.surface {
                sink.dispose(handle);
            }
        }
        sink.clear_guides();
        self.active = None;
        info!(strokes = count, "drawing cleared");
    }

    /// Set the color for new strokes and recolor the most recent stroke.
    pub fn set_current_color(&mut self, color: Color, sink: &mut S) {
        self.current_color = color;
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.color = color;
            if let Some((_, handle)) = &stroke.surface {
                sink.set_color(handle, color);
            }
        }
    }

    /// Pick the current color from the palette.
    ///
    /// # Errors
    ///
    /// Returns `PaletteIndex` if `index` is out of range.
    pub fn select_palette(&mut self, index: usize, sink: &mut S) -> Result<Color, DrawingError> {
        let color = *self
            .palette
            .get(index)
            .ok_or(DrawingError::PaletteIndex {
                index,
                len: self.palette.len(),
            })?;
        self.set_current_color(color, sink);
        Ok(color)
    }

    /// All strokes in creation order.
    pub fn strokes(&self) -> &[Stroke<S::Handle>] {
        &self.strokes
    }

    /// The stroke currently receiving points.
    pub fn active_stroke(&self) -> Option<&Stroke<S::Handle>> {
        self.active.map(|i| &self.strokes[i])
    }

    /// Whether a stroke is active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DrawingState {
        match self.active {
            Some(i) => DrawingState::Active(i),
            None => DrawingState::Idle,
        }
    }

    /// Color used for new strokes.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Selectable colors.
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Grid parameters shared by every surface.
    pub fn surface_params(&self) -> &SurfaceParams {
        &self.surface_params
    }
}
