//! One pointer-down to pointer-up interaction.

use lathe_curve::ProfileCurve;
use lathe_math::Point3;
use lathe_surface::RevolutionSurface;

use crate::Color;

/// A sketched stroke: its profile curve and, once it has two points, the
/// lathe surface generated from it together with the host handle of that
/// surface.
#[derive(Debug)]
pub struct Stroke<H> {
    pub(crate) curve: ProfileCurve,
    pub(crate) surface: Option<(RevolutionSurface, H)>,
    pub(crate) guide: Vec<Point3>,
    pub(crate) color: Color,
}

impl<H> Stroke<H> {
    pub(crate) fn new(curve: ProfileCurve, color: Color) -> Self {
        Self {
            curve,
            surface: None,
            guide: Vec::new(),
            color,
        }
    }

    /// The stroke's profile curve.
    pub fn curve(&self) -> &ProfileCurve {
        &self.curve
    }

    /// The generated surface, absent until the curve has two points.
    pub fn surface(&self) -> Option<&RevolutionSurface> {
        self.surface.as_ref().map(|(s, _)| s)
    }

    /// Host handle of the generated surface.
    pub fn handle(&self) -> Option<&H> {
        self.surface.as_ref().map(|(_, h)| h)
    }

    /// Evenly sampled points along the curve, for drawing the stroke itself.
    pub fn guide_path(&self) -> &[Point3] {
        &self.guide
    }

    /// One marker per accepted control point.
    pub fn markers(&self) -> &[Point3] {
        self.curve.control_points()
    }

    /// Surface color.
    pub fn color(&self) -> Color {
        self.color
    }
}
