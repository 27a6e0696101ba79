#![warn(missing_docs)]

//! Stroke orchestration for sketch-and-lathe modelling.
//!
//! A [`Drawing`] turns a stream of picked points into lathe meshes: each
//! pointer-down starts a [`Stroke`] with its own profile curve, each
//! pointer-move extends it, and from the second accepted point on the
//! stroke owns a [`RevolutionSurface`](lathe_surface::RevolutionSurface)
//! that is regenerated in place. Rendering is delegated to a [`MeshSink`]
//! passed into every mutating call.
//!
//! # Example
//!
//! ```
//! use lathe_drawing::{BufferSink, Drawing, DrawingConfig};
//! use lathe_math::Point3;
//!
//! let mut sink = BufferSink::new();
//! let mut drawing = Drawing::new(DrawingConfig::default()).unwrap();
//!
//! drawing.start_stroke(Point3::new(1.0, 0.0, 0.0));
//! drawing.line_to(Point3::new(1.5, 1.0, 0.0), &mut sink);
//! drawing.end_stroke();
//!
//! assert_eq!(sink.live_meshes(), 1);
//! ```

mod color;
mod config;
mod drawing;
mod sink;
mod stroke;

pub use color::Color;
pub use config::DrawingConfig;
pub use drawing::{Drawing, DrawingState};
pub use sink::{BufferSink, Guide, MeshBuffers, MeshId, MeshSink};
pub use stroke::Stroke;

use lathe_curve::CurveError;
use lathe_surface::SurfaceError;
use thiserror::Error;

/// Errors from drawing configuration.
#[derive(Debug, Error)]
pub enum DrawingError {
    /// Curve fitting parameters are invalid.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Surface grid parameters are invalid.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// A palette entry is not a `#RRGGBB` color.
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    /// The palette has no colors.
    #[error("palette is empty")]
    EmptyPalette,

    /// Palette index out of range.
    #[error("palette index {index} out of range (palette has {len} colors)")]
    PaletteIndex {
        /// Requested index.
        index: usize,
        /// Palette size.
        len: usize,
    },

    /// The guide path needs at least two samples.
    #[error("guide path needs at least 2 samples, got {0}")]
    GuideSamples(usize),

    /// Configuration text could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
