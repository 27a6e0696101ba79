//! Replaying recorded strokes through a headless drawing.

use std::path::Path;

use anyhow::{Context, Result};
use lathe_drawing::{BufferSink, Drawing, DrawingConfig};
use lathe_math::Point3;
use serde::Deserialize;
use tracing::warn;

/// A recorded session: strokes in the order they were drawn.
#[derive(Debug, Deserialize)]
pub struct Recording {
    pub strokes: Vec<RecordedStroke>,
}

/// Pointer samples of one stroke, already projected onto the sketch plane.
#[derive(Debug, Deserialize)]
pub struct RecordedStroke {
    pub points: Vec<[f64; 3]>,
    /// Palette index selected before the stroke started.
    #[serde(default)]
    pub color: Option<usize>,
}

impl Recording {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid recording")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}

pub struct Outcome {
    pub drawing: Drawing<BufferSink>,
    pub sink: BufferSink,
    /// Recorded sample count per stroke.
    pub samples: Vec<usize>,
}

pub fn run(recording: &Recording, config: DrawingConfig) -> Result<Outcome> {
    let mut sink = BufferSink::new();
    let mut drawing = Drawing::new(config).context("invalid configuration")?;
    let mut samples = Vec::with_capacity(recording.strokes.len());

    for (i, stroke) in recording.strokes.iter().enumerate() {
        let Some((first, rest)) = stroke.points.split_first() else {
            warn!(stroke = i, "empty stroke skipped");
            continue;
        };
        if let Some(index) = stroke.color {
            drawing
                .select_palette(index, &mut sink)
                .with_context(|| format!("stroke {i}"))?;
        }

        drawing.start_stroke(to_point(first));
        for p in rest {
            drawing.line_to(to_point(p), &mut sink);
        }
        drawing.end_stroke();
        samples.push(stroke.points.len());
    }

    Ok(Outcome {
        drawing,
        sink,
        samples,
    })
}

pub fn print_summary(outcome: &Outcome) {
    let strokes = outcome.drawing.strokes();
    println!("{} stroke(s)", strokes.len());
    for (i, (stroke, samples)) in strokes.iter().zip(&outcome.samples).enumerate() {
        let curve = stroke.curve();
        let fitted = curve.fitted_samples().map_or(0, <[Point3]>::len);
        match stroke.surface() {
            Some(surface) => println!(
                "  stroke {i}: {}/{samples} points kept, {fitted} spline samples, \
                 {} vertices, {} triangles, {} updates, color {}",
                curve.len(),
                surface.num_vertices(),
                surface.num_triangles(),
                surface.generation(),
                stroke.color(),
            ),
            None => println!(
                "  stroke {i}: {}/{samples} points kept, no surface",
                curve.len()
            ),
        }
    }
}

fn to_point(p: &[f64; 3]) -> Point3 {
    Point3::new(p[0], p[1], p[2])
}
