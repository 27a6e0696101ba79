//! Drawing configuration.

use std::path::Path;

use lathe_curve::CurveSettings;
use lathe_surface::SurfaceParams;
use serde::{Deserialize, Serialize};

use crate::{Color, DrawingError};

/// Construction parameters for a [`Drawing`](crate::Drawing).
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// rows = 50
/// columns = 64
/// sweep_radians = 6.283185307179586
/// min_spacing = 0.1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Surface samples along the profile (n).
    pub rows: usize,
    /// Surface samples around the axis (m).
    pub columns: usize,
    /// Angular sweep of every surface, in radians.
    pub sweep_radians: f64,
    /// Points closer than this to the previous accepted point are dropped.
    pub min_spacing: f64,
    /// Spline samples per span between control points.
    pub spline_subdivisions: u32,
    /// Points along each stroke's guide path.
    pub guide_samples: usize,
    /// Selectable surface colors as `#RRGGBB`; the first is the initial color.
    pub palette: Vec<String>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 100,
            sweep_radians: SurfaceParams::FAN_SWEEP,
            min_spacing: CurveSettings::DEFAULT_MIN_SPACING,
            spline_subdivisions: CurveSettings::DEFAULT_SUBDIVISIONS,
            guide_samples: 200,
            palette: ["#2E6D9E", "#546A7B", "#9EA3B0", "#FAE1DF", "#E4C3AD", "#B86E3D"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl DrawingConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, DrawingError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DrawingError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Curve fitting settings.
    pub fn curve_settings(&self) -> Result<CurveSettings, DrawingError> {
        Ok(CurveSettings::new(self.min_spacing, self.spline_subdivisions)?)
    }

    /// Surface grid parameters.
    pub fn surface_params(&self) -> Result<SurfaceParams, DrawingError> {
        Ok(SurfaceParams::new(
            self.rows,
            self.columns,
            self.sweep_radians,
        )?)
    }

    /// Parsed palette colors.
    pub fn palette_colors(&self) -> Result<Vec<Color>, DrawingError> {
        if self.palette.is_empty() {
            return Err(DrawingError::EmptyPalette);
        }
        self.palette.iter().map(|s| Color::from_hex(s)).collect()
    }

    /// Check every parameter without building anything.
    pub fn validate(&self) -> Result<(), DrawingError> {
        self.curve_settings()?;
        self.surface_params()?;
        self.palette_colors()?;
        if self.guide_samples < 2 {
            return Err(DrawingError::GuideSamples(self.guide_samples));
        }
        Ok(())
    }
}
