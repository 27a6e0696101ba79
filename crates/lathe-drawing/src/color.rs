//! RGB colors for stroke surfaces.

use std::fmt;

use crate::DrawingError;

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Color {
    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    pub fn from_hex(s: &str) -> Result<Self, DrawingError> {
        let invalid = || DrawingError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_hex() {
        let c = Color::from_hex("#2E6D9E").unwrap();
        assert_relative_eq!(c.r, 46.0 / 255.0);
        assert_relative_eq!(c.g, 109.0 / 255.0);
        assert_relative_eq!(c.b, 158.0 / 255.0);
        assert_eq!(c.to_string(), "#2E6D9E");
    }

    #[test]
    fn test_lowercase_hex() {
        assert_eq!(
            Color::from_hex("#ffffff").unwrap(),
            Color::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_invalid_hex() {
        let cases = [
            "2E6D9E", "#2E6D9", "#2E6D9EFF", "#GG0000", "#ÄÄ00", "#+F+F+F", "#-1FFFF",
        ];
        for s in cases {
            assert!(
                matches!(Color::from_hex(s), Err(DrawingError::InvalidColor(_))),
                "{s} should be rejected"
            );
        }
    }
}
