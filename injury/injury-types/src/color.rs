//! Vertex colors for heatmap buffers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl VertexColor {
    /// Create a color from RGB components.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend between two colors, `t` clamped to `[0, 1]`.
    ///
    /// Channels are rounded to the nearest integer, so `t = 0` yields `self`
    /// and `t = 1` yields `other` exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use injury_types::VertexColor;
    ///
    /// let mid = VertexColor::BLUE.lerp(VertexColor::RED, 0.5);
    /// assert_eq!(mid, VertexColor::new(128, 0, 128));
    /// assert_eq!(VertexColor::BLUE.lerp(VertexColor::RED, 1.0), VertexColor::RED);
    /// ```
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }

    /// Channels as floats in `[0, 1]`, the layout renderers expect for color attributes.
    #[inline]
    #[must_use]
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red (255, 0, 0).
    pub const RED: Self = Self::new(255, 0, 0);

    /// Blue (0, 0, 255).
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl Default for VertexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Result is between two u8 values, so it fits.
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (to - from).mul_add(t, from).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let low = VertexColor::new(10, 20, 30);
        let high = VertexColor::new(200, 100, 0);
        assert_eq!(low.lerp(high, 0.0), low);
        assert_eq!(low.lerp(high, 1.0), high);
    }

    #[test]
    fn lerp_clamps_out_of_range() {
        assert_eq!(VertexColor::BLUE.lerp(VertexColor::RED, 4.0), VertexColor::RED);
        assert_eq!(VertexColor::BLUE.lerp(VertexColor::RED, -1.0), VertexColor::BLUE);
        assert_eq!(VertexColor::BLUE.lerp(VertexColor::RED, f64::NAN), VertexColor::BLUE);
    }

    #[test]
    fn unit_rgb() {
        let [r, g, b] = VertexColor::new(255, 0, 51).to_unit_rgb();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn default_is_white() {
        assert_eq!(VertexColor::default(), VertexColor::WHITE);
    }
}
