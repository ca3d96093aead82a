//! Two-stop color gradient.

use injury_types::VertexColor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear gradient from `low` to `high` over normalized scores in `[0, 1]`.
///
/// # Example
///
/// ```
/// use injury_heatmap::ColorScale;
/// use injury_types::VertexColor;
///
/// let scale = ColorScale::default();
/// assert_eq!(scale.sample(0.0), VertexColor::BLUE);
/// assert_eq!(scale.sample(1.0), VertexColor::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorScale {
    /// Color for the lowest non-zero density.
    pub low: VertexColor,
    /// Color for the highest density.
    pub high: VertexColor,
}

impl ColorScale {
    /// A gradient between two stops.
    #[must_use]
    pub const fn new(low: VertexColor, high: VertexColor) -> Self {
        Self { low, high }
    }

    /// Color at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> VertexColor {
        self.low.lerp(self.high, t)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(VertexColor::BLUE, VertexColor::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_clamping() {
        let scale = ColorScale::new(VertexColor::new(0, 0, 0), VertexColor::new(200, 100, 50));
        assert_eq!(scale.sample(0.5), VertexColor::new(100, 50, 25));
        assert_eq!(scale.sample(-3.0), scale.low);
        assert_eq!(scale.sample(7.0), scale.high);
    }
}
