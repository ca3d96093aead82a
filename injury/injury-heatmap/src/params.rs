//! Parameters for heatmap aggregation.

use std::fmt;

use injury_types::VertexColor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::scale::ColorScale;

/// Distance, in the mesh's local units, within which a marker counts towards
/// a triangle's score. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct ProximityThreshold(f64);

impl ProximityThreshold {
    /// Default threshold.
    pub const DEFAULT: Self = Self(0.1);

    /// Validate a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`HeatmapError::InvalidThreshold`] unless `value` is finite and `> 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use injury_heatmap::ProximityThreshold;
    ///
    /// assert!(ProximityThreshold::new(0.2).is_ok());
    /// assert!(ProximityThreshold::new(0.0).is_err());
    /// assert!(ProximityThreshold::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> HeatmapResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(HeatmapError::InvalidThreshold { value })
        }
    }

    /// The threshold distance.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for ProximityThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ProximityThreshold {
    type Error = HeatmapError;

    fn try_from(value: f64) -> HeatmapResult<Self> {
        Self::new(value)
    }
}

impl From<ProximityThreshold> for f64 {
    fn from(threshold: ProximityThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for ProximityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for heatmap aggregation.
///
/// # Example
///
/// ```
/// use injury_heatmap::HeatmapParams;
///
/// let params = HeatmapParams::default();
/// assert!((params.proximity_threshold.get() - 0.1).abs() < 1e-12);
///
/// let coarse = HeatmapParams::coarse().with_parallel(true);
/// assert!((coarse.proximity_threshold.get() - 0.25).abs() < 1e-12);
///
/// assert!(HeatmapParams::default().with_threshold(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeatmapParams {
    /// Distance within which a marker scores a triangle.
    pub proximity_threshold: ProximityThreshold,

    /// Gradient applied to normalized scores.
    pub color_scale: ColorScale,

    /// Color of vertices no scored triangle touches.
    pub base_color: VertexColor,

    /// Score triangles on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for HeatmapParams {
    fn default() -> Self {
        Self {
            proximity_threshold: ProximityThreshold::DEFAULT,
            color_scale: ColorScale::new(VertexColor::BLUE, VertexColor::RED),
            base_color: VertexColor::WHITE,
            parallel: false,
        }
    }
}

impl HeatmapParams {
    /// Tight threshold for dense, detailed meshes.
    #[must_use]
    pub const fn fine() -> Self {
        Self {
            proximity_threshold: ProximityThreshold(0.05),
            color_scale: ColorScale::new(VertexColor::BLUE, VertexColor::RED),
            base_color: VertexColor::WHITE,
            parallel: false,
        }
    }

    /// Wide threshold for coarse meshes or sparse data.
    #[must_use]
    pub const fn coarse() -> Self {
        Self {
            proximity_threshold: ProximityThreshold(0.25),
            color_scale: ColorScale::new(VertexColor::BLUE, VertexColor::RED),
            base_color: VertexColor::WHITE,
            parallel: false,
        }
    }

    /// Set the proximity threshold from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`HeatmapError::InvalidThreshold`] unless `value` is finite and `> 0`.
    pub fn with_threshold(self, value: f64) -> HeatmapResult<Self> {
        Ok(Self {
            proximity_threshold: ProximityThreshold::new(value)?,
            ..self
        })
    }

    /// Set the color scale.
    #[must_use]
    pub const fn with_color_scale(mut self, color_scale: ColorScale) -> Self {
        self.color_scale = color_scale;
        self
    }

    /// Set the base color.
    #[must_use]
    pub const fn with_base_color(mut self, base_color: VertexColor) -> Self {
        self.base_color = base_color;
        self
    }

    /// Enable or disable parallel scoring.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
