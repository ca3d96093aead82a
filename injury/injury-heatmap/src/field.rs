//! Heatmap output types.

use injury_types::{Point3, VertexColor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score of one mesh triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSample {
    /// Triangle centroid in the mesh's local frame.
    pub centroid_local: Point3<f64>,
    /// Number of markers within the proximity threshold of the centroid.
    pub score: usize,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatmapField {
    /// One color per mesh vertex.
    pub colors: Vec<VertexColor>,
    /// One sample per mesh triangle, in face order.
    pub samples: Vec<TriangleSample>,
    /// Highest triangle score (0 when no triangle is near any marker).
    pub max_score: usize,
}

impl HeatmapField {
    /// An empty field, for a mesh with no triangles.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Score of a triangle scaled by the maximum score, or `0` when nothing scored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normalized_score(&self, face: usize) -> Option<f64> {
        let sample = self.samples.get(face)?;
        if self.max_score == 0 {
            Some(0.0)
        } else {
            Some(sample.score as f64 / self.max_score as f64)
        }
    }

    /// Number of triangles with a non-zero score.
    #[must_use]
    pub fn scored_triangle_count(&self) -> usize {
        self.samples.iter().filter(|s| s.score > 0).count()
    }

    /// Colors as `[r, g, b]` floats in `[0, 1]`, one entry per vertex.
    #[must_use]
    pub fn to_unit_rgb(&self) -> Vec<[f32; 3]> {
        self.colors.iter().map(|c| c.to_unit_rgb()).collect()
    }
}
