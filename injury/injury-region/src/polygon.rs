//! Polygon injury regions.

use injury_canonical::CanonicalPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};
use crate::metadata::InjuryMetadata;

/// Fewest vertices a finalized polygon may have.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// An injury outline: ordered canonical vertices plus their centroid.
///
/// The centroid is the rounded mean of all current vertices and is recomputed
/// on every edit; it is `None` only while the outline has no vertices. A
/// polygon under construction may have fewer than [`MIN_POLYGON_VERTICES`]
/// vertices; [`finalized`](Self::finalized) enforces the minimum.
///
/// The outline is never checked for self-intersection or planarity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PolygonFields"))]
pub struct PolygonRegion {
    vertices: Vec<CanonicalPoint>,
    centroid: Option<CanonicalPoint>,
    metadata: InjuryMetadata,
}

impl PolygonRegion {
    /// An empty outline.
    #[must_use]
    pub const fn new(metadata: InjuryMetadata) -> Self {
        Self {
            vertices: Vec::new(),
            centroid: None,
            metadata,
        }
    }

    /// An outline from existing vertices.
    #[must_use]
    pub fn from_vertices(vertices: Vec<CanonicalPoint>, metadata: InjuryMetadata) -> Self {
        let centroid = CanonicalPoint::mean(&vertices);
        Self {
            vertices,
            centroid,
            metadata,
        }
    }

    /// Copy with `vertex` appended.
    #[must_use]
    pub fn with_vertex(&self, vertex: CanonicalPoint) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.push(vertex);
        Self::from_vertices(vertices, self.metadata.clone())
    }

    /// Copy with the vertex at `index` removed.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::VertexIndexOutOfRange`] if `index` is past the end.
    pub fn without_vertex(&self, index: usize) -> RegionResult<Self> {
        if index >= self.vertices.len() {
            return Err(RegionError::VertexIndexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        let mut vertices = self.vertices.clone();
        vertices.remove(index);
        Ok(Self::from_vertices(vertices, self.metadata.clone()))
    }

    /// Copy with the most recent vertex removed (no-op when empty).
    #[must_use]
    pub fn without_last_vertex(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.pop();
        Self::from_vertices(vertices, self.metadata.clone())
    }

    /// Copy with different metadata.
    #[must_use]
    pub fn with_metadata(&self, metadata: InjuryMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }

    /// Close the outline.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::TooFewVertices`] if the outline has fewer than
    /// [`MIN_POLYGON_VERTICES`] vertices.
    pub fn finalized(self) -> RegionResult<Self> {
        if self.vertices.len() < MIN_POLYGON_VERTICES {
            return Err(RegionError::TooFewVertices {
                required: MIN_POLYGON_VERTICES,
                actual: self.vertices.len(),
            });
        }
        Ok(self)
    }

    /// Whether the outline has enough vertices to be finalized.
    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Vertices in drawing order.
    #[must_use]
    pub fn vertices(&self) -> &[CanonicalPoint] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the outline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Rounded mean of the vertices.
    #[must_use]
    pub const fn centroid(&self) -> Option<CanonicalPoint> {
        self.centroid
    }

    /// Attached metadata.
    #[must_use]
    pub const fn metadata(&self) -> &InjuryMetadata {
        &self.metadata
    }
}

/// Stored form of a polygon; the centroid is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolygonFields {
    vertices: Vec<CanonicalPoint>,
    metadata: InjuryMetadata,
}

#[cfg(feature = "serde")]
impl From<PolygonFields> for PolygonRegion {
    fn from(fields: PolygonFields) -> Self {
        Self::from_vertices(fields.vertices, fields.metadata)
    }
}
