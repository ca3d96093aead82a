//! The marking session state machine.

use std::fmt;
use std::mem;

use injury_canonical::{CanonicalPoint, normalize};
use injury_heatmap::{Marker, project_into};
use injury_region::{
    CaseRecord, InjuryMetadata, InjuryRegion, PolygonRegion, RadiusRegion, RegionError,
};
use injury_types::{BodyMesh, BoundingBox, Point3};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MarkingError, MarkingResult};
use crate::pick::{Ray, pick};

/// Which kind of injury clicks produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DrawMode {
    /// One click places a center; another click moves it.
    #[default]
    Radius,
    /// Each click appends an outline vertex.
    Polygon,
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radius => write!(f, "radius"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

/// What is currently in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MarkingState {
    /// Nothing placed.
    #[default]
    Idle,
    /// Radius mode: a center has been placed.
    Placed {
        /// The placed center.
        center: CanonicalPoint,
    },
    /// Polygon mode: an outline is being drawn.
    Drawing {
        /// The outline so far (may have fewer than three vertices).
        outline: PolygonRegion,
    },
}

/// One operator's marking session over a draft case.
///
/// Clicks land on the mesh, are converted to canonical space and build up
/// either a radius marker or a polygon outline. [`commit`](Self::commit)
/// turns the work in progress into an injury on the draft case. Every method
/// that returns an error leaves the session exactly as it was.
///
/// # Example
///
/// ```
/// use injury_marking::{DrawMode, MarkingSession};
/// use injury_region::InjuryMetadata;
/// use injury_types::{BoundingBox, Point3};
///
/// let bounds = BoundingBox::new(Point3::origin(), Point3::new(2.0, 2.0, 2.0));
/// let mut session = MarkingSession::new("case-1");
///
/// session.set_metadata(InjuryMetadata::new("bruise").with_body_area("chest"));
/// session.set_radius(1.5).unwrap();
/// session.click(Some(Point3::new(1.0, 1.0, 1.0)), &bounds).unwrap();
/// session.commit().unwrap();
///
/// session.set_mode(DrawMode::Polygon);
/// for p in [Point3::origin(), Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)] {
///     session.click(Some(p), &bounds).unwrap();
/// }
/// session.commit().unwrap();
///
/// let case = session.take_case("case-2");
/// assert_eq!(case.case_id, "case-1");
/// assert_eq!(case.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MarkingSession {
    mode: DrawMode,
    state: MarkingState,
    metadata: InjuryMetadata,
    radius: f64,
    case: CaseRecord,
}

impl MarkingSession {
    /// A session in radius mode over an empty draft case.
    #[must_use]
    pub fn new(case_id: impl Into<String>) -> Self {
        Self::with_case(CaseRecord::new(case_id))
    }

    /// A session that continues editing an existing case.
    #[must_use]
    pub fn with_case(case: CaseRecord) -> Self {
        Self {
            mode: DrawMode::default(),
            state: MarkingState::Idle,
            metadata: InjuryMetadata::default(),
            radius: 0.0,
            case,
        }
    }

    /// Current draw mode.
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Current in-progress state.
    #[must_use]
    pub const fn state(&self) -> &MarkingState {
        &self.state
    }

    /// Metadata the next committed injury will carry.
    #[must_use]
    pub const fn metadata(&self) -> &InjuryMetadata {
        &self.metadata
    }

    /// Radius the next committed radius injury will have.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The draft case.
    #[must_use]
    pub const fn case(&self) -> &CaseRecord {
        &self.case
    }

    /// Switch draw mode, discarding anything in progress.
    ///
    /// Committed injuries are not affected. Selecting the current mode again
    /// is a no-op.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if mode == self.mode {
            return;
        }
        debug!(from = %self.mode, to = %mode, "Switching draw mode");
        self.mode = mode;
        self.state = MarkingState::Idle;
    }

    /// Set the metadata for the next committed injury.
    pub fn set_metadata(&mut self, metadata: InjuryMetadata) {
        self.metadata = metadata;
    }

    /// Set the radius for the next committed radius injury.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidRadius`] if `radius` is negative or not finite.
    pub fn set_radius(&mut self, radius: f64) -> MarkingResult<()> {
        if !(radius.is_finite() && radius >= 0.0) {
            warn!(radius, "Ignoring invalid radius");
            return Err(RegionError::InvalidRadius { radius }.into());
        }
        self.radius = radius;
        Ok(())
    }

    /// Handle a click that hit the mesh at `hit` (world space), or missed it
    /// when `hit` is `None`.
    ///
    /// In radius mode the click places the center, replacing any previous one.
    /// In polygon mode it appends a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MarkingError::NoIntersection`] for a miss and
    /// [`MarkingError::Canonical`] if `bounds` is degenerate.
    pub fn click(&mut self, hit: Option<Point3<f64>>, bounds: &BoundingBox) -> MarkingResult<()> {
        let Some(world) = hit else {
            warn!("Ignoring click that missed the mesh");
            return Err(MarkingError::NoIntersection);
        };
        let point = normalize(&world, bounds).map_err(|err| {
            warn!(error = %err, "Ignoring click");
            MarkingError::from(err)
        })?;

        self.state = match (self.mode, mem::take(&mut self.state)) {
            (DrawMode::Radius, _) => {
                debug!(x = point.x(), y = point.y(), z = point.z(), "Placed marker");
                MarkingState::Placed { center: point }
            }
            (DrawMode::Polygon, MarkingState::Drawing { outline }) => {
                let outline = outline.with_vertex(point);
                debug!(vertices = outline.len(), "Added outline vertex");
                MarkingState::Drawing { outline }
            }
            (DrawMode::Polygon, _) => {
                debug!("Started outline");
                MarkingState::Drawing {
                    outline: PolygonRegion::new(InjuryMetadata::default()).with_vertex(point),
                }
            }
        };
        Ok(())
    }

    /// Cast `ray` at `mesh` and handle the click at the nearest hit.
    ///
    /// # Errors
    ///
    /// As [`click`](Self::click), plus [`MarkingError::Mesh`] for a malformed mesh.
    pub fn click_ray(&mut self, mesh: &BodyMesh, ray: &Ray) -> MarkingResult<()> {
        let hit = pick(mesh, ray)?;
        self.click(hit, &mesh.world_bounds())
    }

    /// Remove the most recent outline vertex. Returns whether one was removed.
    ///
    /// Removing the only vertex returns the session to idle.
    pub fn undo_last_vertex(&mut self) -> bool {
        let MarkingState::Drawing { outline } = &self.state else {
            return false;
        };
        let outline = outline.without_last_vertex();
        debug!(vertices = outline.len(), "Removed outline vertex");
        self.state = if outline.is_empty() {
            MarkingState::Idle
        } else {
            MarkingState::Drawing { outline }
        };
        true
    }

    /// Discard anything in progress.
    pub fn cancel(&mut self) {
        if self.state != MarkingState::Idle {
            debug!("Discarded work in progress");
        }
        self.state = MarkingState::Idle;
    }

    /// The in-progress injury, carrying the current metadata.
    ///
    /// An outline is returned even when it has too few vertices to commit.
    #[must_use]
    pub fn in_progress(&self) -> Option<InjuryRegion> {
        match &self.state {
            MarkingState::Idle => None,
            MarkingState::Placed { center } => {
                RadiusRegion::new(*center, self.radius, self.metadata.clone())
                    .ok()
                    .map(InjuryRegion::from)
            }
            MarkingState::Drawing { outline } => {
                Some(outline.with_metadata(self.metadata.clone()).into())
            }
        }
    }

    /// World-space markers for the in-progress injury, for live feedback.
    #[must_use]
    pub fn live_markers(&self, bounds: &BoundingBox) -> Vec<Marker> {
        let mut markers = Vec::new();
        if let Some(region) = self.in_progress() {
            project_into(&region, bounds, &mut markers);
        }
        markers
    }

    /// Turn the work in progress into an injury on the draft case.
    ///
    /// On success the session returns to idle, the draft metadata and radius
    /// are reset, and the new injury's index is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MarkingError::NothingToCommit`] when idle and
    /// [`MarkingError::Region`] when the outline has fewer than three vertices.
    pub fn commit(&mut self) -> MarkingResult<usize> {
        let region: InjuryRegion = match &self.state {
            MarkingState::Idle => {
                warn!("Ignoring commit with nothing in progress");
                return Err(MarkingError::NothingToCommit);
            }
            MarkingState::Placed { center } => {
                RadiusRegion::new(*center, self.radius, self.metadata.clone())?.into()
            }
            MarkingState::Drawing { outline } => outline
                .with_metadata(self.metadata.clone())
                .finalized()
                .map_err(|err| {
                    warn!(error = %err, "Ignoring commit");
                    MarkingError::from(err)
                })?
                .into(),
        };

        let kind = region.kind();
        let index = self.case.push_injury(region);
        debug!(%kind, index, case = %self.case.case_id, "Committed injury");

        self.state = MarkingState::Idle;
        self.metadata = InjuryMetadata::default();
        self.radius = 0.0;
        Ok(index)
    }

    /// Remove a committed injury from the draft case.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InjuryIndexOutOfRange`] for a bad index.
    pub fn remove_injury(&mut self, index: usize) -> MarkingResult<InjuryRegion> {
        let removed = self.case.remove_injury(index)?;
        debug!(index, case = %self.case.case_id, "Removed injury");
        Ok(removed)
    }

    /// Hand over the draft case and start a fresh one under `next_case_id`.
    ///
    /// Anything in progress is discarded.
    pub fn take_case(&mut self, next_case_id: impl Into<String>) -> CaseRecord {
        let case = mem::replace(&mut self.case, CaseRecord::new(next_case_id));
        debug!(case = %case.case_id, injuries = case.len(), "Took draft case");
        self.state = MarkingState::Idle;
        self.metadata = InjuryMetadata::default();
        self.radius = 0.0;
        case
    }
}
