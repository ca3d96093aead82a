//! Interactive marking of injuries on a body mesh.
//!
//! A [`MarkingSession`] turns clicks on the mesh into canonical injury
//! regions on a draft case:
//!
//! - In [`DrawMode::Radius`] a click places the injury center; clicking again
//!   moves it.
//! - In [`DrawMode::Polygon`] each click appends an outline vertex; the
//!   outline is never closed automatically.
//!
//! Switching mode discards work in progress but never touches committed
//! injuries. Invalid actions (a click that misses the mesh, a commit with too
//! few vertices) are rejected with a [`MarkingError`], logged, and leave the
//! session unchanged.
//!
//! [`pick`] finds the world-space point a [`Ray`] hits, for hosts that supply
//! camera rays instead of surface points.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod pick;
mod session;

pub use error::{MarkingError, MarkingResult};
pub use pick::{Ray, pick};
pub use session::{DrawMode, MarkingSession, MarkingState};
