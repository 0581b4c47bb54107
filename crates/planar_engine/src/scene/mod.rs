//! Seam to the rendering synchronization layer
//!
//! The geometry engine does not own display state. A host-provided
//! [`SceneSync`] implementation mirrors simulation shapes into whatever
//! display layer the host uses, consuming lifecycle events and exposing the
//! shape-to-display mapping. Only the interface lives here.

use crate::geometry::ShapeId;

/// Handle to a display-side object mirrored from a simulation shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u64);

/// Lifecycle events the sync layer consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// Shape entered the world
    Added(ShapeId),
    /// Shape position or geometry changed
    Updated(ShapeId),
    /// Shape left the world
    Removed(ShapeId),
}

/// Mirrors simulation entities into a display layer
///
/// Implementations are expected to be idempotent for repeated `Updated`
/// events and to drop the mapping on `Removed`.
pub trait SceneSync {
    /// Consume one lifecycle event
    fn apply(&mut self, event: SceneEvent);

    /// Display handle currently mapped to a shape, if it is mirrored
    fn display_handle(&self, shape: ShapeId) -> Option<DisplayHandle>;
}
