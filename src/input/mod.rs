//! Pointer events delivered by the consumer.
//!
//! The consumer performs its own hit-testing against the organelle meshes
//! and reports results here. Click propagation stops at the first mesh
//! hit, so a [`PointerEvent::Click`] carries at most one organelle id; a
//! `None` hit means the pointer missed every organelle (background).

use crate::organelle::OrganelleId;

/// One pointer event, already hit-tested by the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Click resolved to an organelle mesh, or to empty background.
    Click {
        /// The topmost organelle hit, if any.
        hit: Option<OrganelleId>,
    },
    /// Pointer entered an organelle's mesh.
    Enter(OrganelleId),
    /// Pointer left an organelle's mesh.
    Leave(OrganelleId),
}

/// Zoom signal from the overlay controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Step the camera closer.
    In,
    /// Step the camera away.
    Out,
}
