//! Selection and hover state.
//!
//! A single optional organelle id is the whole selection model: written
//! only through the click channel, read by every organelle to compute its
//! ghosting. Hover is tracked here as "which organelle the pointer is
//! over" so the composer can toggle the per-organelle flags.

use crate::organelle::OrganelleId;

/// Shared selection/hover state owned by the scene composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickingState {
    selected: Option<OrganelleId>,
    hovered: Option<OrganelleId>,
}

impl PickingState {
    /// Empty state: nothing selected, nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected organelle, if any.
    #[must_use]
    pub fn selection(&self) -> Option<OrganelleId> {
        self.selected
    }

    /// The organelle currently under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<OrganelleId> {
        self.hovered
    }

    /// Apply a click. A hit selects that organelle (click events stop at
    /// the first mesh hit, so at most one id arrives); a miss clears the
    /// selection. Returns true if the selection changed.
    pub fn handle_click(&mut self, hit: Option<OrganelleId>) -> bool {
        let changed = self.selected != hit;
        self.selected = hit;
        changed
    }

    /// Pointer moved onto an organelle's mesh.
    pub fn handle_enter(&mut self, id: OrganelleId) {
        self.hovered = Some(id);
    }

    /// Pointer left an organelle's mesh.
    ///
    /// Ignores stale leave events for an organelle that is no longer the
    /// hovered one (enter on a sibling can arrive first).
    pub fn handle_leave(&mut self, id: OrganelleId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Explicit reset (the "reset view" control).
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_selects_and_background_clears() {
        let mut state = PickingState::new();
        assert!(state.handle_click(Some(OrganelleId::Golgi)));
        assert_eq!(state.selection(), Some(OrganelleId::Golgi));

        // Background miss resets to none
        assert!(state.handle_click(None));
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn reclick_is_not_a_change() {
        let mut state = PickingState::new();
        let _ = state.handle_click(Some(OrganelleId::Nucleus));
        assert!(!state.handle_click(Some(OrganelleId::Nucleus)));
        assert_eq!(state.selection(), Some(OrganelleId::Nucleus));
    }

    #[test]
    fn at_most_one_selection() {
        let mut state = PickingState::new();
        let _ = state.handle_click(Some(OrganelleId::Golgi));
        let _ = state.handle_click(Some(OrganelleId::Rer));
        // The new click replaces, never accumulates
        assert_eq!(state.selection(), Some(OrganelleId::Rer));
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut state = PickingState::new();
        state.handle_enter(OrganelleId::Golgi);
        state.handle_enter(OrganelleId::Rer);
        // Leave for the previous hover arrives late
        state.handle_leave(OrganelleId::Golgi);
        assert_eq!(state.hovered(), Some(OrganelleId::Rer));
        state.handle_leave(OrganelleId::Rer);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn clear_resets_selection_only() {
        let mut state = PickingState::new();
        let _ = state.handle_click(Some(OrganelleId::Golgi));
        state.handle_enter(OrganelleId::Rer);
        state.clear();
        assert_eq!(state.selection(), None);
        assert_eq!(state.hovered(), Some(OrganelleId::Rer));
    }
}
