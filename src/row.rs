//! Swipeable Row Model
//!
//! Per-row state behind a vehicle card: the drag anchors, the visibility
//! flag driving the exit transition, and the deferred reset after delete.

use leptos_swipe::{AnchoredDrag, SwipeState};

use crate::config::SwipeConfig;
use crate::models::VehicleId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRow {
    id: VehicleId,
    drag: AnchoredDrag,
    visible: bool,
    reset_pending: bool,
}

impl SwipeRow {
    pub fn new(id: VehicleId, config: &SwipeConfig) -> Self {
        Self {
            id,
            drag: AnchoredDrag::new(config.card_height_px, config.threshold_fraction),
            visible: true,
            reset_pending: false,
        }
    }

    #[cfg(test)]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn drag(&self) -> &AnchoredDrag {
        &self.drag
    }

    pub fn drag_mut(&mut self) -> &mut AnchoredDrag {
        &mut self.drag
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Delete action pressed: hide the row and queue the snap back.
    /// Returns the id to remove, or None if the row is already leaving.
    pub fn press_action(&mut self) -> Option<VehicleId> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.reset_pending = true;
        Some(self.id)
    }

    /// Run the snap back queued by `press_action`
    pub fn run_deferred_reset(&mut self) {
        if self.reset_pending {
            self.reset_pending = false;
            self.drag.snap_to(SwipeState::Resting);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garage::Garage;

    fn revealed_row(id: VehicleId) -> SwipeRow {
        let mut row = SwipeRow::new(id, &SwipeConfig::default());
        row.drag_mut().begin();
        row.drag_mut().drag_to(-45.0);
        row.drag_mut().release();
        row
    }

    #[test]
    fn test_half_swipe_reveals_and_short_swipe_back_hides() {
        let config = SwipeConfig::default();
        let travel = config.card_height_px;
        let mut row = SwipeRow::new(VehicleId(1), &config);

        row.drag_mut().begin();
        row.drag_mut().drag_to(-0.5 * travel);
        assert_eq!(row.drag_mut().release(), SwipeState::Revealed);

        // Back to 10% of travel
        row.drag_mut().begin();
        row.drag_mut().drag_to(0.9 * travel);
        assert_eq!(row.drag_mut().release(), SwipeState::Resting);
    }

    #[test]
    fn test_action_removes_hides_and_defers_reset() {
        let mut garage = Garage::seeded();
        let id = garage.vehicles()[2].id;
        let mut row = revealed_row(id);

        let removed = row.press_action();
        assert_eq!(removed, Some(id));
        garage.remove(id);

        assert!(garage.vehicles().iter().all(|v| v.id != id));
        assert!(!row.visible());
        assert!(row.reset_pending());
        // Still displaced until the deferred task runs
        assert_eq!(row.drag().state(), SwipeState::Revealed);

        row.run_deferred_reset();
        assert!(!row.reset_pending());
        assert_eq!(row.drag().state(), SwipeState::Resting);
        assert_eq!(row.drag().offset(), 0.0);
    }

    #[test]
    fn test_new_row_rests_visible() {
        let row = SwipeRow::new(VehicleId(9), &SwipeConfig::default());
        assert_eq!(row.id(), VehicleId(9));
        assert!(row.visible());
        assert!(!row.reset_pending());
        assert_eq!(row.drag().state(), SwipeState::Resting);
    }

    #[test]
    fn test_second_press_while_leaving_is_ignored() {
        let mut row = revealed_row(VehicleId(3));
        assert!(row.press_action().is_some());
        assert_eq!(row.press_action(), None);
    }

    #[test]
    fn test_reset_without_press_does_nothing() {
        let mut row = revealed_row(VehicleId(5));
        row.run_deferred_reset();
        assert_eq!(row.drag().state(), SwipeState::Revealed);
    }
}
