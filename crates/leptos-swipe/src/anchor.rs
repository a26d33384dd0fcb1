//! Two-Anchor Drag Model
//!
//! Pure state machine behind a horizontal swipe-to-reveal card.
//! No DOM access, so it can be driven from tests directly.

/// Stable positions a swiped card can rest at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeState {
    /// Card covers the action (offset 0)
    #[default]
    Resting,
    /// Card slid left by the full travel, action exposed
    Revealed,
}

impl SwipeState {
    /// Offset of this anchor for the given travel distance
    pub fn offset(self, travel: f64) -> f64 {
        match self {
            SwipeState::Resting => 0.0,
            SwipeState::Revealed => -travel,
        }
    }

    /// The anchor on the other side
    pub fn other(self) -> Self {
        match self {
            SwipeState::Resting => SwipeState::Revealed,
            SwipeState::Revealed => SwipeState::Resting,
        }
    }

    /// Resolve a release that started at `self`.
    ///
    /// Progress is measured from this anchor towards the other one; reaching
    /// `fraction` of the travel (inclusive) flips the state.
    pub fn settle(self, release_offset: f64, travel: f64, fraction: f64) -> SwipeState {
        if travel <= 0.0 || !release_offset.is_finite() {
            return self;
        }
        let from = self.offset(travel);
        let to = self.other().offset(travel);
        let progress = (release_offset - from) / (to - from);
        if progress >= fraction {
            self.other()
        } else {
            self
        }
    }
}

/// Resolve a release offset for a drag that started at rest
pub fn resolve_anchor(release_offset: f64, travel: f64, fraction: f64) -> SwipeState {
    SwipeState::Resting.settle(release_offset, travel, fraction)
}

/// Continuous drag offset plus the anchor it will settle on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchoredDrag {
    state: SwipeState,
    offset: f64,
    travel: f64,
    threshold: f64,
    /// Offset when the current drag began (None = not dragging)
    drag_origin: Option<f64>,
}

impl AnchoredDrag {
    pub fn new(travel: f64, threshold: f64) -> Self {
        Self {
            state: SwipeState::Resting,
            offset: 0.0,
            travel: travel.max(0.0),
            threshold,
            drag_origin: None,
        }
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn travel(&self) -> f64 {
        self.travel
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Start tracking a drag from the current offset
    pub fn begin(&mut self) {
        self.drag_origin = Some(self.offset);
    }

    /// Move to `dx` pixels from where the drag began, clamped to the anchors
    pub fn drag_to(&mut self, dx: f64) {
        let origin = *self.drag_origin.get_or_insert(self.offset);
        let target = origin + dx;
        if target.is_finite() {
            self.offset = target.clamp(-self.travel, 0.0);
        }
    }

    /// Commit the drag to the nearest anchor by threshold
    pub fn release(&mut self) -> SwipeState {
        self.drag_origin = None;
        self.state = self.state.settle(self.offset, self.travel, self.threshold);
        self.offset = self.state.offset(self.travel);
        self.state
    }

    /// Jump straight to an anchor, bypassing the threshold rule
    pub fn snap_to(&mut self, state: SwipeState) {
        self.drag_origin = None;
        self.state = state;
        self.offset = state.offset(self.travel);
    }
}
