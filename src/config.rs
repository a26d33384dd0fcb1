//! Swipe Configuration
//!
//! Layout and gesture constants, in CSS pixels.

/// Card geometry and gesture tuning shared by every row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Card height, also the swipe travel distance
    pub card_height_px: f64,
    /// Extra width of the delete action beyond the card height
    pub action_margin_px: f64,
    /// Fraction of travel a release must reach to change anchor
    pub threshold_fraction: f64,
    /// Duration of the row exit transition (keep in sync with styles.css)
    pub exit_transition_ms: u32,
    /// Transparent gap below each row
    pub row_gap_px: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            card_height_px: 90.0,
            action_margin_px: 20.0,
            threshold_fraction: 0.3,
            exit_transition_ms: 300,
            row_gap_px: 8.0,
        }
    }
}

impl SwipeConfig {
    /// Width of the delete action behind the card
    pub fn action_width_px(&self) -> f64 {
        self.card_height_px + self.action_margin_px
    }
}
