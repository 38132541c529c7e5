//! "Protection Active" ground label.
//!
//! Drawing belongs to the host; this module only decides whether a label is
//! due this frame and what it says.
use obelisk_core::{
    ClientState, GuardConfig, LocalPoint, MarkerColor, ProtectionState, WorldOracle, is_in_house,
};

/// A label the host should draw on the obelisk's tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerLabel {
    pub text: &'static str,
    pub location: LocalPoint,
    pub color: MarkerColor,
}

/// Per-frame ground marker decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroundMarker {
    enabled: bool,
    color: MarkerColor,
}

impl GroundMarker {
    pub const TEXT: &'static str = "Protection Active";

    pub fn new(config: &GuardConfig) -> Self {
        Self {
            enabled: config.show_ground_marker,
            color: config.marker_color,
        }
    }

    /// Returns the label to draw, or `None` when any precondition fails.
    pub fn render<W>(&self, state: &ProtectionState, world: &W) -> Option<MarkerLabel>
    where
        W: WorldOracle + ?Sized,
    {
        if !self.enabled {
            tracing::trace!("ground marker disabled in config");
            return None;
        }

        let Some(location) = state.location() else {
            tracing::trace!("protection not active");
            return None;
        };

        if !is_in_house(world) {
            tracing::debug!("ground marker hidden: not in a house");
            return None;
        }

        let client_state = world.client_state();
        if client_state != ClientState::LoggedIn {
            tracing::debug!("ground marker hidden: client state {}", client_state);
            return None;
        }

        Some(MarkerLabel {
            text: Self::TEXT,
            location,
            color: self.color,
        })
    }
}
