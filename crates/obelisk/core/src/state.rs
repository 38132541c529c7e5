//! Cross-frame protection state.

use crate::types::LocalPoint;

/// Whether the obelisk is currently locked, and where it stands.
///
/// The location is only ever present while protection is active: the type
/// offers no way to set one without the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectionState {
    location: Option<LocalPoint>,
}

impl ProtectionState {
    pub const INACTIVE: Self = Self { location: None };

    pub const fn new() -> Self {
        Self::INACTIVE
    }

    pub const fn is_active(&self) -> bool {
        self.location.is_some()
    }

    /// Scene location of the protected obelisk, present only while active.
    pub const fn location(&self) -> Option<LocalPoint> {
        self.location
    }

    pub(crate) fn activate(&mut self, location: LocalPoint) {
        self.location = Some(location);
    }

    pub fn reset(&mut self) {
        self.location = None;
    }
}
