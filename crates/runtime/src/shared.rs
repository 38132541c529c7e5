//! Protection state shared with a render thread.
use obelisk_core::ProtectionState;
use std::sync::{Arc, RwLock};

use crate::error::{Result, RuntimeError};

/// Cloneable handle to the latest published [`ProtectionState`].
///
/// The session writes after every evaluation; readers take a copy, so a frame
/// never observes a half-updated flag/location pair.
#[derive(Clone, Debug, Default)]
pub struct SharedProtection {
    state: Arc<RwLock<ProtectionState>>,
}

impl SharedProtection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: ProtectionState) -> Result<()> {
        let mut current = self.state.write().map_err(|_| RuntimeError::LockPoisoned)?;
        *current = state;
        Ok(())
    }

    pub fn snapshot(&self) -> Result<ProtectionState> {
        let state = self.state.read().map_err(|_| RuntimeError::LockPoisoned)?;
        Ok(*state)
    }
}
