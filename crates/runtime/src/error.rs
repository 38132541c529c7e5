//! Unified error types surfaced by the runtime.
//!
//! The guard itself never fails; these errors cover building hosts from
//! scenarios and sharing state across threads.
use obelisk_core::{ErrorSeverity, GuardError, SceneError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("shared protection state lock was poisoned")]
    LockPoisoned,

    #[error("scenario object rejected")]
    Scene(#[from] SceneError),
}

impl GuardError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::LockPoisoned => ErrorSeverity::Internal,
            RuntimeError::Scene(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::LockPoisoned => "RUNTIME_LOCK_POISONED",
            RuntimeError::Scene(_) => "RUNTIME_SCENE",
        }
    }
}
