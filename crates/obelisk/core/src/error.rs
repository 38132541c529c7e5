//! Common error infrastructure for obelisk-core.
//!
//! The decision pipeline itself never fails: every unresolved condition
//! degrades to an inactive [`crate::Decision`]. Errors only exist at the edges,
//! where configuration text is parsed or hosts hand over malformed data.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Temporary condition; the next event may succeed.
    ///
    /// Examples: shared state briefly unavailable
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: malformed colour, unknown policy name
    Validation,

    /// Unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for errors raised around the guard.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable, upper-case `error_code` per variant
pub trait GuardError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
