//! Configuration oracle for exposing guard settings to the controller.

use crate::config::{GuardConfig, TargetMissPolicy};

/// Provides access to user-tunable settings.
pub trait ConfigOracle: Send + Sync {
    /// Risk value above which the obelisk is locked.
    fn wealth_threshold(&self) -> u64;

    fn target_miss_policy(&self) -> TargetMissPolicy {
        TargetMissPolicy::Eager
    }
}

impl ConfigOracle for GuardConfig {
    fn wealth_threshold(&self) -> u64 {
        self.wealth_threshold
    }

    fn target_miss_policy(&self) -> TargetMissPolicy {
        self.target_miss_policy
    }
}
