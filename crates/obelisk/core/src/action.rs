//! Candidate menu entries.

/// Keywords that mark a menu target as the obelisk.
const OBELISK_KEYWORDS: [&str; 2] = ["obelisk", "wilderness portal"];

/// Options that would teleport the player or arm a teleport.
const BLOCKED_OPTIONS: [&str; 3] = ["teleport to destination", "activate", "set destination"];

/// A menu entry the host is about to offer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateAction {
    /// Verb shown to the player, e.g. "Activate".
    pub option: String,
    /// Free text naming the target, possibly with markup, e.g.
    /// "<col=ffff>Wilderness Obelisk".
    pub target: String,
}

impl CandidateAction {
    pub fn new(option: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
        }
    }

    /// Case-insensitive keyword match on the target text. Empty text never matches.
    pub fn targets_obelisk(&self) -> bool {
        let target = self.target.to_lowercase();
        OBELISK_KEYWORDS
            .iter()
            .any(|keyword| target.contains(keyword))
    }

    /// Case-insensitive exact match against the teleporting options.
    pub fn is_blocked_option(&self) -> bool {
        let option = self.option.to_lowercase();
        BLOCKED_OPTIONS.contains(&option.as_str())
    }
}
