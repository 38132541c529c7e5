//! Guard configuration constants and tunable parameters.
use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GuardError};
use crate::types::ObjectId;

/// User-facing settings for the obelisk guard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuardConfig {
    /// Risk value (excluding the three most valuable items) above which the
    /// obelisk's teleport options are removed.
    pub wealth_threshold: u64,
    /// Whether the "Protection Active" ground label is drawn.
    pub show_ground_marker: bool,
    /// Colour of the ground label.
    pub marker_color: MarkerColor,
    /// What to do when a menu entry does not target the obelisk.
    pub target_miss_policy: TargetMissPolicy,
}

impl GuardConfig {
    // ===== compile-time constants =====
    /// Object id of the Wilderness obelisk built in a player-owned house.
    pub const OBELISK_ID: ObjectId = ObjectId(31554);
    /// Number of most valuable candidates kept out of the risk total.
    pub const PROTECTED_SLOTS: usize = 3;
    /// Stackable units beyond this count are always at risk.
    pub const PROTECTED_STACK_UNITS: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WEALTH_THRESHOLD: u64 = 1_000_000;

    pub fn new() -> Self {
        Self {
            wealth_threshold: Self::DEFAULT_WEALTH_THRESHOLD,
            show_ground_marker: true,
            marker_color: MarkerColor::RED,
            target_miss_policy: TargetMissPolicy::default(),
        }
    }

    pub fn with_wealth_threshold(wealth_threshold: u64) -> Self {
        Self {
            wealth_threshold,
            ..Self::new()
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reaction to a menu entry whose target is not the obelisk.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetMissPolicy {
    /// Clear protection whenever the current entry does not target the obelisk.
    #[default]
    Eager,
    /// Clear only when the menu holds exactly one entry; otherwise leave the
    /// state as it was.
    SingleEntry,
}

/// ARGB colour of the ground label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MarkerColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl MarkerColor {
    pub const RED: Self = Self::opaque(0xFF, 0x00, 0x00);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: 0xFF,
            red,
            green,
            blue,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.alpha as u32) << 24 | (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }
}

impl Default for MarkerColor {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Accepts `#RRGGBB` (opaque) or `#AARRGGBB`; the leading `#` is optional.
impl FromStr for MarkerColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))?;

        match hex.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for MarkerColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkerColor> for String {
    fn from(color: MarkerColor) -> Self {
        color.to_string()
    }
}

/// Errors raised while building a [`GuardConfig`] from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid marker colour '{0}', expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("unknown target miss policy '{0}'")]
    UnknownPolicy(String),
}

impl GuardError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidColor(_) => "CONFIG_INVALID_COLOR",
            ConfigError::UnknownPolicy(_) => "CONFIG_UNKNOWN_POLICY",
        }
    }
}

impl TargetMissPolicy {
    /// Parses a policy name, mapping strum's error into [`ConfigError`].
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse()
            .map_err(|_| ConfigError::UnknownPolicy(name.to_string()))
    }
}
