//! Guard configuration loader.

use std::path::Path;

use obelisk_core::GuardConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for guard configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GuardConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GuardConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GuardConfig> {
        let config: GuardConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> LoadResult<GuardConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}
