//! Command-line configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Scenario replayed when nothing else is requested.
pub const DEFAULT_SCENARIO: &str = "obelisk_blocked";

/// Where the CLI takes its inputs from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// TOML settings file; bundled defaults when unset.
    pub config_path: Option<PathBuf>,
    /// Scenario file path or bundled scenario name.
    pub scenario: Option<String>,
    /// Directory for a `obelisk.log` file next to stderr output.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OBELISK_CONFIG` - Settings file (default: bundled config.toml)
    /// - `OBELISK_SCENARIO` - Scenario path or bundled name (default: obelisk_blocked)
    /// - `OBELISK_LOG_DIR` - Also write logs to this directory (default: stderr only)
    pub fn from_env() -> Self {
        Self {
            config_path: read_env::<PathBuf>("OBELISK_CONFIG"),
            scenario: read_env::<String>("OBELISK_SCENARIO"),
            log_dir: read_env::<PathBuf>("OBELISK_LOG_DIR"),
        }
    }

    /// A positional argument overrides `OBELISK_SCENARIO`.
    pub fn with_args<I>(mut self, mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        if let Some(scenario) = args.next() {
            self.scenario = Some(scenario);
        }
        self
    }

    pub fn scenario(&self) -> &str {
        self.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())?
        .parse()
        .ok()
}
