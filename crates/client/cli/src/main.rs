//! Replays a recorded menu interaction through the obelisk guard.
//!
//! ```bash
//! # Bundled scenario
//! obelisk obelisk_allowed
//!
//! # Custom scenario and settings
//! OBELISK_CONFIG=guard.toml obelisk path/to/scenario.ron
//! ```
mod config;
mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use config::CliConfig;
use obelisk_content::{ConfigLoader, Scenario, ScenarioLoader};
use obelisk_core::{Decision, GuardConfig};
use obelisk_runtime::{ReplayReport, replay};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env().with_args(std::env::args().skip(1));
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let guard_config = load_guard_config(&config)?;
    let scenario = load_scenario(config.scenario())?;

    tracing::info!(
        "Replaying '{}' with threshold {}",
        config.scenario(),
        guard_config.wealth_threshold
    );

    let report = replay(&scenario, guard_config)?;
    print_report(&report);

    Ok(())
}

fn load_guard_config(config: &CliConfig) -> Result<GuardConfig> {
    match &config.config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => ConfigLoader::bundled(),
    }
}

/// Treats the argument as a file when it exists, otherwise as a bundled name.
fn load_scenario(name: &str) -> Result<Scenario> {
    let path = Path::new(name);
    if path.is_file() {
        ScenarioLoader::load(path).with_context(|| format!("loading scenario {}", path.display()))
    } else {
        ScenarioLoader::bundled(name)
    }
}

fn print_report(report: &ReplayReport) {
    for step in &report.steps {
        let outcome = match step.decision {
            Decision::Inactive(reason) => format!("inactive ({reason})"),
            Decision::Retained => "retained".to_string(),
            Decision::Active {
                location,
                risk,
                blocked: true,
            } => format!("removed: {risk} at risk, obelisk at {location}"),
            Decision::Active { location, risk, .. } => {
                format!("active: {risk} at risk, obelisk at {location}")
            }
        };
        println!("{:<24} {:<32} {}", step.entry.option, step.entry.target, outcome);
    }

    let remaining: Vec<&str> = report.menu.iter().map(|entry| entry.option.as_str()).collect();
    println!("menu: [{}]", remaining.join(", "));

    match &report.marker {
        Some(label) => println!("marker: '{}' at {} ({})", label.text, label.location, label.color),
        None => println!("marker: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scenario_name_falls_back_to_bundled() {
        let scenario = load_scenario("obelisk_allowed").unwrap();
        assert_eq!(scenario.menu.len(), 3);
        assert!(load_scenario("missing_scenario").is_err());
    }

    #[test]
    fn scenario_path_is_loaded_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(instanced: true)").unwrap();

        let scenario = load_scenario(file.path().to_str().unwrap()).unwrap();
        assert!(scenario.instanced);
    }

    #[test]
    fn bundled_settings_without_override() {
        let config = load_guard_config(&CliConfig::default()).unwrap();
        assert_eq!(config.wealth_threshold, GuardConfig::DEFAULT_WEALTH_THRESHOLD);
    }
}
