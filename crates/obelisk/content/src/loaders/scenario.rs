//! Host scenario loader.
//!
//! A scenario captures everything a host would report during one menu
//! interaction: where the player stands, what the scene holds, what the player
//! carries, what items cost, and the menu entries added in order.

use std::path::Path;

use obelisk_core::{
    CandidateAction, ClientState, ItemId, ItemSlot, LocalPoint, ObjectId, WorldPoint,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Object placement in a scenario scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioObject {
    pub plane: u8,
    pub id: ObjectId,
    pub location: LocalPoint,
}

/// Price entry for one item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioItem {
    pub id: ItemId,
    pub price: u64,
    #[serde(default)]
    pub stackable: bool,
}

/// Host snapshot plus the menu entries to replay against it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub client_state: ClientState,
    pub instanced: bool,
    pub player: Option<LocalPoint>,
    pub plane: u8,
    /// World tile the scene's local origin was copied from; `None` when the
    /// host cannot map the instance back to a template.
    pub instance_origin: Option<WorldPoint>,
    pub objects: Vec<ScenarioObject>,
    pub inventory: Option<Vec<ItemSlot>>,
    pub equipment: Option<Vec<ItemSlot>>,
    pub items: Vec<ScenarioItem>,
    pub menu: Vec<CandidateAction>,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        Ok(scenario)
    }

    /// Scenarios shipped with the crate, by name.
    pub fn bundled(name: &str) -> LoadResult<Scenario> {
        let content = match name {
            "obelisk_blocked" => include_str!("../../data/scenarios/obelisk_blocked.ron"),
            "obelisk_allowed" => include_str!("../../data/scenarios/obelisk_allowed.ron"),
            other => anyhow::bail!("Unknown bundled scenario '{}'", other),
        };
        Self::parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_scenarios_parse() {
        let blocked = ScenarioLoader::bundled("obelisk_blocked").unwrap();
        assert_eq!(blocked.client_state, ClientState::LoggedIn);
        assert!(blocked.instanced);
        assert_eq!(blocked.objects.len(), 2);
        assert_eq!(blocked.menu.last().unwrap().option, "Activate");
        assert_eq!(
            blocked.inventory.as_ref().unwrap()[1],
            ItemSlot::EMPTY
        );
        assert!(!blocked.items[1].stackable);

        let allowed = ScenarioLoader::bundled("obelisk_allowed").unwrap();
        assert_eq!(allowed.equipment, None);
    }

    #[test]
    fn unknown_bundled_scenario_fails() {
        assert!(ScenarioLoader::bundled("nope").is_err());
    }

    #[test]
    fn omitted_fields_use_defaults() {
        let scenario = ScenarioLoader::parse("(instanced: true)").unwrap();
        assert!(scenario.instanced);
        assert_eq!(scenario.client_state, ClientState::LoginScreen);
        assert_eq!(scenario.player, None);
        assert!(scenario.menu.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                client_state: LoggedIn,
                menu: [(option: "Activate", target: "Obelisk")],
            )"#
        )
        .unwrap();

        let scenario = ScenarioLoader::load(file.path()).unwrap();
        assert_eq!(
            scenario.menu,
            vec![CandidateAction::new("Activate", "Obelisk")]
        );
    }

    #[test]
    fn malformed_scenario_reports_parse_error() {
        let err = ScenarioLoader::parse("(plane: \"zero\")").unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario RON"));
    }
}
