//! Replays a scenario's menu through a fresh guard session.
use obelisk_content::Scenario;
use obelisk_core::{CandidateAction, Decision, GuardConfig, ProtectionState};

use crate::error::Result;
use crate::oracle::{MenuList, OracleManager};
use crate::overlay::MarkerLabel;
use crate::session::ObeliskGuard;

/// One menu entry and what the guard made of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    pub entry: CandidateAction,
    pub decision: Decision,
    /// State published after the entry was evaluated.
    pub state: ProtectionState,
}

/// Result of replaying a whole menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    /// Entries left in the menu once every event was handled.
    pub menu: Vec<CandidateAction>,
    /// Ground label for the final state.
    pub marker: Option<MarkerLabel>,
}

impl ReplayReport {
    pub fn removed(&self) -> impl Iterator<Item = &CandidateAction> {
        self.steps
            .iter()
            .filter(|step| step.decision.is_blocked())
            .map(|step| &step.entry)
    }

    /// State after the last entry, inactive for an empty menu.
    pub fn final_state(&self) -> ProtectionState {
        self.steps
            .last()
            .map(|step| step.state)
            .unwrap_or(ProtectionState::INACTIVE)
    }
}

/// Adds each menu entry in order and lets the guard react before the next.
///
/// # Errors
///
/// Returns `RuntimeError::Scene` if the scenario places an object outside the
/// scene.
pub fn replay(scenario: &Scenario, config: GuardConfig) -> Result<ReplayReport> {
    let host = OracleManager::from_scenario(scenario, config)?;
    let env = host.as_guard_env();

    let mut guard = ObeliskGuard::new(host.config());
    guard.start_up();

    let mut menu = MenuList::new();
    let mut steps = Vec::with_capacity(scenario.menu.len());
    for entry in &scenario.menu {
        menu.push(entry.clone());
        let decision = guard.on_menu_entry_added(entry, &env, &mut menu);
        steps.push(ReplayStep {
            entry: entry.clone(),
            decision,
            state: guard.state(),
        });
    }

    let marker = guard.ground_marker(host.world());
    guard.shut_down();

    Ok(ReplayReport {
        steps,
        menu: menu.entries().to_vec(),
        marker,
    })
}
