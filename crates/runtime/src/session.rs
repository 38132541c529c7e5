//! Plugin-lifetime wrapper around the protection controller.
use obelisk_core::{
    CandidateAction, Decision, GuardConfig, GuardEnv, GuardError, MenuEntries,
    ProtectionController, ProtectionState, WorldOracle,
};

use crate::overlay::{GroundMarker, MarkerLabel};
use crate::shared::SharedProtection;

/// One guard session, from start-up to shut-down.
///
/// Menu events and render frames may arrive on different threads; the session
/// owns the controller and mirrors every state change into a
/// [`SharedProtection`] handle that the render side reads.
#[derive(Debug)]
pub struct ObeliskGuard {
    controller: ProtectionController,
    marker: GroundMarker,
    shared: SharedProtection,
}

impl ObeliskGuard {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            controller: ProtectionController::new(),
            marker: GroundMarker::new(config),
            shared: SharedProtection::new(),
        }
    }

    pub fn start_up(&mut self) {
        tracing::info!("obelisk guard started");
        self.reset();
    }

    pub fn shut_down(&mut self) {
        tracing::info!("obelisk guard stopped");
        self.reset();
    }

    /// Evaluates a newly added menu entry and publishes the resulting state.
    pub fn on_menu_entry_added<M>(
        &mut self,
        candidate: &CandidateAction,
        env: &GuardEnv<'_>,
        menu: &mut M,
    ) -> Decision
    where
        M: MenuEntries + ?Sized,
    {
        let decision = self.controller.on_menu_entry_added(candidate, env, menu);
        self.publish();
        decision
    }

    /// Label to draw this frame, read from the published state.
    pub fn ground_marker<W>(&self, world: &W) -> Option<MarkerLabel>
    where
        W: WorldOracle + ?Sized,
    {
        match self.shared.snapshot() {
            Ok(state) => self.marker.render(&state, world),
            Err(error) => {
                tracing::warn!("[{}] {}", error.error_code(), error);
                None
            }
        }
    }

    /// Handle for readers on other threads.
    pub fn shared(&self) -> SharedProtection {
        self.shared.clone()
    }

    pub fn controller(&self) -> &ProtectionController {
        &self.controller
    }

    pub fn state(&self) -> ProtectionState {
        *self.controller.state()
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.publish();
    }

    fn publish(&self) {
        if let Err(error) = self.shared.publish(*self.controller.state()) {
            tracing::warn!("[{}] {}", error.error_code(), error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{MenuList, OracleManager};
    use obelisk_content::ScenarioLoader;
    use obelisk_core::{ClientState, LocalPoint};

    fn blocked_host() -> OracleManager {
        let scenario = ScenarioLoader::bundled("obelisk_blocked").unwrap();
        OracleManager::from_scenario(&scenario, GuardConfig::default()).unwrap()
    }

    #[test]
    fn activation_is_published_and_marked() {
        let host = blocked_host();
        let mut guard = ObeliskGuard::new(host.config());
        guard.start_up();
        let reader = guard.shared();

        let entry = CandidateAction::new("Activate", "Wilderness Obelisk");
        let mut menu = MenuList::new();
        menu.push(entry.clone());
        let decision = guard.on_menu_entry_added(&entry, &host.as_guard_env(), &mut menu);

        assert!(decision.is_blocked());
        assert!(menu.entries().is_empty());
        assert_eq!(reader.snapshot().unwrap().location(), Some(LocalPoint::new(50, 47)));

        let label = guard.ground_marker(host.world()).unwrap();
        assert_eq!(label.text, GroundMarker::TEXT);
        assert_eq!(label.location, LocalPoint::new(50, 47));
    }

    #[test]
    fn shut_down_clears_published_state() {
        let host = blocked_host();
        let mut guard = ObeliskGuard::new(host.config());
        let entry = CandidateAction::new("Examine", "Wilderness Obelisk");
        let mut menu = MenuList::new();
        menu.push(entry.clone());
        guard.on_menu_entry_added(&entry, &host.as_guard_env(), &mut menu);
        assert!(guard.state().is_active());

        guard.shut_down();
        assert_eq!(guard.shared().snapshot().unwrap(), ProtectionState::INACTIVE);
        assert_eq!(guard.ground_marker(host.world()), None);
    }

    #[test]
    fn marker_hidden_while_hopping() {
        let scenario = ScenarioLoader::bundled("obelisk_blocked").unwrap();
        let host = OracleManager::from_scenario(&scenario, GuardConfig::default()).unwrap();
        let mut guard = ObeliskGuard::new(host.config());
        let entry = CandidateAction::new("Examine", "Obelisk");
        let mut menu = MenuList::new();
        menu.push(entry.clone());
        guard.on_menu_entry_added(&entry, &host.as_guard_env(), &mut menu);

        let mut hopping = host.world().clone();
        hopping.set_client_state(ClientState::Hopping);
        assert_eq!(guard.ground_marker(&hopping), None);
        assert!(guard.ground_marker(host.world()).is_some());
    }

    #[test]
    fn marker_respects_config_toggle() {
        let host = blocked_host();
        let mut config = GuardConfig::default();
        config.show_ground_marker = false;
        let mut guard = ObeliskGuard::new(&config);
        let entry = CandidateAction::new("Examine", "Obelisk");
        let mut menu = MenuList::new();
        menu.push(entry.clone());
        guard.on_menu_entry_added(&entry, &host.as_guard_env(), &mut menu);

        assert!(guard.state().is_active());
        assert_eq!(guard.ground_marker(host.world()), None);
    }
}
