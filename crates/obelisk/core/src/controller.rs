//! Protection state machine.
//!
//! Every menu entry the host adds is evaluated from scratch against the
//! current snapshot. Any check that fails drops the guard back to inactive;
//! only a fully confirmed obelisk entry with too much wealth at stake keeps it
//! active, and teleporting options on that entry are removed from the menu.

use crate::action::CandidateAction;
use crate::config::{GuardConfig, TargetMissPolicy};
use crate::env::{GuardEnv, MenuEntries};
use crate::region;
use crate::risk;
use crate::scene;
use crate::state::ProtectionState;
use crate::types::{LocalPoint, ObjectId};

/// Outcome of evaluating one menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Protection is off; the entry was left alone.
    Inactive(InactiveReason),
    /// The entry was unrelated and the previous state was kept.
    Retained,
    /// Protection is on.
    Active {
        location: LocalPoint,
        risk: u64,
        /// Whether the entry was removed from the menu.
        blocked: bool,
    },
}

impl Decision {
    pub const fn is_active(&self) -> bool {
        matches!(self, Decision::Active { .. })
    }

    pub const fn is_blocked(&self) -> bool {
        matches!(self, Decision::Active { blocked: true, .. })
    }
}

/// Why an evaluation ended inactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum InactiveReason {
    /// Player is not inside a house instance.
    OutsideHouse,
    /// The entry does not target the obelisk.
    UnrelatedTarget,
    /// No obelisk on the current plane.
    ObeliskNotFound,
    /// An object was found but it is not the protected obelisk.
    ObeliskMismatch(ObjectId),
    /// Wealth at risk does not exceed the configured threshold.
    BelowThreshold { risk: u64, threshold: u64 },
}

/// Owns the [`ProtectionState`] and updates it once per menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectionController {
    obelisk: ObjectId,
    state: ProtectionState,
}

impl ProtectionController {
    pub fn new() -> Self {
        Self::with_obelisk(GuardConfig::OBELISK_ID)
    }

    /// Guards a different object id. Used by hosts with custom content.
    pub fn with_obelisk(obelisk: ObjectId) -> Self {
        Self {
            obelisk,
            state: ProtectionState::INACTIVE,
        }
    }

    pub fn obelisk(&self) -> ObjectId {
        self.obelisk
    }

    /// Current state, for the presentation layer.
    pub fn state(&self) -> &ProtectionState {
        &self.state
    }

    pub fn is_protection_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn protected_location(&self) -> Option<LocalPoint> {
        self.state.location()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Evaluates the entry that was just appended to `menu`.
    ///
    /// Never fails. When the entry is a teleporting option on a protected
    /// obelisk, the last entry of `menu` is removed.
    pub fn on_menu_entry_added<M>(
        &mut self,
        candidate: &CandidateAction,
        env: &GuardEnv<'_>,
        menu: &mut M,
    ) -> Decision
    where
        M: MenuEntries + ?Sized,
    {
        let decision = self.evaluate(candidate, env, menu.len());

        match decision {
            Decision::Inactive(reason) => {
                tracing::debug!(
                    "obelisk guard inactive ({}) for '{}' on '{}'",
                    reason,
                    candidate.option,
                    candidate.target
                );
                self.state.reset();
            }
            Decision::Retained => {
                tracing::trace!("unrelated entry '{}' kept protection state", candidate.target);
            }
            Decision::Active {
                location,
                risk,
                blocked,
            } => {
                if !self.state.is_active() {
                    tracing::info!(
                        "obelisk protection active at {}: {} at risk",
                        location,
                        risk
                    );
                }
                self.state.activate(location);
                if blocked {
                    tracing::debug!("removed '{}' from the menu", candidate.option);
                    menu.remove_last();
                }
            }
        }

        decision
    }

    fn evaluate(&self, candidate: &CandidateAction, env: &GuardEnv<'_>, menu_len: usize) -> Decision {
        let world = env.world();

        if !region::is_in_house(world) {
            return Decision::Inactive(InactiveReason::OutsideHouse);
        }

        if !candidate.targets_obelisk() {
            return match env.config().target_miss_policy() {
                TargetMissPolicy::SingleEntry if menu_len != 1 => Decision::Retained,
                _ => Decision::Inactive(InactiveReason::UnrelatedTarget),
            };
        }

        let obelisk = match scene::locate(world, self.obelisk) {
            None => return Decision::Inactive(InactiveReason::ObeliskNotFound),
            Some(object) if object.id != self.obelisk => {
                return Decision::Inactive(InactiveReason::ObeliskMismatch(object.id));
            }
            Some(object) => object,
        };

        let assessment = risk::assess_risk(env.inventory(), env.items());
        let threshold = env.config().wealth_threshold();
        if !assessment.exceeds(threshold) {
            return Decision::Inactive(InactiveReason::BelowThreshold {
                risk: assessment.total,
                threshold,
            });
        }

        Decision::Active {
            location: obelisk.location,
            risk: assessment.total,
            blocked: candidate.is_blocked_option(),
        }
    }
}

impl Default for ProtectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ConfigOracle, Env, InventoryOracle, ItemOracle, WorldOracle};
    use crate::scene::{PlacedObject, TileGrid};
    use crate::types::{ClientState, ContainerKind, ItemId, ItemSlot, RegionId};

    const COINS: ItemId = ItemId(995);
    const OBELISK_AT: LocalPoint = LocalPoint::new(50, 47);

    struct World {
        region: Option<RegionId>,
        grid: TileGrid,
    }

    impl World {
        fn house() -> Self {
            let mut grid = TileGrid::new();
            grid.place(0, PlacedObject::new(GuardConfig::OBELISK_ID, OBELISK_AT))
                .unwrap();
            Self {
                region: Some(RegionId(7769)),
                grid,
            }
        }
    }

    impl WorldOracle for World {
        fn client_state(&self) -> ClientState {
            ClientState::LoggedIn
        }

        fn is_in_instanced_region(&self) -> bool {
            true
        }

        fn player_location(&self) -> Option<LocalPoint> {
            Some(LocalPoint::new(52, 52))
        }

        fn instance_region(&self, _location: LocalPoint) -> Option<RegionId> {
            self.region
        }

        fn current_plane(&self) -> u8 {
            0
        }

        fn tile_grid(&self) -> &TileGrid {
            &self.grid
        }
    }

    /// Coins only: stackable at 1 each, so risk = quantity - 3.
    struct Carried(Vec<ItemSlot>);

    impl Carried {
        fn risk(risk: u32) -> Self {
            Self(vec![ItemSlot::new(COINS, risk + 3)])
        }
    }

    impl InventoryOracle for Carried {
        fn container(&self, kind: ContainerKind) -> Option<&[ItemSlot]> {
            match kind {
                ContainerKind::Inventory => Some(self.0.as_slice()),
                ContainerKind::Equipment => None,
            }
        }
    }

    struct Prices;

    impl ItemOracle for Prices {
        fn unit_price(&self, _id: ItemId) -> u64 {
            1
        }

        fn is_stackable(&self, id: ItemId) -> bool {
            id == COINS
        }
    }

    struct Menu(Vec<&'static str>);

    impl MenuEntries for Menu {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn remove_last(&mut self) {
            self.0.pop();
        }
    }

    fn run(
        controller: &mut ProtectionController,
        world: &World,
        carried: &Carried,
        config: &GuardConfig,
        candidate: CandidateAction,
        menu: &mut Menu,
    ) -> Decision {
        let env: GuardEnv = Env::new(
            world as &dyn WorldOracle,
            &Prices as &dyn ItemOracle,
            carried as &dyn InventoryOracle,
            config as &dyn ConfigOracle,
        );
        controller.on_menu_entry_added(&candidate, &env, menu)
    }

    #[test]
    fn blocks_activate_when_wealth_exceeds_threshold() {
        let mut controller = ProtectionController::new();
        let mut menu = Menu(vec!["Cancel", "Walk here", "Activate"]);

        let decision = run(
            &mut controller,
            &World::house(),
            &Carried::risk(2_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut menu,
        );

        assert_eq!(
            decision,
            Decision::Active {
                location: OBELISK_AT,
                risk: 2_000_000,
                blocked: true
            }
        );
        assert!(controller.is_protection_active());
        assert_eq!(controller.protected_location(), Some(OBELISK_AT));
        assert_eq!(menu.0, vec!["Cancel", "Walk here"]);
    }

    #[test]
    fn allows_activate_below_threshold() {
        let mut controller = ProtectionController::new();
        let mut menu = Menu(vec!["Cancel", "Activate"]);

        let decision = run(
            &mut controller,
            &World::house(),
            &Carried::risk(500_000),
            &GuardConfig::default(),
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut menu,
        );

        assert_eq!(
            decision,
            Decision::Inactive(InactiveReason::BelowThreshold {
                risk: 500_000,
                threshold: 1_000_000
            })
        );
        assert!(!controller.is_protection_active());
        assert_eq!(controller.protected_location(), None);
        assert_eq!(menu.0, vec!["Cancel", "Activate"]);
    }

    #[test]
    fn risk_equal_to_threshold_is_allowed() {
        let mut controller = ProtectionController::new();
        let mut menu = Menu(vec!["Activate"]);

        let decision = run(
            &mut controller,
            &World::house(),
            &Carried::risk(1_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut menu,
        );

        assert!(!decision.is_active());
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn examine_keeps_entry_but_activates_protection() {
        let mut controller = ProtectionController::new();
        let mut menu = Menu(vec!["Cancel", "Examine"]);

        let decision = run(
            &mut controller,
            &World::house(),
            &Carried::risk(5_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Examine", "Wilderness Obelisk"),
            &mut menu,
        );

        assert!(decision.is_active());
        assert!(!decision.is_blocked());
        assert!(controller.is_protection_active());
        assert_eq!(menu.0, vec!["Cancel", "Examine"]);
    }

    #[test]
    fn leaving_the_house_resets_state() {
        let mut controller = ProtectionController::new();
        let carried = Carried::risk(5_000_000);
        let config = GuardConfig::default();
        let mut menu = Menu(vec!["Activate"]);

        run(
            &mut controller,
            &World::house(),
            &carried,
            &config,
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut menu,
        );
        assert!(controller.is_protection_active());

        let mut outside = World::house();
        outside.region = Some(RegionId(12850));
        let mut menu = Menu(vec!["Activate"]);
        let decision = run(
            &mut controller,
            &outside,
            &carried,
            &config,
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut menu,
        );

        assert_eq!(decision, Decision::Inactive(InactiveReason::OutsideHouse));
        assert_eq!(*controller.state(), ProtectionState::INACTIVE);
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn missing_obelisk_resets_state() {
        let mut controller = ProtectionController::new();
        let mut world = World::house();
        world.grid = TileGrid::new();

        let decision = run(
            &mut controller,
            &world,
            &Carried::risk(5_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut Menu(vec!["Activate"]),
        );

        assert_eq!(decision, Decision::Inactive(InactiveReason::ObeliskNotFound));
        assert!(!controller.is_protection_active());
    }

    #[test]
    fn unrelated_target_clears_eagerly_by_default() {
        let mut controller = ProtectionController::new();
        let world = World::house();
        let carried = Carried::risk(5_000_000);
        let config = GuardConfig::default();

        run(
            &mut controller,
            &world,
            &carried,
            &config,
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut Menu(vec!["Cancel", "Activate"]),
        );
        assert!(controller.is_protection_active());

        let decision = run(
            &mut controller,
            &world,
            &carried,
            &config,
            CandidateAction::new("Pray-at", "Altar"),
            &mut Menu(vec!["Cancel", "Walk here", "Pray-at"]),
        );

        assert_eq!(decision, Decision::Inactive(InactiveReason::UnrelatedTarget));
        assert!(!controller.is_protection_active());
    }

    #[test]
    fn single_entry_policy_keeps_state_while_menu_is_busy() {
        let mut controller = ProtectionController::new();
        let world = World::house();
        let carried = Carried::risk(5_000_000);
        let config = GuardConfig {
            target_miss_policy: TargetMissPolicy::SingleEntry,
            ..GuardConfig::default()
        };

        run(
            &mut controller,
            &world,
            &carried,
            &config,
            CandidateAction::new("Activate", "Wilderness Obelisk"),
            &mut Menu(vec!["Cancel", "Activate"]),
        );

        let decision = run(
            &mut controller,
            &world,
            &carried,
            &config,
            CandidateAction::new("Pray-at", "Altar"),
            &mut Menu(vec!["Cancel", "Pray-at"]),
        );
        assert_eq!(decision, Decision::Retained);
        assert_eq!(controller.protected_location(), Some(OBELISK_AT));

        let decision = run(
            &mut controller,
            &world,
            &carried,
            &config,
            CandidateAction::new("Cancel", ""),
            &mut Menu(vec!["Cancel"]),
        );
        assert_eq!(decision, Decision::Inactive(InactiveReason::UnrelatedTarget));
        assert!(!controller.is_protection_active());
    }

    #[test]
    fn reset_clears_state() {
        let mut controller = ProtectionController::new();
        run(
            &mut controller,
            &World::house(),
            &Carried::risk(5_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Set destination", "Obelisk"),
            &mut Menu(vec!["Set destination"]),
        );
        assert!(controller.is_protection_active());

        controller.reset();
        assert!(!controller.is_protection_active());
        assert_eq!(controller.protected_location(), None);
    }

    #[test]
    fn guards_a_custom_object_id() {
        let custom = ObjectId(14826);
        let mut controller = ProtectionController::with_obelisk(custom);
        let mut world = World::house();
        world
            .grid
            .place(0, PlacedObject::new(custom, LocalPoint::new(20, 20)))
            .unwrap();

        let decision = run(
            &mut controller,
            &world,
            &Carried::risk(5_000_000),
            &GuardConfig::default(),
            CandidateAction::new("Activate", "Obelisk"),
            &mut Menu(vec!["Activate"]),
        );

        assert_eq!(controller.obelisk(), custom);
        assert_eq!(controller.protected_location(), Some(LocalPoint::new(20, 20)));
        assert!(decision.is_blocked());
    }
}
