//! Runtime wrappers around host snapshots.
//!
//! These implementations expose `obelisk-core` oracle traits and bundle them
//! into an [`OracleManager`] so the session can build [`obelisk_core::Env`]
//! views on demand. Each manager is one frozen snapshot; hosts rebuild or
//! update it between events.
mod inventory;
mod items;
mod menu;
mod world;

use obelisk_content::Scenario;
use obelisk_core::{ContainerKind, Env, GuardConfig, GuardEnv, PlacedObject};
use std::sync::Arc;

use crate::error::Result;

pub use inventory::InventoryOracleImpl;
pub use items::{ItemOracleImpl, ItemPrice};
pub use menu::MenuList;
pub use world::WorldOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) world: Arc<WorldOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) inventory: Arc<InventoryOracleImpl>,
    pub(crate) config: Arc<GuardConfig>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        world: Arc<WorldOracleImpl>,
        items: Arc<ItemOracleImpl>,
        inventory: Arc<InventoryOracleImpl>,
        config: Arc<GuardConfig>,
    ) -> Self {
        Self {
            world,
            items,
            inventory,
            config,
        }
    }

    /// Builds every oracle from a scenario snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Scene` if an object lies outside the scene.
    pub fn from_scenario(scenario: &Scenario, config: GuardConfig) -> Result<Self> {
        let mut world =
            WorldOracleImpl::new(scenario.client_state, scenario.player, scenario.plane);
        if scenario.instanced {
            world = world.with_instance(scenario.instance_origin);
        }
        for object in &scenario.objects {
            world.place(object.plane, PlacedObject::new(object.id, object.location))?;
        }

        let mut items = ItemOracleImpl::new();
        for item in &scenario.items {
            items.set_price(item.id, item.price, item.stackable);
        }

        let mut inventory = InventoryOracleImpl::new();
        if let Some(slots) = &scenario.inventory {
            inventory.set_container(ContainerKind::Inventory, slots.clone());
        }
        if let Some(slots) = &scenario.equipment {
            inventory.set_container(ContainerKind::Equipment, slots.clone());
        }

        tracing::debug!(
            "built oracles: {} objects, {} priced items",
            scenario.objects.len(),
            scenario.items.len()
        );

        Ok(Self::new(
            Arc::new(world),
            Arc::new(items),
            Arc::new(inventory),
            Arc::new(config),
        ))
    }

    /// Converts oracle manager into GuardEnv for obelisk-core
    pub fn as_guard_env(&self) -> GuardEnv<'_> {
        Env::new(
            self.world.as_ref(),
            self.items.as_ref(),
            self.inventory.as_ref(),
            self.config.as_ref(),
        )
        .as_guard_env()
    }

    pub fn world(&self) -> &WorldOracleImpl {
        &self.world
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}
