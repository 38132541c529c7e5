//! Traits describing read-only host data.
//!
//! Oracles expose the player's location, the loaded scene, item containers,
//! item prices and user settings. The [`Env`] aggregate bundles them so the
//! controller can evaluate a menu entry without coupling to a concrete host.
mod config;
mod items;
mod menu;
mod world;

pub use config::ConfigOracle;
pub use items::{InventoryOracle, ItemOracle};
pub use menu::MenuEntries;
pub use world::WorldOracle;

/// Aggregates the read-only oracles consulted on every evaluation.
pub struct Env<'a, W, I, K, C>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    K: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    world: &'a W,
    items: &'a I,
    inventory: &'a K,
    config: &'a C,
}

pub type GuardEnv<'a> = Env<
    'a,
    dyn WorldOracle + 'a,
    dyn ItemOracle + 'a,
    dyn InventoryOracle + 'a,
    dyn ConfigOracle + 'a,
>;

// Manual impls: derives would demand `Clone` from the unsized oracle types.
impl<W, I, K, C> Clone for Env<'_, W, I, K, C>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    K: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, I, K, C> Copy for Env<'_, W, I, K, C>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    K: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

impl<'a, W, I, K, C> Env<'a, W, I, K, C>
where
    W: WorldOracle + ?Sized,
    I: ItemOracle + ?Sized,
    K: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(world: &'a W, items: &'a I, inventory: &'a K, config: &'a C) -> Self {
        Self {
            world,
            items,
            inventory,
            config,
        }
    }

    pub fn world(&self) -> &'a W {
        self.world
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn inventory(&self) -> &'a K {
        self.inventory
    }

    pub fn config(&self) -> &'a C {
        self.config
    }
}

impl<'a, W, I, K, C> Env<'a, W, I, K, C>
where
    W: WorldOracle + 'a,
    I: ItemOracle + 'a,
    K: InventoryOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `GuardEnv`.
    pub fn as_guard_env(&self) -> GuardEnv<'a> {
        let world: &'a dyn WorldOracle = self.world;
        let items: &'a dyn ItemOracle = self.items;
        let inventory: &'a dyn InventoryOracle = self.inventory;
        let config: &'a dyn ConfigOracle = self.config;
        Env::new(world, items, inventory, config)
    }
}
