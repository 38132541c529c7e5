use crate::types::{ContainerKind, ItemId, ItemSlot};

/// Price and composition lookups.
pub trait ItemOracle: Send + Sync {
    /// Current unit price of the item. Unknown items are worth nothing.
    fn unit_price(&self, id: ItemId) -> u64;

    /// Whether quantities beyond one share a single slot and are priced per unit.
    fn is_stackable(&self, id: ItemId) -> bool;
}

/// Access to the player's item containers.
pub trait InventoryOracle: Send + Sync {
    /// Slots of the requested container, or `None` when the host has not
    /// loaded it.
    fn container(&self, kind: ContainerKind) -> Option<&[ItemSlot]>;
}
