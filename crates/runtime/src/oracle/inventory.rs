//! Player containers served through [`obelisk_core::InventoryOracle`].
use obelisk_core::{ContainerKind, InventoryOracle, ItemSlot};
use std::collections::HashMap;

/// InventoryOracle implementation; containers that were never set read as
/// not loaded.
#[derive(Clone, Debug, Default)]
pub struct InventoryOracleImpl {
    containers: HashMap<ContainerKind, Vec<ItemSlot>>,
}

impl InventoryOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_container(&mut self, kind: ContainerKind, slots: Vec<ItemSlot>) {
        self.containers.insert(kind, slots);
    }

    pub fn clear_container(&mut self, kind: ContainerKind) {
        self.containers.remove(&kind);
    }
}

impl InventoryOracle for InventoryOracleImpl {
    fn container(&self, kind: ContainerKind) -> Option<&[ItemSlot]> {
        self.containers.get(&kind).map(Vec::as_slice)
    }
}
