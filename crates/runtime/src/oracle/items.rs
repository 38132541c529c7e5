//! Minimal [`obelisk_core::ItemOracle`] backed by an in-memory price table.
use obelisk_core::{ItemId, ItemOracle};
use std::collections::HashMap;

/// Price and stackability for one item id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPrice {
    pub price: u64,
    pub stackable: bool,
}

/// ItemOracle implementation with static prices
#[derive(Clone, Debug, Default)]
pub struct ItemOracleImpl {
    prices: HashMap<ItemId, ItemPrice>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the price of an item
    pub fn set_price(&mut self, id: ItemId, price: u64, stackable: bool) {
        self.prices.insert(id, ItemPrice { price, stackable });
    }
}

impl ItemOracle for ItemOracleImpl {
    fn unit_price(&self, id: ItemId) -> u64 {
        self.prices.get(&id).map_or(0, |entry| entry.price)
    }

    fn is_stackable(&self, id: ItemId) -> bool {
        self.prices.get(&id).is_some_and(|entry| entry.stackable)
    }
}
