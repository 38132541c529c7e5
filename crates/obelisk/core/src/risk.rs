//! Wealth-at-risk valuation.
//!
//! Dying in the Wilderness keeps the three most valuable items and drops the
//! rest. The evaluator prices both containers the same way and reports what
//! would be lost.
//!
//! # Algorithm
//!
//! 1. Inventory slots, then equipment slots, skipping empty slots.
//! 2. Each stack is priced with the current unit price.
//! 3. A stackable stack of more than three units puts every unit beyond the
//!    third straight into the total and competes for protection with a single
//!    unit's price. Any other stack competes with its full value.
//! 4. The three highest candidates are protected; every other candidate is
//!    added to the total.

use arrayvec::ArrayVec;

use crate::config::GuardConfig;
use crate::env::{InventoryOracle, ItemOracle};
use crate::types::{ContainerKind, ItemId, ItemSlot};

/// A priced container slot. Rebuilt on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub id: ItemId,
    pub quantity: u32,
    pub unit_price: u64,
    pub stackable: bool,
}

impl ItemStack {
    pub const fn new(id: ItemId, quantity: u32, unit_price: u64, stackable: bool) -> Self {
        Self {
            id,
            quantity,
            unit_price,
            stackable,
        }
    }

    /// Prices a raw slot through the item oracle.
    pub fn resolve<I>(slot: ItemSlot, items: &I) -> Self
    where
        I: ItemOracle + ?Sized,
    {
        Self::new(
            slot.id,
            slot.quantity,
            items.unit_price(slot.id),
            items.is_stackable(slot.id),
        )
    }

    /// Splits the stack into the amount that is at risk regardless of ranking
    /// and the value it contributes as a protection candidate.
    fn valuation(&self) -> (u64, u64) {
        let limit = GuardConfig::PROTECTED_STACK_UNITS;
        if self.stackable && self.quantity > limit {
            let excess = self.unit_price.saturating_mul(u64::from(self.quantity - limit));
            (excess, self.unit_price)
        } else {
            (0, self.unit_price.saturating_mul(u64::from(self.quantity)))
        }
    }
}

/// Outcome of a valuation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Value lost on death.
    pub total: u64,
    /// Candidate values kept out of the total, highest first.
    pub protected: ArrayVec<u64, { GuardConfig::PROTECTED_SLOTS }>,
}

impl RiskAssessment {
    pub fn exceeds(&self, threshold: u64) -> bool {
        self.total > threshold
    }
}

/// Values an arbitrary sequence of priced stacks.
pub fn assess_stacks<S>(stacks: S) -> RiskAssessment
where
    S: IntoIterator<Item = ItemStack>,
{
    let mut total: u64 = 0;
    let mut candidates = Vec::new();

    for stack in stacks {
        let (direct, candidate) = stack.valuation();
        total = total.saturating_add(direct);
        candidates.push(candidate);
    }

    candidates.sort_unstable_by(|a, b| b.cmp(a));

    let mut protected = ArrayVec::new();
    for (rank, value) in candidates.into_iter().enumerate() {
        if rank < GuardConfig::PROTECTED_SLOTS {
            protected.push(value);
        } else {
            total = total.saturating_add(value);
        }
    }

    RiskAssessment { total, protected }
}

/// Prices the non-empty slots of the given containers, in order. A missing
/// container contributes nothing.
pub fn collect_stacks<I>(containers: &[Option<&[ItemSlot]>], items: &I) -> Vec<ItemStack>
where
    I: ItemOracle + ?Sized,
{
    containers
        .iter()
        .flatten()
        .flat_map(|slots| slots.iter())
        .filter(|slot| !slot.id.is_empty())
        .map(|&slot| ItemStack::resolve(slot, items))
        .collect()
}

/// Values the carried and worn containers.
pub fn assess_containers<I>(
    primary: Option<&[ItemSlot]>,
    equipped: Option<&[ItemSlot]>,
    items: &I,
) -> RiskAssessment
where
    I: ItemOracle + ?Sized,
{
    assess_stacks(collect_stacks(&[primary, equipped], items))
}

/// Values the player's current inventory and equipment.
pub fn assess_risk<K, I>(inventory: &K, items: &I) -> RiskAssessment
where
    K: InventoryOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    let [first, second] = ContainerKind::ALL;
    assess_containers(inventory.container(first), inventory.container(second), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn unique(price: u64) -> ItemStack {
        ItemStack::new(ItemId(price as i32), 1, price, false)
    }

    struct Prices(HashMap<ItemId, (u64, bool)>);

    impl ItemOracle for Prices {
        fn unit_price(&self, id: ItemId) -> u64 {
            self.0.get(&id).map_or(0, |entry| entry.0)
        }

        fn is_stackable(&self, id: ItemId) -> bool {
            self.0.get(&id).is_some_and(|entry| entry.1)
        }
    }

    fn prices() -> Prices {
        Prices(HashMap::from([
            (ItemId(995), (1, true)),
            (ItemId(11832), (20_000_000, false)),
            (ItemId(4151), (1_500_000, false)),
            (ItemId(385), (300, false)),
            (ItemId(560), (200, true)),
        ]))
    }

    #[test]
    fn fewer_than_three_stacks_is_free() {
        assert_eq!(assess_stacks(Vec::<ItemStack>::new()).total, 0);
        assert_eq!(assess_stacks([unique(5_000_000)]).total, 0);
        assert_eq!(assess_stacks([unique(5_000_000), unique(9)]).total, 0);
    }

    #[test]
    fn only_values_below_the_top_three_count() {
        let result = assess_stacks([unique(10), unique(20), unique(30), unique(40)]);
        assert_eq!(result.total, 10);
        assert_eq!(result.protected.as_slice(), &[40, 30, 20]);
    }

    #[test]
    fn bulk_stack_excess_is_always_at_risk() {
        let coins = ItemStack::new(ItemId(995), 100, 5, true);
        let result = assess_stacks([coins]);
        assert_eq!(result.total, 485);
        assert_eq!(result.protected.as_slice(), &[5]);
    }

    #[test]
    fn small_stackable_stack_is_valued_whole() {
        // Three units or fewer behave like an ordinary stack.
        let runes = ItemStack::new(ItemId(560), 3, 200, true);
        let result = assess_stacks([runes, unique(1), unique(2), unique(3)]);
        assert_eq!(result.protected.as_slice(), &[600, 3, 2]);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn non_stackable_quantity_multiplies_value() {
        let result = assess_stacks([
            ItemStack::new(ItemId(385), 10, 300, false),
            unique(10_000),
            unique(20_000),
            unique(30_000),
        ]);
        assert_eq!(result.total, 3_000);
    }

    #[test]
    fn order_does_not_matter() {
        let stacks = [
            unique(7),
            ItemStack::new(ItemId(995), 1_000, 1, true),
            unique(900),
            unique(45),
            ItemStack::new(ItemId(560), 50, 200, true),
            unique(3),
        ];
        let forward = assess_stacks(stacks);
        let mut reversed = stacks;
        reversed.reverse();
        let mut rotated = stacks;
        rotated.rotate_left(2);

        assert_eq!(forward.total, assess_stacks(reversed).total);
        assert_eq!(forward.total, assess_stacks(rotated).total);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let huge = ItemStack::new(ItemId(1), u32::MAX, u64::MAX / 2, true);
        let result = assess_stacks([huge, huge]);
        assert_eq!(result.total, u64::MAX);
    }

    #[test]
    fn containers_skip_empty_slots_and_missing_containers() {
        let inventory = [
            ItemSlot::new(ItemId(995), 250_003),
            ItemSlot::EMPTY,
            ItemSlot::new(ItemId(385), 2),
        ];
        let equipment = [ItemSlot::new(ItemId(11832), 1), ItemSlot::new(ItemId(4151), 1)];

        let both = assess_containers(Some(&inventory[..]), Some(&equipment[..]), &prices());
        // coins: 250_000 direct, candidate 1; candidates sorted:
        // [20_000_000, 1_500_000, 600, 1] -> 1 at risk.
        assert_eq!(both.total, 250_001);

        let without_equipment = assess_containers(Some(&inventory[..]), None, &prices());
        assert_eq!(without_equipment.total, 250_000);

        let nothing = assess_containers(None, None, &prices());
        assert_eq!(nothing, RiskAssessment::default());
    }

    #[test]
    fn swapping_containers_keeps_total() {
        let a = [ItemSlot::new(ItemId(4151), 1), ItemSlot::new(ItemId(385), 4)];
        let b = [ItemSlot::new(ItemId(560), 40), ItemSlot::new(ItemId(11832), 1)];
        let prices = prices();
        assert_eq!(
            assess_containers(Some(&a[..]), Some(&b[..]), &prices).total,
            assess_containers(Some(&b[..]), Some(&a[..]), &prices).total
        );
    }
}
