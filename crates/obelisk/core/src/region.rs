//! House region classification.
//!
//! Player-owned houses are built in instanced copies of a handful of template
//! regions. The classifier resolves the player's instanced tile back to its
//! template region and checks it against that fixed set.

use crate::env::WorldOracle;
use crate::types::RegionId;

/// Fixed set of region ids that qualify as the inside of a house.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionSet(&'static [RegionId]);

impl RegionSet {
    /// Template regions used by player-owned house instances.
    pub const HOUSE: Self = Self(&[
        RegionId(7257),
        RegionId(7513),
        RegionId(7514),
        RegionId(7769),
        RegionId(7770),
        RegionId(8025),
        RegionId(8026),
    ]);

    pub const fn ids(&self) -> &'static [RegionId] {
        self.0
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.0.contains(&region)
    }
}

/// Returns true when the player is inside a house instance.
///
/// Fails closed: a non-instanced area, a missing player, or an instance tile
/// that cannot be mapped back to a template region all yield `false`.
pub fn is_in_house<W>(world: &W) -> bool
where
    W: WorldOracle + ?Sized,
{
    resolve_house_region(world).is_some()
}

/// Resolves the player's template region, keeping it only if it belongs to
/// [`RegionSet::HOUSE`].
pub fn resolve_house_region<W>(world: &W) -> Option<RegionId>
where
    W: WorldOracle + ?Sized,
{
    if !world.is_in_instanced_region() {
        tracing::debug!("region check: not in instanced region");
        return None;
    }

    let location = world.player_location()?;
    let Some(region) = world.instance_region(location) else {
        tracing::debug!("region check: no template region for {}", location);
        return None;
    };

    let qualifies = RegionSet::HOUSE.contains(region);
    tracing::debug!(
        "region check: instance region {} (house: {})",
        region,
        qualifies
    );
    qualifies.then_some(region)
}
