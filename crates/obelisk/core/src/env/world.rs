use crate::scene::TileGrid;
use crate::types::{ClientState, LocalPoint, RegionId};

/// Live view of the player's surroundings.
///
/// Implementations hand out a snapshot that stays valid for one evaluation;
/// the core never keeps anything it reads here.
pub trait WorldOracle: Send + Sync {
    fn client_state(&self) -> ClientState;

    /// True when the player stands in an instanced (private) map area.
    fn is_in_instanced_region(&self) -> bool;

    /// Player position in scene coordinates, if a player is loaded.
    fn player_location(&self) -> Option<LocalPoint>;

    /// Resolves a scene tile of the current instance back to the template
    /// region it was copied from. `None` when no mapping exists.
    fn instance_region(&self, location: LocalPoint) -> Option<RegionId>;

    fn current_plane(&self) -> u8;

    fn tile_grid(&self) -> &TileGrid;
}
