//! Scene snapshot served through [`obelisk_core::WorldOracle`].
use obelisk_core::{
    ClientState, LocalPoint, PlacedObject, RegionId, SceneError, TileGrid, WorldOracle, WorldPoint,
};

/// WorldOracle implementation holding one frozen view of the player's scene.
///
/// Instances are mapped back to their template by a single origin: the world
/// tile that scene tile (0, 0) was copied from.
#[derive(Clone, Debug)]
pub struct WorldOracleImpl {
    client_state: ClientState,
    instanced: bool,
    player: Option<LocalPoint>,
    plane: u8,
    instance_origin: Option<WorldPoint>,
    grid: TileGrid,
}

impl WorldOracleImpl {
    pub fn new(client_state: ClientState, player: Option<LocalPoint>, plane: u8) -> Self {
        Self {
            client_state,
            instanced: false,
            player,
            plane,
            instance_origin: None,
            grid: TileGrid::new(),
        }
    }

    /// Marks the scene as an instance copied from `origin`. `None` keeps the
    /// scene instanced but unresolvable.
    pub fn with_instance(mut self, origin: Option<WorldPoint>) -> Self {
        self.instanced = true;
        self.instance_origin = origin;
        self
    }

    pub fn place(&mut self, plane: u8, object: PlacedObject) -> Result<(), SceneError> {
        self.grid.place(plane, object)
    }

    pub fn set_client_state(&mut self, client_state: ClientState) {
        self.client_state = client_state;
    }

    pub fn set_player(&mut self, player: Option<LocalPoint>) {
        self.player = player;
    }
}

impl WorldOracle for WorldOracleImpl {
    fn client_state(&self) -> ClientState {
        self.client_state
    }

    fn is_in_instanced_region(&self) -> bool {
        self.instanced
    }

    fn player_location(&self) -> Option<LocalPoint> {
        self.player
    }

    fn instance_region(&self, location: LocalPoint) -> Option<RegionId> {
        self.instance_origin
            .map(|origin| origin.offset(location).region_id())
    }

    fn current_plane(&self) -> u8 {
        self.plane
    }

    fn tile_grid(&self) -> &TileGrid {
        &self.grid
    }
}
