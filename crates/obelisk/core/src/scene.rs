//! Loaded scene tiles and object lookup.
//!
//! The host keeps a fixed 104×104 window of tiles per plane around the player.
//! Finding the obelisk is a plain linear scan of the current plane: the window
//! is small and the scan runs once per relevant menu entry, not per frame.

use crate::env::WorldOracle;
use crate::error::{ErrorSeverity, GuardError};
use crate::region;
use crate::types::{LocalPoint, ObjectId};

/// Object placed on a scene tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedObject {
    pub id: ObjectId,
    pub location: LocalPoint,
}

impl PlacedObject {
    pub const fn new(id: ObjectId, location: LocalPoint) -> Self {
        Self { id, location }
    }
}

/// A single scene tile. Object slots may be empty, mirroring the host's
/// fixed-size per-tile object arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    objects: Vec<Option<PlacedObject>>,
}

impl Tile {
    pub fn new(objects: Vec<Option<PlacedObject>>) -> Self {
        Self { objects }
    }

    pub fn objects(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().flatten()
    }

    pub fn push(&mut self, object: PlacedObject) {
        self.objects.push(Some(object));
    }
}

/// Errors raised while populating a [`TileGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("plane {0} is outside the scene")]
    PlaneOutOfBounds(u8),

    #[error("tile {0} is outside the 104x104 scene")]
    TileOutOfBounds(LocalPoint),
}

impl GuardError for SceneError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SceneError::PlaneOutOfBounds(_) => "SCENE_PLANE_OUT_OF_BOUNDS",
            SceneError::TileOutOfBounds(_) => "SCENE_TILE_OUT_OF_BOUNDS",
        }
    }
}

/// Fixed plane × x × y array of optional tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Tiles per side of the loaded scene.
    pub const SIZE: usize = 104;
    pub const PLANES: usize = 4;

    /// Creates a grid with no tiles at all.
    pub fn new() -> Self {
        Self {
            tiles: vec![None; Self::PLANES * Self::SIZE * Self::SIZE],
        }
    }

    /// All tile slots of a plane, ordered by ascending x then ascending y.
    pub fn plane(&self, plane: u8) -> Option<&[Option<Tile>]> {
        let plane = plane as usize;
        if plane >= Self::PLANES {
            return None;
        }
        let len = Self::SIZE * Self::SIZE;
        Some(&self.tiles[plane * len..(plane + 1) * len])
    }

    pub fn tile(&self, plane: u8, location: LocalPoint) -> Option<&Tile> {
        let index = Self::index(plane, location).ok()?;
        self.tiles[index].as_ref()
    }

    /// Places an object on the tile at its own location, creating the tile if
    /// it does not exist yet.
    pub fn place(&mut self, plane: u8, object: PlacedObject) -> Result<(), SceneError> {
        let index = Self::index(plane, object.location)?;
        self.tiles[index].get_or_insert_with(Tile::default).push(object);
        Ok(())
    }

    /// Installs a tile with no objects (present but empty).
    pub fn insert_empty(&mut self, plane: u8, location: LocalPoint) -> Result<(), SceneError> {
        let index = Self::index(plane, location)?;
        self.tiles[index] = Some(Tile::default());
        Ok(())
    }

    fn index(plane: u8, location: LocalPoint) -> Result<usize, SceneError> {
        if plane as usize >= Self::PLANES {
            return Err(SceneError::PlaneOutOfBounds(plane));
        }
        let size = Self::SIZE as i32;
        if !(0..size).contains(&location.x) || !(0..size).contains(&location.y) {
            return Err(SceneError::TileOutOfBounds(location));
        }
        let (x, y) = (location.x as usize, location.y as usize);
        Ok((plane as usize * Self::SIZE + x) * Self::SIZE + y)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the first object with `target` id on `plane`.
///
/// Scan order is ascending x, then ascending y, then slot order within the
/// tile. Missing tiles, empty slots and unknown planes are skipped silently.
pub fn find_object(grid: &TileGrid, plane: u8, target: ObjectId) -> Option<PlacedObject> {
    grid.plane(plane)?
        .iter()
        .flatten()
        .flat_map(|tile| tile.objects())
        .find(|object| object.id == target)
        .copied()
}

/// Looks up `target` on the player's current plane, but only inside a house.
pub fn locate<W>(world: &W, target: ObjectId) -> Option<PlacedObject>
where
    W: WorldOracle + ?Sized,
{
    if !region::is_in_house(world) {
        return None;
    }
    find_object(world.tile_grid(), world.current_plane(), target)
}
