//! Identifiers and coordinates shared by every component.
use std::fmt;

/// Item identifier as reported by the host's containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub i32);

impl ItemId {
    /// Sentinel the host uses for an empty container slot.
    pub const EMPTY: Self = Self(-1);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Scene object identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Map region code. A region covers a 64×64 tile square of the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tile coordinate inside the currently loaded scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Absolute world tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: u8,
}

impl WorldPoint {
    pub const fn new(x: i32, y: i32, plane: u8) -> Self {
        Self { x, y, plane }
    }

    /// Region containing this tile: the 64-tile column in the high byte and the
    /// 64-tile row in the low byte.
    pub const fn region_id(self) -> RegionId {
        RegionId((((self.x >> 6) << 8) | (self.y >> 6)) as u32)
    }

    /// Offsets this point by a scene-local tile delta, keeping the plane.
    pub const fn offset(self, local: LocalPoint) -> Self {
        Self {
            x: self.x + local.x,
            y: self.y + local.y,
            plane: self.plane,
        }
    }
}

/// Raw container slot as handed over by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub id: ItemId,
    pub quantity: u32,
}

impl ItemSlot {
    pub const EMPTY: Self = Self {
        id: ItemId::EMPTY,
        quantity: 0,
    };

    pub const fn new(id: ItemId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}

/// Which of the player's containers to read.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContainerKind {
    /// Carried inventory.
    Inventory,
    /// Worn equipment.
    Equipment,
}

impl ContainerKind {
    /// Containers in the order their stacks are flattened for valuation.
    pub const ALL: [Self; 2] = [Self::Inventory, Self::Equipment];
}

/// Connection state of the host client.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClientState {
    #[default]
    LoginScreen,
    Loading,
    LoggedIn,
    Hopping,
}
