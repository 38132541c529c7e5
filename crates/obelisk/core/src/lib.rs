//! Decision pipeline that keeps a player from teleporting into the Wilderness
//! with too much at stake.
//!
//! `obelisk-core` classifies the player's region, locates the house obelisk,
//! values what would be lost on death and decides whether a menu entry may
//! stay. Hosts feed it snapshots through the oracle traits in [`env`]; all
//! mutable state lives in [`controller::ProtectionController`].
pub mod action;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod region;
pub mod risk;
pub mod scene;
pub mod state;
pub mod types;

pub use action::CandidateAction;
pub use config::{ConfigError, GuardConfig, MarkerColor, TargetMissPolicy};
pub use controller::{Decision, InactiveReason, ProtectionController};
pub use env::{
    ConfigOracle, Env, GuardEnv, InventoryOracle, ItemOracle, MenuEntries, WorldOracle,
};
pub use error::{ErrorSeverity, GuardError};
pub use region::{RegionSet, is_in_house};
pub use risk::{ItemStack, RiskAssessment, assess_containers, assess_risk, assess_stacks};
pub use scene::{PlacedObject, SceneError, Tile, TileGrid, find_object};
pub use state::ProtectionState;
pub use types::{
    ClientState, ContainerKind, ItemId, ItemSlot, LocalPoint, ObjectId, RegionId, WorldPoint,
};
