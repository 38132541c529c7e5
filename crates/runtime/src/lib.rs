//! Host-side runtime for the obelisk guard.
//!
//! `obelisk-core` decides; this crate gives it something to decide about.
//!
//! - [`oracle`] holds concrete snapshots behind the core oracle traits
//! - [`session`] wraps the controller for a plugin's lifetime
//! - [`shared`] publishes state to render threads
//! - [`overlay`] decides when the ground label is drawn
//! - [`replay`] drives a recorded scenario end to end
pub mod error;
pub mod oracle;
pub mod overlay;
pub mod replay;
pub mod session;
pub mod shared;

pub use error::{Result, RuntimeError};
pub use oracle::{
    InventoryOracleImpl, ItemOracleImpl, ItemPrice, MenuList, OracleManager, WorldOracleImpl,
};
pub use overlay::{GroundMarker, MarkerLabel};
pub use replay::{ReplayReport, ReplayStep, replay};
pub use session::ObeliskGuard;
pub use shared::SharedProtection;
