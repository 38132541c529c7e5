//! Data-driven guard content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Guard configuration (data-driven via TOML)
//! - Host scenarios for replay and testing (data-driven via RON)
//!
//! All loaders use obelisk-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ScenarioItem, LoadResult, ScenarioObject, Scenario, ScenarioLoader,
};
