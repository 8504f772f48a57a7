//! Data-driven armament content and save files.
//!
//! This crate provides loaders for the files a rearm simulation runs from:
//! - Weapon rules catalogs (RON)
//! - Simulation configuration (TOML)
//! - Craft loadout saves (RON, read and write)
//!
//! All loaders use armament-core types directly with serde.

pub mod loaders;

pub use loaders::{ConfigLoader, LoadResult, LoadoutSave, RulesFile, RulesLoader, SaveLoader};
