//! Deterministic ammunition rules for craft-mounted weapons.
//!
//! `armament-core` models how a weapon slot holds ammunition, rearms in
//! clip-sized increments each simulation tick, reports readiness and
//! describes the shots it fires. Static rules, randomness and base storage are
//! injected through the traits in [`env`], so a run replays exactly from its
//! seed.
pub mod config;
pub mod env;
pub mod error;
pub mod loadout;
pub mod weapon;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ArmamentConfig;
pub use env::{
    ClipStorage, ItemRules, PcgRng, ProjectileKind, RngOracle, RulesCatalog, RulesError,
    RulesOracle, StorageItems, WeaponRules,
};
pub use error::{ArmamentError, ErrorSeverity};
pub use loadout::{Loadout, LoadoutError, RearmStep};
pub use weapon::{CraftWeapon, RecordError, ShotDescriptor, WeaponRecord, WeaponStatus};
