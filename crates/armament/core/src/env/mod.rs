//! External collaborators of the armament rules.
//!
//! Everything here is owned outside a weapon slot: static rules and their
//! catalog, the random-number source, and the base storage clips come from.
mod catalog;
mod rng;
mod rules;
mod storage;

pub use catalog::{RulesCatalog, RulesOracle};
pub use rng::{PcgRng, RngOracle};
pub use rules::{ItemRules, ProjectileKind, RulesError, WeaponRules};
pub use storage::{ClipStorage, StorageItems};
