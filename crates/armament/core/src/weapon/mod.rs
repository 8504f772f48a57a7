//! Craft weapon slot: ammunition, rearming and outgoing shots.
mod projectile;
mod record;
mod state;

pub use projectile::ShotDescriptor;
pub use record::{RecordError, WeaponRecord};
pub use state::{CraftWeapon, WeaponStatus};
