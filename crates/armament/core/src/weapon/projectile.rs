use crate::env::{ItemRules, ProjectileKind};

/// Parameters of one outgoing projectile, handed to the ballistics layer.
///
/// Independent of ammo bookkeeping: building a shot never touches the
/// weapon's ammunition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotDescriptor<'r> {
    pub projectile_type: ProjectileKind,
    pub speed: i32,
    pub accuracy: i32,
    pub damage: i32,
    pub range: i32,
    pub shield_damage_modifier: i32,
    /// Item whose damage profile overrides the weapon's own under the unified
    /// damage formula.
    pub damage_source: Option<&'r ItemRules>,
}
