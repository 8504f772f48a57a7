//! Static weapon and item rules.
//!
//! Rules are read-only to this crate: a [`crate::CraftWeapon`] borrows its
//! [`WeaponRules`] from whoever owns the catalog and never mutates them.

use core::fmt;

/// Projectile families a craft weapon can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectileKind {
    StingrayMissile,
    AvalancheMissile,
    #[default]
    CannonRound,
    FusionBall,
    LaserBeam,
    PlasmaBeam,
}

impl fmt::Display for ProjectileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StingrayMissile => "Stingray Missile",
            Self::AvalancheMissile => "Avalanche Missile",
            Self::CannonRound => "Cannon Round",
            Self::FusionBall => "Fusion Ball",
            Self::LaserBeam => "Laser Beam",
            Self::PlasmaBeam => "Plasma Beam",
        };
        write!(f, "{}", s)
    }
}

/// Item rules referenced by a weapon (its clip or its launcher).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRules {
    pub id: String,
    /// Rounds per clip. `0` means the item is not a clip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clip_size: i32,
}

impl ItemRules {
    pub fn new(id: impl Into<String>, clip_size: i32) -> Self {
        Self {
            id: id.into(),
            clip_size,
        }
    }
}

/// Static configuration of a craft weapon type.
///
/// # Clip granularity
///
/// A weapon is clip based when it names a `clip_item` with a positive clip
/// size; that size is what the craft-level driver feeds to
/// [`crate::CraftWeapon::rearm`]. Weapons without a clip item restore
/// `rearm_rate` rounds per cycle for free.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponRules {
    pub id: String,
    pub ammo_max: i32,
    /// Rounds restored per rearm cycle.
    pub rearm_rate: i32,
    pub projectile_type: ProjectileKind,
    pub projectile_speed: i32,
    pub accuracy: i32,
    pub damage: i32,
    pub range: i32,
    pub shield_damage_modifier: i32,
    pub statistical_bullet_saving: bool,
    pub unified_damage_formula: bool,
    pub clip_item: Option<ItemRules>,
    pub launcher_item: Option<ItemRules>,
}

impl WeaponRules {
    /// Clip size to rearm with, or `0` when the weapon is not clip based.
    pub fn rearm_clip_size(&self) -> i32 {
        self.clip_item
            .as_ref()
            .map_or(0, |clip| clip.clip_size.max(0))
    }

    /// Checks the numeric invariants every consumer of the rules relies on.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.id.is_empty() {
            return Err(RulesError::EmptyId);
        }

        let fields = [
            ("ammo_max", self.ammo_max),
            ("rearm_rate", self.rearm_rate),
            ("projectile_speed", self.projectile_speed),
            ("range", self.range),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(RulesError::NegativeValue {
                    weapon: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        for item in self.clip_item.iter().chain(self.launcher_item.iter()) {
            if item.clip_size < 0 {
                return Err(RulesError::NegativeValue {
                    weapon: self.id.clone(),
                    field: "clip_size",
                    value: item.clip_size,
                });
            }
        }

        Ok(())
    }
}

/// Errors raised while validating or indexing weapon rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("weapon rules must have a non-empty id")]
    EmptyId,

    #[error("weapon '{weapon}' has negative {field} ({value})")]
    NegativeValue {
        weapon: String,
        field: &'static str,
        value: i32,
    },

    #[error("weapon '{0}' is defined more than once")]
    DuplicateWeapon(String),
}

impl crate::error::ArmamentError for RulesError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "RULES_EMPTY_ID",
            Self::NegativeValue { .. } => "RULES_NEGATIVE_VALUE",
            Self::DuplicateWeapon(_) => "RULES_DUPLICATE_WEAPON",
        }
    }
}
