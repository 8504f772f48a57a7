//! Persisted form of a craft weapon.
//!
//! Only `type` and `ammo` are always written; the flags are omitted while
//! false and load back as false when absent.

use super::state::CraftWeapon;
use crate::env::RulesOracle;
use crate::error::{ArmamentError, ErrorSeverity};

/// Saved state of one weapon slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRecord {
    /// Weapon rules id the state belongs to.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub weapon_type: String,
    pub ammo: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "is_false")
    )]
    pub rearming: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "is_false")
    )]
    pub disabled: bool,
}

#[cfg(feature = "serde")]
fn is_false(value: &bool) -> bool {
    !*value
}

impl WeaponRecord {
    pub fn new(weapon_type: impl Into<String>, ammo: i32) -> Self {
        Self {
            weapon_type: weapon_type.into(),
            ammo,
            rearming: false,
            disabled: false,
        }
    }
}

/// Errors raised while restoring a weapon from its record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("saved weapon type '{0}' has no rules")]
    UnknownWeaponType(String),
}

impl ArmamentError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        // The slot can be left empty and the rest of the save still loads.
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownWeaponType(_) => "RECORD_UNKNOWN_WEAPON_TYPE",
        }
    }
}

impl<'r> CraftWeapon<'r> {
    /// Restores a weapon, resolving its rules through `oracle`.
    ///
    /// Saved ammo goes through [`CraftWeapon::set_ammo`], so out-of-range
    /// values from older saves are clamped.
    pub fn from_record<O>(oracle: &'r O, record: &WeaponRecord) -> Result<Self, RecordError>
    where
        O: RulesOracle + ?Sized,
    {
        let rules = oracle
            .weapon(&record.weapon_type)
            .ok_or_else(|| RecordError::UnknownWeaponType(record.weapon_type.clone()))?;

        let mut weapon = CraftWeapon::new(rules, record.ammo);
        weapon.set_rearming(record.rearming);
        weapon.set_disabled(record.disabled);
        Ok(weapon)
    }

    /// Snapshot for saving. Stores the raw rearming flag, not the masked one.
    pub fn to_record(&self) -> WeaponRecord {
        WeaponRecord {
            weapon_type: self.rules().id.clone(),
            ammo: self.ammo(),
            rearming: self.stored_rearming(),
            disabled: self.is_disabled(),
        }
    }
}
