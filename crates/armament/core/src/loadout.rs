//! Craft-level rearming across weapon slots.
//!
//! A craft docked at a base rearms one weapon per simulation tick, drawing
//! clips from the base's storage. When storage runs dry the weapon stops
//! rearming and the driver reports which clip is missing so the caller can
//! notify the player.

use tracing::{debug, warn};

use crate::config::ArmamentConfig;
use crate::env::{ClipStorage, RngOracle, RulesOracle};
use crate::error::{ArmamentError, ErrorSeverity};
use crate::weapon::{CraftWeapon, RecordError, WeaponRecord};

/// Outcome of one [`Loadout::rearm`] tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RearmStep<'r> {
    /// The weapon in `slot` gained ammunition.
    Rearmed { slot: usize, clips_used: i32 },
    /// The weapon in `slot` stopped rearming because storage has no more
    /// `clip`, after debiting `clips_used` on this tick.
    OutOfClips {
        slot: usize,
        clip: &'r str,
        clips_used: i32,
    },
    /// No installed weapon needs rearming.
    Complete,
}

/// Weapon slots of one craft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Loadout<'r> {
    slots: Vec<Option<CraftWeapon<'r>>>,
}

impl<'r> Loadout<'r> {
    /// Creates a loadout with `slot_count` empty hardpoints.
    pub fn new(slot_count: usize) -> Result<Self, LoadoutError> {
        if slot_count > ArmamentConfig::MAX_WEAPON_SLOTS {
            return Err(LoadoutError::TooManySlots(slot_count));
        }
        Ok(Self {
            slots: vec![None; slot_count],
        })
    }

    /// Restores a loadout from saved slots. Empty entries stay empty.
    pub fn from_records<O>(
        oracle: &'r O,
        records: &[Option<WeaponRecord>],
    ) -> Result<Self, LoadoutError>
    where
        O: RulesOracle + ?Sized,
    {
        let mut loadout = Self::new(records.len())?;
        for (slot, record) in records.iter().enumerate() {
            if let Some(record) = record {
                let weapon = CraftWeapon::from_record(oracle, record)
                    .map_err(|source| LoadoutError::Record { slot, source })?;
                loadout.slots[slot] = Some(weapon);
            }
        }
        Ok(loadout)
    }

    pub fn to_records(&self) -> Vec<Option<WeaponRecord>> {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map(CraftWeapon::to_record))
            .collect()
    }

    /// Installs `weapon` in `slot`, returning whatever was mounted there.
    pub fn install(
        &mut self,
        slot: usize,
        weapon: CraftWeapon<'r>,
    ) -> Result<Option<CraftWeapon<'r>>, LoadoutError> {
        let len = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(LoadoutError::SlotOutOfRange { slot, len })?;
        Ok(entry.replace(weapon))
    }

    /// Removes and returns the weapon in `slot`.
    pub fn remove(&mut self, slot: usize) -> Result<Option<CraftWeapon<'r>>, LoadoutError> {
        let len = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(LoadoutError::SlotOutOfRange { slot, len })?;
        Ok(entry.take())
    }

    pub fn weapon(&self, slot: usize) -> Option<&CraftWeapon<'r>> {
        self.slots.get(slot)?.as_ref()
    }

    pub fn weapon_mut(&mut self, slot: usize) -> Option<&mut CraftWeapon<'r>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    pub fn slots(&self) -> &[Option<CraftWeapon<'r>>] {
        &self.slots
    }

    /// Whether any installed, enabled weapon is still rearming.
    pub fn needs_rearming(&self) -> bool {
        self.slots.iter().flatten().any(CraftWeapon::is_rearming)
    }

    /// Runs one rearm tick: services the first weapon that is rearming.
    pub fn rearm<S, R>(&mut self, storage: &mut S, rng: &mut R) -> RearmStep<'r>
    where
        S: ClipStorage + ?Sized,
        R: RngOracle + ?Sized,
    {
        let Some((slot, weapon)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find_map(|(slot, entry)| {
                entry
                    .as_mut()
                    .filter(|weapon| weapon.is_rearming())
                    .map(|weapon| (slot, weapon))
            })
        else {
            return RearmStep::Complete;
        };

        let rules = weapon.rules();
        let Some(clip) = rules.clip_item.as_ref() else {
            weapon.rearm(0, 0, rng);
            return RearmStep::Rearmed {
                slot,
                clips_used: 0,
            };
        };

        let available = storage.available(&clip.id);
        if available <= 0 {
            warn!(slot, weapon = %rules.id, clip = %clip.id, "No clips in storage");
            weapon.set_rearming(false);
            return RearmStep::OutOfClips {
                slot,
                clip: &clip.id,
                clips_used: 0,
            };
        }

        let clips_used = weapon.rearm(available, rules.rearm_clip_size(), rng);
        storage.remove(&clip.id, clips_used);
        debug!(slot, weapon = %rules.id, clips_used, available, "Rearmed weapon");

        if clips_used == available && weapon.is_rearming() {
            warn!(slot, weapon = %rules.id, clip = %clip.id, "Storage ran out of clips");
            weapon.set_rearming(false);
            return RearmStep::OutOfClips {
                slot,
                clip: &clip.id,
                clips_used,
            };
        }

        RearmStep::Rearmed { slot, clips_used }
    }
}

/// Errors raised by loadout slot management.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    #[error("a craft has at most {max} weapon slots, got {0}", max = ArmamentConfig::MAX_WEAPON_SLOTS)]
    TooManySlots(usize),

    #[error("slot {slot} is out of range (loadout has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("slot {slot}: {source}")]
    Record { slot: usize, source: RecordError },
}

impl ArmamentError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TooManySlots(_) | Self::SlotOutOfRange { .. } => ErrorSeverity::Validation,
            Self::Record { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManySlots(_) => "LOADOUT_TOO_MANY_SLOTS",
            Self::SlotOutOfRange { .. } => "LOADOUT_SLOT_OUT_OF_RANGE",
            Self::Record { source, .. } => source.error_code(),
        }
    }
}
