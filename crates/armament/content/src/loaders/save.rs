//! Craft loadout save files.
//!
//! A save holds the craft's weapon slots, the base storage its clips come
//! from and, optionally, the RNG position so an interrupted run resumes on
//! the same draw sequence.

use std::path::Path;

use armament_core::{Loadout, LoadoutError, PcgRng, RulesOracle, StorageItems, WeaponRecord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Persisted state of one docked craft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSave {
    pub weapons: Vec<Option<WeaponRecord>>,
    #[serde(default)]
    pub storage: StorageItems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng: Option<PcgRng>,
}

impl LoadoutSave {
    /// Snapshots a running loadout.
    pub fn capture(loadout: &Loadout<'_>, storage: &StorageItems, rng: Option<PcgRng>) -> Self {
        Self {
            weapons: loadout.to_records(),
            storage: storage.clone(),
            rng,
        }
    }

    /// Rebuilds the weapon slots against a rules catalog.
    pub fn restore<'r, O>(&self, oracle: &'r O) -> Result<Loadout<'r>, LoadoutError>
    where
        O: RulesOracle + ?Sized,
    {
        Loadout::from_records(oracle, &self.weapons)
    }
}

/// Reads and writes loadout saves as RON.
pub struct SaveLoader;

impl SaveLoader {
    pub fn load(path: &Path) -> LoadResult<LoadoutSave> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LoadoutSave> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse save RON: {}", e))
    }

    pub fn to_string(save: &LoadoutSave) -> LoadResult<String> {
        ron::ser::to_string_pretty(save, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize save: {}", e))
    }

    pub fn save(path: &Path, save: &LoadoutSave) -> LoadResult<()> {
        let content = Self::to_string(save)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), slots = save.weapons.len(), "Wrote loadout save");
        Ok(())
    }
}
