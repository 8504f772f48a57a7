//! Weapon rules catalog loader.

use std::path::Path;

use armament_core::{RulesCatalog, WeaponRules};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rules catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesFile {
    pub weapons: Vec<WeaponRules>,
}

/// Loader for weapon rules from RON files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load and validate a rules catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<RulesCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            weapons = catalog.len(),
            "Loaded weapon rules"
        );
        Ok(catalog)
    }

    /// Parse and validate a rules catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<RulesCatalog> {
        let file: RulesFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon rules RON: {}", e))?;

        RulesCatalog::new(file.weapons)
            .map_err(|e| anyhow::anyhow!("Invalid weapon rules: {}", e))
    }
}
