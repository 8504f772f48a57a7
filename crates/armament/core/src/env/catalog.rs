use super::rules::{RulesError, WeaponRules};

/// Read-only lookup of weapon rules by type id.
///
/// Persisted weapon records only carry a type id; loading them goes through
/// this oracle to recover the rules the weapon borrows.
pub trait RulesOracle {
    fn weapon(&self, id: &str) -> Option<&WeaponRules>;
}

/// In-memory catalog of validated weapon rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesCatalog {
    weapons: Vec<WeaponRules>,
}

impl RulesCatalog {
    /// Builds a catalog, validating every entry and rejecting duplicate ids.
    pub fn new(weapons: Vec<WeaponRules>) -> Result<Self, RulesError> {
        for (index, rules) in weapons.iter().enumerate() {
            rules.validate()?;
            if weapons[..index].iter().any(|other| other.id == rules.id) {
                return Err(RulesError::DuplicateWeapon(rules.id.clone()));
            }
        }
        Ok(Self { weapons })
    }

    pub fn weapons(&self) -> &[WeaponRules] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl RulesOracle for RulesCatalog {
    fn weapon(&self, id: &str) -> Option<&WeaponRules> {
        self.weapons.iter().find(|rules| rules.id == id)
    }
}
