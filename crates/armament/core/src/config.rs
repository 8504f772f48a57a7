/// Simulation configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmamentConfig {
    /// Seed of the RNG sequence shared by every rearm cycle of a run.
    pub seed: u64,
    /// Upper bound on rearm ticks a driver runs before giving up.
    pub max_rearm_cycles: u32,
}

impl ArmamentConfig {
    // ===== compile-time constants =====
    /// Weapon hardpoints on the largest craft hull.
    pub const MAX_WEAPON_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0;
    pub const DEFAULT_MAX_REARM_CYCLES: u32 = 1_000;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            max_rearm_cycles: Self::DEFAULT_MAX_REARM_CYCLES,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for ArmamentConfig {
    fn default() -> Self {
        Self::new()
    }
}
