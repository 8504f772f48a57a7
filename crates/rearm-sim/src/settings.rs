//! Layered run configuration: defaults, TOML file, environment, flags.
use std::env;
use std::path::Path;

use anyhow::Result;
use armament_content::ConfigLoader;
use armament_core::ArmamentConfig;

/// Resolves the simulation configuration.
///
/// Environment variables:
/// - `REARM_SIM_SEED` - RNG seed for runs without a saved RNG state
/// - `REARM_SIM_MAX_CYCLES` - Upper bound on rearm ticks (min 1)
pub fn resolve(
    file: Option<&Path>,
    seed: Option<u64>,
    max_cycles: Option<u32>,
) -> Result<ArmamentConfig> {
    resolve_with(file, |key| env::var(key).ok(), seed, max_cycles)
}

fn resolve_with<F>(
    file: Option<&Path>,
    lookup: F,
    seed: Option<u64>,
    max_cycles: Option<u32>,
) -> Result<ArmamentConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match file {
        Some(path) => ConfigLoader::load(path)?,
        None => ArmamentConfig::default(),
    };

    if let Some(seed) = read_env::<u64, _>(&lookup, "REARM_SIM_SEED") {
        config.seed = seed;
    }
    if let Some(cycles) = read_env::<u32, _>(&lookup, "REARM_SIM_MAX_CYCLES") {
        config.max_rearm_cycles = cycles.max(1);
    }

    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(cycles) = max_cycles {
        config.max_rearm_cycles = cycles.max(1);
    }

    Ok(config)
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.parse().ok()
}
