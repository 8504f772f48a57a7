//! Rearm simulation binary.
//!
//! Loads a weapon rules catalog and a docked craft's save, runs rearm ticks
//! until every weapon is full, storage runs dry or the cycle budget is spent,
//! then writes the updated save.
//!
//! # Examples
//!
//! ```bash
//! rearm-sim --rules data/weapons.ron --save saves/craft.ron --seed 42
//! RUST_LOG=armament_core=trace rearm-sim --rules data/weapons.ron --save saves/craft.ron
//! ```

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use armament_content::{LoadoutSave, RulesLoader, SaveLoader};
use armament_core::{Loadout, PcgRng, RearmStep, StorageItems};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "rearm-sim", about = "Rearm a docked craft tick by tick")]
struct Args {
    /// Weapon rules catalog (RON)
    #[arg(long)]
    rules: PathBuf,

    /// Craft loadout save (RON)
    #[arg(long)]
    save: PathBuf,

    /// Simulation config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; restarts the draw sequence even if the save carries one
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of rearm ticks
    #[arg(long)]
    max_cycles: Option<u32>,

    /// Output path (defaults to overwriting --save)
    #[arg(long)]
    out: Option<PathBuf>,
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Complete,
    OutOfClips { slot: usize, clip: String },
    CycleLimit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Summary {
    ticks: u32,
    clips_used: i32,
    outcome: Outcome,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = settings::resolve(args.config.as_deref(), args.seed, args.max_cycles)?;

    let catalog = RulesLoader::load(&args.rules)
        .with_context(|| format!("loading rules from {}", args.rules.display()))?;
    let save = SaveLoader::load(&args.save)
        .with_context(|| format!("loading save from {}", args.save.display()))?;

    let mut loadout = save.restore(&catalog)?;
    let mut storage = save.storage.clone();
    let mut rng = match (args.seed, save.rng) {
        (None, Some(saved)) => saved,
        _ => PcgRng::new(config.seed),
    };

    tracing::info!(
        slots = loadout.slots().len(),
        seed = config.seed,
        max_cycles = config.max_rearm_cycles,
        "Starting rearm"
    );

    let summary = simulate(&mut loadout, &mut storage, &mut rng, config.max_rearm_cycles);
    match &summary.outcome {
        Outcome::Complete => tracing::info!(ticks = summary.ticks, "All weapons rearmed"),
        Outcome::OutOfClips { slot, clip } => {
            tracing::warn!(slot, clip = %clip, ticks = summary.ticks, "Not enough clips to rearm")
        }
        Outcome::CycleLimit => tracing::warn!(ticks = summary.ticks, "Cycle limit reached"),
    }
    tracing::info!(clips_used = summary.clips_used, "Storage debited");

    for (slot, weapon) in loadout.slots().iter().enumerate() {
        let Some(weapon) = weapon else { continue };
        tracing::info!(
            slot,
            weapon = %weapon.rules().id,
            projectile = %weapon.rules().projectile_type,
            ammo = weapon.ammo(),
            clips_loaded = weapon.clips_loaded(),
            status = ?weapon.status(),
            "Weapon state"
        );
    }

    let out = args.out.unwrap_or(args.save);
    SaveLoader::save(&out, &LoadoutSave::capture(&loadout, &storage, Some(rng)))
        .with_context(|| format!("writing save to {}", out.display()))?;

    Ok(())
}

/// Runs rearm ticks until completion, a clip shortage or `max_cycles`.
fn simulate(
    loadout: &mut Loadout<'_>,
    storage: &mut StorageItems,
    rng: &mut PcgRng,
    max_cycles: u32,
) -> Summary {
    let mut clips_used = 0;
    for tick in 0..max_cycles {
        match loadout.rearm(storage, rng) {
            RearmStep::Rearmed {
                slot,
                clips_used: used,
            } => {
                tracing::debug!(tick, slot, clips_used = used, "Tick");
                clips_used += used;
            }
            RearmStep::OutOfClips {
                slot,
                clip,
                clips_used: used,
            } => {
                return Summary {
                    ticks: tick + 1,
                    clips_used: clips_used + used,
                    outcome: Outcome::OutOfClips {
                        slot,
                        clip: clip.to_owned(),
                    },
                };
            }
            RearmStep::Complete => {
                return Summary {
                    ticks: tick,
                    clips_used,
                    outcome: Outcome::Complete,
                };
            }
        }
    }

    Summary {
        ticks: max_cycles,
        clips_used,
        outcome: Outcome::CycleLimit,
    }
}
