//! Content loaders for reading armament data from files.

pub mod config;
pub mod rules;
pub mod save;

pub use config::ConfigLoader;
pub use rules::{RulesFile, RulesLoader};
pub use save::{LoadoutSave, SaveLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
