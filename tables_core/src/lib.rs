mod addon;
mod config;
mod index;
mod registry;
mod table;
mod tier;

pub use addon::{AddonItem, AddonTable, DEFAULT_ADDON_GROUP};
pub use index::{EntryKind, IndexEntry, HIDDEN_CONTAINERS};
pub use registry::{ContainerLoad, ContainerRegistry};
pub use table::{ContainerTable, CountRange, LevelSegment, TierItem, TierPool};
pub use tier::{PerTier, Tier};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading a published JSON file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: serde_json::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path:?}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error converting a parsed table into its validated form
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Level segment {0} has no level bounds")]
    MissingLevelBounds(usize),
    #[error("Invalid weight {weight} for '{id}'")]
    InvalidWeight { id: String, weight: f64 },
    #[error("Invalid roll chance {chance} for '{id}'")]
    InvalidChance { id: String, chance: f64 },
}
