use crate::addon::AddonTable;
use crate::config::{AddonFileConfig, TableFileConfig};
use crate::index::{EntryKind, IndexEntry};
use crate::table::ContainerTable;
use crate::LoadError;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of loading one container listed in the index
#[derive(Debug, Clone)]
pub enum ContainerLoad {
    Loaded {
        entry: IndexEntry,
        table: ContainerTable,
        addons: Vec<AddonTable>,
    },
    Failed {
        entry: IndexEntry,
        reason: String,
    },
}

impl ContainerLoad {
    pub fn entry(&self) -> &IndexEntry {
        match self {
            ContainerLoad::Loaded { entry, .. } | ContainerLoad::Failed { entry, .. } => entry,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ContainerLoad::Loaded { .. })
    }
}

/// Every visible container from a published index, in index order
#[derive(Debug)]
pub struct ContainerRegistry {
    loads: Vec<ContainerLoad>,
}

impl ContainerRegistry {
    pub const INDEX_FILE: &'static str = "index.json";

    /// Load `index.json` from `dir` and every container and addon it lists.
    ///
    /// Only a missing or malformed index is an error. Containers that fail
    /// to load are kept as [`ContainerLoad::Failed`]; addons that fail are
    /// dropped with a warning.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let index: Vec<IndexEntry> = read_json(&dir.join(Self::INDEX_FILE))?;
        debug!(entries = index.len(), dir = ?dir, "loaded loot table index");
        Ok(Self::from_index(dir, &index))
    }

    /// Resolve an already parsed index against files in `dir`
    pub fn from_index(dir: &Path, index: &[IndexEntry]) -> Self {
        let mut addons_by_parent: HashMap<&str, Vec<AddonTable>> = HashMap::new();

        for entry in index.iter().filter(|e| e.kind == EntryKind::Addon) {
            let Some(parent) = entry.parent_id.as_deref() else {
                warn!(addon = %entry.id, "addon has no parent container, skipping");
                continue;
            };
            match load_addon(dir, entry) {
                Ok(addon) => addons_by_parent.entry(parent).or_default().push(addon),
                Err(e) => warn!(addon = %entry.id, error = %e, "failed to load addon"),
            }
        }

        let mut loaded_ids: HashSet<&str> = HashSet::new();
        let loads: Vec<ContainerLoad> = index
            .iter()
            .filter(|e| e.is_visible_container())
            .map(|entry| match load_table(dir, entry) {
                Ok(table) => {
                    loaded_ids.insert(entry.id.as_str());
                    ContainerLoad::Loaded {
                        entry: entry.clone(),
                        table,
                        addons: addons_by_parent
                            .get(entry.id.as_str())
                            .cloned()
                            .unwrap_or_default(),
                    }
                }
                Err(e) => {
                    warn!(container = %entry.id, error = %e, "failed to load container");
                    ContainerLoad::Failed {
                        entry: entry.clone(),
                        reason: e.to_string(),
                    }
                }
            })
            .collect();

        for parent in addons_by_parent.keys().filter(|p| !loaded_ids.contains(*p)) {
            warn!(parent = %parent, "addons reference a container that is not loaded");
        }

        ContainerRegistry { loads }
    }

    /// All results in index order
    pub fn loads(&self) -> &[ContainerLoad] {
        &self.loads
    }

    /// Get a loaded table by container id
    pub fn get(&self, id: &str) -> Option<&ContainerTable> {
        self.loads.iter().find_map(|load| match load {
            ContainerLoad::Loaded { entry, table, .. } if entry.id == id => Some(table),
            _ => None,
        })
    }

    /// Check if a container loaded successfully
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries whose container file failed to load, with the reason
    pub fn failed(&self) -> impl Iterator<Item = (&IndexEntry, &str)> {
        self.loads.iter().filter_map(|load| match load {
            ContainerLoad::Failed { entry, reason } => Some((entry, reason.as_str())),
            ContainerLoad::Loaded { .. } => None,
        })
    }
}

fn load_table(dir: &Path, entry: &IndexEntry) -> Result<ContainerTable, LoadError> {
    let path = dir.join(&entry.file);
    let config: TableFileConfig = read_json(&path)?;
    let table = ContainerTable::from_config(config, &entry.id).map_err(|e| {
        LoadError::Validation {
            message: e.to_string(),
            path: path.clone(),
        }
    })?;
    debug!(container = %entry.id, segments = table.levels.len(), "loaded container table");
    Ok(table)
}

fn load_addon(dir: &Path, entry: &IndexEntry) -> Result<AddonTable, LoadError> {
    let path = dir.join(&entry.file);
    let config: AddonFileConfig = read_json(&path)?;
    AddonTable::from_config(config).map_err(|e| LoadError::Validation {
        message: e.to_string(),
        path,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        error: e,
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        error: e,
        path: path.to_path_buf(),
    })
}
