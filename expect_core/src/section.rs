use crate::addon::compute_addon_expectations;
use crate::aggregate::{aggregate, GroupedItem};
use crate::expectation::compute_item_expectations;
use crate::naming::container_label;
use crate::segment::select_segment;
use crate::settings::Settings;
use tables_core::{AddonTable, ContainerLoad, ContainerTable, IndexEntry};
use tracing::debug;

/// One container's rows, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSection {
    pub id: String,
    pub label: String,
    /// Sorted by item id. Empty when no segment covers the level.
    pub items: Vec<GroupedItem>,
}

impl ContainerSection {
    /// Whether to show the "no items at this level" state
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Display label for an index entry, preferring its published name
pub fn entry_label(entry: &IndexEntry) -> String {
    entry
        .name
        .clone()
        .unwrap_or_else(|| container_label(&entry.id))
}

/// Display label for a loaded container: the index name, then the
/// table's own name, then a label derived from the id
pub fn section_label(entry: &IndexEntry, table: &ContainerTable) -> String {
    entry
        .name
        .clone()
        .or_else(|| table.name.clone())
        .unwrap_or_else(|| container_label(&entry.id))
}

/// Run the full pipeline for one container
pub fn build_section(
    entry: &IndexEntry,
    table: &ContainerTable,
    addons: &[AddonTable],
    settings: &Settings,
) -> ContainerSection {
    let settings = settings.clamped();
    let label = section_label(entry, table);

    let Some(segment) = select_segment(&table.levels, settings.level()) else {
        debug!(container = %entry.id, level = settings.level, "no items at this level");
        return ContainerSection {
            id: entry.id.clone(),
            label,
            items: Vec::new(),
        };
    };

    let expectations = compute_item_expectations(segment, settings.rarity(), settings.quantity());
    let addon_expectations =
        compute_addon_expectations(addons, segment, settings.rarity(), settings.level());

    let mut items = aggregate(&expectations, &addon_expectations, settings.per_x());
    if settings.combine_tiers {
        items = items.into_iter().map(GroupedItem::combined).collect();
    }

    debug!(container = %entry.id, items = items.len(), "computed container section");

    ContainerSection {
        id: entry.id.clone(),
        label,
        items,
    }
}

/// Build sections for every loaded container, in index order.
/// Failed containers are skipped; see [`failed_labels`].
pub fn build_sections(loads: &[ContainerLoad], settings: &Settings) -> Vec<ContainerSection> {
    loads
        .iter()
        .filter_map(|load| match load {
            ContainerLoad::Loaded {
                entry,
                table,
                addons,
            } => Some(build_section(entry, table, addons, settings)),
            ContainerLoad::Failed { .. } => None,
        })
        .collect()
}

/// Labels of containers that failed to load, in index order
pub fn failed_labels(loads: &[ContainerLoad]) -> Vec<String> {
    loads
        .iter()
        .filter(|load| !load.is_loaded())
        .map(|load| entry_label(load.entry()))
        .collect()
}
