//! expect_core - Expected drops for tiered, level-gated loot containers
//!
//! Nothing here rolls dice. Every number is a closed-form expectation:
//! - Level segment selection for the current level
//! - Rarity and quantity modifiers applied to tier weights and ranges
//! - Per-item expectations from the tier pools, plus addon loot
//! - Aggregation into sorted, grouped rows and free-text search
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use expect_core::prelude::*;
//! use tables_core::ContainerRegistry;
//!
//! let registry = ContainerRegistry::load(Path::new("data/loot_tables/"))?;
//! let settings = TomlSettingsStore::new("settings.toml").load();
//!
//! let sections = build_sections(registry.loads(), &settings);
//! for section in filter_sections(&sections, "wooden") {
//!     for item in &section.items {
//!         println!("{} {}", item.item_id, format_expected(item.total_expected));
//!     }
//! }
//! ```

pub mod addon;
pub mod aggregate;
pub mod expectation;
pub mod format;
pub mod naming;
pub mod prelude;
pub mod quantity;
pub mod rarity;
pub mod search;
pub mod section;
pub mod segment;
pub mod settings;

pub use addon::{compute_addon_expectations, AddonItemExpectation};
pub use aggregate::{aggregate, BreakdownSource, GroupedItem, TierBreakdown};
pub use expectation::{compute_item_expectations, ItemExpectation};
pub use search::filter_sections;
pub use section::{build_section, build_sections, failed_labels, ContainerSection};
pub use segment::select_segment;
pub use settings::{Settings, SettingsError, SettingsStore, TomlSettingsStore};

// Re-export the data types the engine consumes
pub use tables_core::{AddonTable, ContainerTable, LevelSegment, PerTier, Tier};
