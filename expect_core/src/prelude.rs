//! Prelude module for convenient imports
//!
//! ```rust
//! use expect_core::prelude::*;
//! ```

// Pipeline
pub use crate::section::{build_section, build_sections, failed_labels, ContainerSection};
pub use crate::search::filter_sections;

// Results
pub use crate::aggregate::{BreakdownSource, GroupedItem, TierBreakdown};

// Settings
pub use crate::settings::{Settings, SettingsStore, TomlSettingsStore};

// Display
pub use crate::format::format_expected;
pub use crate::naming::{container_label, item_display_name};

// Re-exports from tables_core
pub use tables_core::{ContainerLoad, Tier};
