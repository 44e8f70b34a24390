//! User-adjustable modifiers and their persistence
//!
//! The engine only ever sees a [`Settings`] value. Stores are forgiving on
//! load: a missing or unreadable file gives the defaults, and each field
//! that is missing or not a number falls back to its own default. Values
//! that are present get clamped into their legal range.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

pub const MIN_LEVEL: i64 = 0;
pub const MAX_LEVEL: i64 = 100;
pub const MAX_RARITY_PCT: u32 = 300;
pub const MAX_QUANTITY_PCT: u32 = 300;
pub const MIN_PER_X: u32 = 1;
pub const MAX_PER_X: u32 = 10_000;

/// Error reading or writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Modifiers applied to every container on each recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Player level, 0..=100
    pub level: u32,
    /// Item Rarity %, 0..=300
    pub rarity_pct: u32,
    /// Item Quantity %, 0..=300
    pub quantity_pct: u32,
    /// Display values per this many openings, 1..=10000
    pub per_x: u32,
    /// Collapse each item's breakdown into a single row
    pub combine_tiers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            level: 0,
            rarity_pct: 0,
            quantity_pct: 0,
            per_x: 100,
            combine_tiers: false,
        }
    }
}

impl Settings {
    /// Copy with every numeric field clamped into its legal range
    pub fn clamped(self) -> Self {
        Settings {
            level: self.level.min(MAX_LEVEL as u32),
            rarity_pct: self.rarity_pct.min(MAX_RARITY_PCT),
            quantity_pct: self.quantity_pct.min(MAX_QUANTITY_PCT),
            per_x: self.per_x.clamp(MIN_PER_X, MAX_PER_X),
            combine_tiers: self.combine_tiers,
        }
    }

    pub fn level(&self) -> i64 {
        i64::from(self.level)
    }

    pub fn rarity(&self) -> f64 {
        f64::from(self.rarity_pct)
    }

    pub fn quantity(&self) -> f64 {
        f64::from(self.quantity_pct)
    }

    pub fn per_x(&self) -> f64 {
        f64::from(self.per_x)
    }

    /// Parse settings from TOML, defaulting and clamping field by field.
    ///
    /// Only text that isn't a TOML table at all is an error.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let table: toml::Table = toml::from_str(content)?;
        let defaults = Settings::default();

        Ok(Settings {
            level: clamp_or_default(&table, "level", MIN_LEVEL, MAX_LEVEL, defaults.level),
            rarity_pct: clamp_or_default(
                &table,
                "rarity_pct",
                0,
                i64::from(MAX_RARITY_PCT),
                defaults.rarity_pct,
            ),
            quantity_pct: clamp_or_default(
                &table,
                "quantity_pct",
                0,
                i64::from(MAX_QUANTITY_PCT),
                defaults.quantity_pct,
            ),
            per_x: clamp_or_default(
                &table,
                "per_x",
                i64::from(MIN_PER_X),
                i64::from(MAX_PER_X),
                defaults.per_x,
            ),
            combine_tiers: table
                .get("combine_tiers")
                .and_then(toml::Value::as_bool)
                .unwrap_or(defaults.combine_tiers),
        })
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }
}

/// Read an integer field, flooring floats; fall back to the default when
/// the field is missing or not a finite number.
fn clamp_or_default(table: &toml::Table, key: &str, min: i64, max: i64, default: u32) -> u32 {
    let value = match table.get(key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(toml::Value::Float(v)) if v.is_finite() => v.floor() as i64,
        _ => return default,
    };
    // Bounds are all within u32
    value.clamp(min, max) as u32
}

/// Narrow load/save contract for wherever settings persist
pub trait SettingsStore {
    /// Load settings, never failing; unusable data gives defaults
    fn load(&self) -> Settings;

    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings persisted to a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TomlSettingsStore { path: path.into() }
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = ?self.path, error = %e, "no saved settings, using defaults");
                return Settings::default();
            }
        };

        Settings::from_toml_str(&content).unwrap_or_else(|e| {
            warn!(path = ?self.path, error = %e, "unreadable settings, using defaults");
            Settings::default()
        })
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let content = settings.clamped().to_toml_string()?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
