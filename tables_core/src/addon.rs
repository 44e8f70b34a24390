use crate::config::{AddonFileConfig, AddonItemConfig};
use crate::tier::PerTier;
use crate::TableError;

/// Group assigned to addons that don't name one
pub const DEFAULT_ADDON_GROUP: &str = "unmodified";

/// Bonus loot granted after the main tiered roll, outside its probabilities
#[derive(Debug, Clone)]
pub struct AddonTable {
    pub id: String,
    /// Addon only applies at or above this level
    pub level_requirement: i64,
    pub group: String,
    pub items: Vec<AddonItem>,
}

#[derive(Debug, Clone)]
pub struct AddonItem {
    pub id: String,
    pub count: u32,
    /// Independent trigger probability for each tier, in [0, 1]
    pub roll_chances: PerTier<f64>,
}

impl AddonTable {
    pub(crate) fn from_config(config: AddonFileConfig) -> Result<Self, TableError> {
        let items = config
            .items
            .into_iter()
            .map(AddonItem::from_config)
            .collect::<Result<_, _>>()?;

        Ok(AddonTable {
            id: config.id,
            level_requirement: config.level_requirement,
            group: config
                .group
                .unwrap_or_else(|| DEFAULT_ADDON_GROUP.to_string()),
            items,
        })
    }

    /// Whether this addon applies at the given level
    pub fn applies_at(&self, level: i64) -> bool {
        level >= self.level_requirement
    }
}

impl AddonItem {
    fn from_config(config: AddonItemConfig) -> Result<Self, TableError> {
        let chances = config.roll_chances;
        let roll_chances = PerTier::new(chances.common, chances.rare, chances.epic, chances.omega);

        for (_, &chance) in roll_chances.iter() {
            if !(0.0..=1.0).contains(&chance) {
                return Err(TableError::InvalidChance {
                    id: config.id,
                    chance,
                });
            }
        }

        Ok(AddonItem {
            id: config.id,
            count: config.count,
            roll_chances,
        })
    }
}
