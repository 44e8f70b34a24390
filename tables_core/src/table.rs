use crate::config::{CountConfig, ItemConfig, PoolConfig, SegmentConfig, TableFileConfig};
use crate::tier::PerTier;
use crate::TableError;

/// A container type with level-dependent loot rules
#[derive(Debug, Clone)]
pub struct ContainerTable {
    pub id: String,
    pub name: Option<String>,
    /// Segments in definition order; lookups take the first match
    pub levels: Vec<LevelSegment>,
}

/// Rolls and tier pools for an inclusive level range
#[derive(Debug, Clone)]
pub struct LevelSegment {
    pub min_level: i64,
    pub max_level: i64,
    /// Number of draws per opening
    pub rolls: CountRange,
    pub pools: PerTier<TierPool>,
}

#[derive(Debug, Clone, Default)]
pub struct TierPool {
    /// Relative likelihood this tier is picked for a draw
    pub weight: f64,
    pub items: Vec<TierItem>,
}

#[derive(Debug, Clone)]
pub struct TierItem {
    pub id: String,
    /// Relative likelihood within the pool
    pub weight: f64,
    pub count: CountRange,
}

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Self {
        CountRange { min, max }
    }

    pub fn fixed(count: u32) -> Self {
        CountRange {
            min: count,
            max: count,
        }
    }
}

impl From<CountConfig> for CountRange {
    fn from(config: CountConfig) -> Self {
        CountRange {
            min: config.min(),
            max: config.max(),
        }
    }
}

impl ContainerTable {
    /// Parse a container table from config. `fallback_id` is used when the
    /// file itself carries no id (the index id is authoritative for lookups).
    pub(crate) fn from_config(config: TableFileConfig, fallback_id: &str) -> Result<Self, TableError> {
        let levels: Vec<LevelSegment> = config
            .levels
            .into_iter()
            .enumerate()
            .map(|(index, segment)| LevelSegment::from_config(index, segment))
            .collect::<Result<_, _>>()?;

        Ok(ContainerTable {
            id: config.id.unwrap_or_else(|| fallback_id.to_string()),
            name: config.name,
            levels,
        })
    }
}

impl LevelSegment {
    fn from_config(index: usize, config: SegmentConfig) -> Result<Self, TableError> {
        let (min_level, max_level) = match (config.level, config.min_level, config.max_level) {
            (Some(bounds), _, _) => (bounds.min, bounds.max),
            (None, Some(min), Some(max)) => (min, max),
            _ => return Err(TableError::MissingLevelBounds(index)),
        };

        let pools = PerTier {
            common: TierPool::from_config("common", config.common)?,
            rare: TierPool::from_config("rare", config.rare)?,
            epic: TierPool::from_config("epic", config.epic)?,
            omega: TierPool::from_config("omega", config.omega)?,
        };

        Ok(LevelSegment {
            min_level,
            max_level,
            rolls: config.rolls.into(),
            pools,
        })
    }

    /// Whether `level` falls inside this segment's inclusive bounds
    pub fn contains(&self, level: i64) -> bool {
        self.min_level <= level && level <= self.max_level
    }
}

impl TierPool {
    fn from_config(tier_name: &str, config: PoolConfig) -> Result<Self, TableError> {
        check_weight(tier_name, config.weight)?;
        let items = config
            .items
            .into_iter()
            .map(TierItem::from_config)
            .collect::<Result<_, _>>()?;

        Ok(TierPool {
            weight: config.weight,
            items,
        })
    }

    pub fn total_item_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

impl TierItem {
    fn from_config(config: ItemConfig) -> Result<Self, TableError> {
        check_weight(&config.id, config.weight)?;
        Ok(TierItem {
            count: config.count.map(CountRange::from).unwrap_or(CountRange::fixed(1)),
            id: config.id,
            weight: config.weight,
        })
    }
}

fn check_weight(id: &str, weight: f64) -> Result<(), TableError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(TableError::InvalidWeight {
            id: id.to_string(),
            weight,
        })
    }
}
