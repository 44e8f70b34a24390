use serde::Deserialize;

/// JSON layout of a published container table file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFileConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub levels: Vec<SegmentConfig>,
}

/// One level segment. Bounds come either as `level = {min, max}` or as
/// flat `minLevel` / `maxLevel` fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentConfig {
    #[serde(default)]
    pub level: Option<LevelBoundsConfig>,
    #[serde(default)]
    pub min_level: Option<i64>,
    #[serde(default)]
    pub max_level: Option<i64>,
    #[serde(alias = "roll")]
    pub rolls: CountConfig,
    #[serde(default)]
    pub common: PoolConfig,
    #[serde(default)]
    pub rare: PoolConfig,
    #[serde(default)]
    pub epic: PoolConfig,
    #[serde(default)]
    pub omega: PoolConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LevelBoundsConfig {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PoolConfig {
    // Older exports carry the misspelled key
    #[serde(default, alias = "weigth")]
    pub weight: f64,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub count: Option<CountConfig>,
}

/// Count can be a single value, a `{min, max}` object or a `[min, max]` pair
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum CountConfig {
    Single(u32),
    Object { min: u32, max: u32 },
    Range([u32; 2]),
}

impl CountConfig {
    pub fn min(&self) -> u32 {
        match self {
            CountConfig::Single(v) => *v,
            CountConfig::Object { min, .. } => *min,
            CountConfig::Range([min, _]) => *min,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            CountConfig::Single(v) => *v,
            CountConfig::Object { max, .. } => *max,
            CountConfig::Range([_, max]) => *max,
        }
    }
}

/// JSON layout of a published addon file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonFileConfig {
    pub id: String,
    #[serde(default)]
    pub level_requirement: i64,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub items: Vec<AddonItemConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonItemConfig {
    pub id: String,
    #[serde(default = "default_addon_count")]
    pub count: u32,
    #[serde(default, alias = "rollChanges")]
    pub roll_chances: ChanceConfig,
}

/// Per-tier trigger probabilities; absent tiers never trigger
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct ChanceConfig {
    #[serde(default)]
    pub common: f64,
    #[serde(default)]
    pub rare: f64,
    #[serde(default)]
    pub epic: f64,
    #[serde(default)]
    pub omega: f64,
}

fn default_addon_count() -> u32 {
    1
}
