use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity bucket a draw lands in, ordered Common < Rare < Epic < Omega
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Common,
    Rare,
    Epic,
    Omega,
}

impl Tier {
    /// All tiers in canonical order
    pub const ALL: [Tier; 4] = [Tier::Common, Tier::Rare, Tier::Epic, Tier::Omega];

    /// Position in the canonical order (common = 0 .. omega = 3)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the rarity modifier scales this tier's pool weight
    pub fn is_rarity_scaled(self) -> bool {
        !matches!(self, Tier::Common)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Common => "common",
            Tier::Rare => "rare",
            Tier::Epic => "epic",
            Tier::Omega => "omega",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Rare => "Rare",
            Tier::Epic => "Epic",
            Tier::Omega => "Omega",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One value per tier, addressed by [`Tier`] rather than by name
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerTier<T> {
    pub common: T,
    pub rare: T,
    pub epic: T,
    pub omega: T,
}

impl<T> PerTier<T> {
    pub fn new(common: T, rare: T, epic: T, omega: T) -> Self {
        PerTier {
            common,
            rare,
            epic,
            omega,
        }
    }

    /// Build a value for every tier from a function of the tier
    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        PerTier {
            common: f(Tier::Common),
            rare: f(Tier::Rare),
            epic: f(Tier::Epic),
            omega: f(Tier::Omega),
        }
    }

    pub fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::Common => &self.common,
            Tier::Rare => &self.rare,
            Tier::Epic => &self.epic,
            Tier::Omega => &self.omega,
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::Common => &mut self.common,
            Tier::Rare => &mut self.rare,
            Tier::Epic => &mut self.epic,
            Tier::Omega => &mut self.omega,
        }
    }

    /// Iterate values in canonical tier order
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Tier, &T) -> U) -> PerTier<U> {
        PerTier::from_fn(|tier| f(tier, self.get(tier)))
    }
}

impl PerTier<f64> {
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| *v).sum()
    }
}
