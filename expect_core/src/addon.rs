//! Expected drops for addon loot
//!
//! Addon items bypass the tier pools. Each item has its own trigger chance
//! per tier; the expected chance is those chances weighted by how likely
//! each tier is for the opening:
//!
//! E = sum over tiers (P(tier) * chance[tier]) * count
//!
//! Rarity shifts P(tier) and so reaches addon items. Quantity does not.

use crate::expectation::finite_or_zero;
use crate::rarity::tier_probabilities;
use tables_core::{AddonTable, LevelSegment};

/// Expected amount of one addon item for a single opening
#[derive(Debug, Clone, PartialEq)]
pub struct AddonItemExpectation {
    pub item_id: String,
    /// Addon group the item came from (e.g. "unmodified")
    pub group: String,
    pub expected_per_opening: f64,
}

/// Compute expectations for every addon whose level requirement is met
pub fn compute_addon_expectations(
    addons: &[AddonTable],
    segment: &LevelSegment,
    rarity_pct: f64,
    level: i64,
) -> Vec<AddonItemExpectation> {
    let tier_probs = tier_probabilities(segment, rarity_pct);

    addons
        .iter()
        .filter(|addon| addon.applies_at(level))
        .flat_map(|addon| {
            addon.items.iter().map(move |item| {
                let expected_chance: f64 = tier_probs
                    .iter()
                    .map(|(tier, p)| p * item.roll_chances.get(tier))
                    .sum();
                let expected = expected_chance * f64::from(item.count);

                AddonItemExpectation {
                    item_id: item.id.clone(),
                    group: addon.group.clone(),
                    expected_per_opening: finite_or_zero(expected).max(0.0),
                }
            })
        })
        .collect()
}
