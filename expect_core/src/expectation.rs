//! Expected drops per opening for items drawn from the tier pools
//!
//! For each item in each tier:
//!
//! E = E[rolls] * P(tier) * P(item | tier) * E[count]
//!
//! - E[rolls]: midpoint of the quantity-scaled roll range
//! - P(tier): rarity-adjusted tier probability
//! - P(item | tier): item weight over the pool's total item weight
//! - E[count]: midpoint of the quantity-scaled count range

use crate::quantity::{scale_count_range, scale_roll_range};
use crate::rarity::tier_probabilities;
use tables_core::{LevelSegment, Tier};

/// Expected amount of one item from one tier for a single opening
#[derive(Debug, Clone, PartialEq)]
pub struct ItemExpectation {
    pub item_id: String,
    pub tier: Tier,
    pub expected_per_opening: f64,
}

/// Replace NaN and infinities with zero
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Compute per-(item, tier) expectations for a segment.
///
/// Results follow canonical tier order, then pool order. Every value is
/// finite and non-negative; a pool with zero total item weight yields zeros.
pub fn compute_item_expectations(
    segment: &LevelSegment,
    rarity_pct: f64,
    quantity_pct: f64,
) -> Vec<ItemExpectation> {
    let tier_probs = tier_probabilities(segment, rarity_pct);
    let expected_rolls = scale_roll_range(segment.rolls, quantity_pct).midpoint();

    let mut results = Vec::new();

    for (tier, pool) in segment.pools.iter() {
        let p_pool = *tier_probs.get(tier);
        let total_item_weight = pool.total_item_weight();

        for item in &pool.items {
            let p_item = if total_item_weight > 0.0 {
                item.weight / total_item_weight
            } else {
                0.0
            };
            let expected_count = scale_count_range(item.count, quantity_pct).midpoint();
            let expected = expected_rolls * p_pool * p_item * expected_count;

            results.push(ItemExpectation {
                item_id: item.id.clone(),
                tier,
                expected_per_opening: finite_or_zero(expected).max(0.0),
            });
        }
    }

    results
}
