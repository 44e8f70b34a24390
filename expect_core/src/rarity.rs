//! Item Rarity modifier
//!
//! For a rarity of r% the multiplier is m = 1 + r/100. The common pool keeps
//! its base weight; rare, epic and omega weights are multiplied by m. Tier
//! probabilities are each effective weight over the sum of all four.

use tables_core::{LevelSegment, PerTier};

/// Multiplier for a percentage modifier (0% = 1.0)
pub fn percent_multiplier(pct: f64) -> f64 {
    1.0 + pct / 100.0
}

/// Pool weights after applying the rarity modifier
pub fn effective_weights(segment: &LevelSegment, rarity_pct: f64) -> PerTier<f64> {
    let mult = percent_multiplier(rarity_pct);
    segment.pools.map(|tier, pool| {
        if tier.is_rarity_scaled() {
            pool.weight * mult
        } else {
            pool.weight
        }
    })
}

/// Probability of each tier being selected for a draw.
///
/// Sums to 1 when any weight is positive; all zero when the total is zero.
pub fn pool_probabilities(weights: &PerTier<f64>) -> PerTier<f64> {
    let total = weights.sum();
    if total <= 0.0 || !total.is_finite() {
        return PerTier::default();
    }
    weights.map(|_, weight| weight / total)
}

/// Rarity-adjusted tier probabilities for a segment
pub fn tier_probabilities(segment: &LevelSegment, rarity_pct: f64) -> PerTier<f64> {
    pool_probabilities(&effective_weights(segment, rarity_pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tables_core::{CountRange, Tier, TierPool};

    fn segment(weights: [f64; 4]) -> LevelSegment {
        LevelSegment {
            min_level: 0,
            max_level: 100,
            rolls: CountRange::fixed(1),
            pools: PerTier::from_fn(|tier| TierPool {
                weight: weights[tier.index()],
                items: Vec::new(),
            }),
        }
    }

    #[test]
    fn test_zero_rarity_is_identity() {
        let seg = segment([80.0, 15.0, 4.0, 1.0]);
        let weights = effective_weights(&seg, 0.0);
        assert_eq!(weights, PerTier::new(80.0, 15.0, 4.0, 1.0));
    }

    #[test]
    fn test_rarity_scales_only_non_common() {
        let seg = segment([80.0, 15.0, 4.0, 1.0]);
        let weights = effective_weights(&seg, 100.0);
        assert!((weights.common - 80.0).abs() < 1e-9);
        assert!((weights.rare - 30.0).abs() < 1e-9);
        assert!((weights.epic - 8.0).abs() < 1e-9);
        assert!((weights.omega - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let seg = segment([80.0, 15.0, 4.0, 1.0]);
        let probs = tier_probabilities(&seg, 250.0);
        assert!((probs.sum() - 1.0).abs() < 1e-9);
        assert!(*probs.get(Tier::Omega) > 0.01);
    }

    #[test]
    fn test_zero_total_weight_gives_zero_probabilities() {
        let seg = segment([0.0, 0.0, 0.0, 0.0]);
        let probs = tier_probabilities(&seg, 300.0);
        assert_eq!(probs, PerTier::default());
        assert!(probs.iter().all(|(_, p)| p.is_finite()));
    }

    #[test]
    fn test_common_only_segment() {
        let seg = segment([1.0, 0.0, 0.0, 0.0]);
        let probs = tier_probabilities(&seg, 300.0);
        assert!((probs.common - 1.0).abs() < 1e-12);
        assert_eq!(probs.rare, 0.0);
    }
}
