use expect_core::quantity::{scale_count_range, scale_roll_range, ScaledRange, ROLL_CAP};
use expect_core::rarity::{effective_weights, tier_probabilities};
use expect_core::{
    aggregate, compute_addon_expectations, compute_item_expectations, BreakdownSource,
};
use proptest::prelude::*;
use tables_core::{AddonItem, AddonTable, CountRange, LevelSegment, PerTier, TierItem, TierPool};

fn count_range() -> impl Strategy<Value = CountRange> {
    (0u32..64, 0u32..16).prop_map(|(min, extra)| CountRange::new(min, min + extra))
}

fn tier_item() -> impl Strategy<Value = TierItem> {
    ("[a-e]{1,2}", 0.0f64..50.0, count_range()).prop_map(|(id, weight, count)| TierItem {
        id,
        weight,
        count,
    })
}

fn tier_pool() -> impl Strategy<Value = TierPool> {
    (
        prop_oneof![Just(0.0f64), 0.0f64..100.0],
        prop::collection::vec(tier_item(), 0..5),
    )
        .prop_map(|(weight, items)| TierPool { weight, items })
}

fn segment() -> impl Strategy<Value = LevelSegment> {
    (count_range(), tier_pool(), tier_pool(), tier_pool(), tier_pool()).prop_map(
        |(rolls, common, rare, epic, omega)| LevelSegment {
            min_level: 0,
            max_level: 100,
            rolls,
            pools: PerTier::new(common, rare, epic, omega),
        },
    )
}

fn addon() -> impl Strategy<Value = AddonTable> {
    (
        0i64..=100,
        prop::collection::vec(
            ("[a-e]{1,2}", 0u32..5, prop::array::uniform4(0.0f64..=1.0)),
            0..3,
        ),
    )
        .prop_map(|(level_requirement, items)| AddonTable {
            id: "addon".to_string(),
            level_requirement,
            group: "unmodified".to_string(),
            items: items
                .into_iter()
                .map(|(id, count, [c, r, e, o])| AddonItem {
                    id,
                    count,
                    roll_chances: PerTier::new(c, r, e, o),
                })
                .collect(),
        })
}

proptest! {
    #[test]
    fn expectations_are_finite_and_non_negative(
        seg in segment(),
        addons in prop::collection::vec(addon(), 0..3),
        rarity in 0u32..=300,
        quantity in 0u32..=300,
        level in 0i64..=100,
        per_x in 1u32..=10_000,
    ) {
        let items = compute_item_expectations(&seg, f64::from(rarity), f64::from(quantity));
        let addon_items = compute_addon_expectations(&addons, &seg, f64::from(rarity), level);

        for exp in &items {
            prop_assert!(exp.expected_per_opening.is_finite());
            prop_assert!(exp.expected_per_opening >= 0.0);
        }
        for exp in &addon_items {
            prop_assert!(exp.expected_per_opening.is_finite());
            prop_assert!(exp.expected_per_opening >= 0.0);
        }

        for grouped in aggregate(&items, &addon_items, f64::from(per_x)) {
            prop_assert!(grouped.total_expected.is_finite());
            prop_assert!(grouped.total_expected >= 0.0);
            for row in &grouped.breakdowns {
                prop_assert!(row.expected_per_x.is_finite());
                prop_assert!(row.expected_per_x > 0.0);
            }
        }
    }

    #[test]
    fn zero_rarity_keeps_base_weights(seg in segment()) {
        let weights = effective_weights(&seg, 0.0);
        for (tier, weight) in weights.iter() {
            prop_assert_eq!(*weight, seg.pools.get(tier).weight);
        }
    }

    #[test]
    fn zero_quantity_keeps_ranges(range in count_range()) {
        prop_assert_eq!(scale_count_range(range, 0.0), ScaledRange::from(range));
        if f64::from(range.max) <= ROLL_CAP {
            prop_assert_eq!(scale_roll_range(range, 0.0), ScaledRange::from(range));
        }
    }

    #[test]
    fn roll_range_never_exceeds_cap(range in count_range(), quantity in 0u32..=300) {
        let scaled = scale_roll_range(range, f64::from(quantity));
        prop_assert!(scaled.max <= ROLL_CAP);
        prop_assert!(scaled.min <= ROLL_CAP);
    }

    #[test]
    fn tier_probabilities_sum_to_one_or_zero(seg in segment(), rarity in 0u32..=300) {
        let probs = tier_probabilities(&seg, f64::from(rarity));
        let total_weight: f64 = seg.pools.iter().map(|(_, pool)| pool.weight).sum();
        if total_weight > 0.0 {
            prop_assert!((probs.sum() - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(probs.sum(), 0.0);
        }
    }

    #[test]
    fn grouped_rows_are_ordered(
        seg in segment(),
        addons in prop::collection::vec(addon(), 0..3),
        rarity in 0u32..=300,
    ) {
        let items = compute_item_expectations(&seg, f64::from(rarity), 0.0);
        let addon_items = compute_addon_expectations(&addons, &seg, f64::from(rarity), 100);
        let grouped = aggregate(&items, &addon_items, 1.0);

        for pair in grouped.windows(2) {
            prop_assert!(pair[0].item_id < pair[1].item_id);
        }

        for item in &grouped {
            let mut seen_addon = false;
            let mut last_tier = None;
            for row in &item.breakdowns {
                match &row.source {
                    BreakdownSource::Regular { tier } => {
                        prop_assert!(!seen_addon);
                        prop_assert!(last_tier < Some(*tier));
                        last_tier = Some(*tier);
                    }
                    BreakdownSource::Addon { .. } => seen_addon = true,
                    BreakdownSource::Combined => prop_assert!(false, "combined row before combine"),
                }
            }
            prop_assert_eq!(item.lowest_tier, item.breakdowns.first().and_then(|b| b.tier()));
        }
    }

    #[test]
    fn per_x_is_linear(
        seg in segment(),
        addons in prop::collection::vec(addon(), 0..3),
        per_x in 1u32..=1000,
        k in 1u32..=10,
    ) {
        let items = compute_item_expectations(&seg, 50.0, 50.0);
        let addon_items = compute_addon_expectations(&addons, &seg, 50.0, 100);

        let base = aggregate(&items, &addon_items, f64::from(per_x));
        let scaled = aggregate(&items, &addon_items, f64::from(per_x * k));
        prop_assert_eq!(base.len(), scaled.len());

        let k = f64::from(k);
        for (a, b) in base.iter().zip(&scaled) {
            prop_assert_eq!(&a.item_id, &b.item_id);
            prop_assert!((a.total_expected * k - b.total_expected).abs() <= 1e-9 * b.total_expected.max(1.0));
            for (ra, rb) in a.breakdowns.iter().zip(&b.breakdowns) {
                prop_assert!((ra.expected_per_x * k - rb.expected_per_x).abs() <= 1e-9 * rb.expected_per_x.max(1.0));
            }
        }
    }
}

#[test]
fn single_common_item_example() {
    let mut pools: PerTier<TierPool> = PerTier::default();
    pools.common = TierPool {
        weight: 1.0,
        items: vec![TierItem {
            id: "minecraft:oak_log".to_string(),
            weight: 1.0,
            count: CountRange::fixed(2),
        }],
    };
    let seg = LevelSegment {
        min_level: 0,
        max_level: 100,
        rolls: CountRange::fixed(1),
        pools,
    };

    let grouped = aggregate(&compute_item_expectations(&seg, 0.0, 0.0), &[], 1.0);
    assert_eq!(grouped.len(), 1);
    assert!((grouped[0].total_expected - 2.0).abs() < 1e-12);
}
