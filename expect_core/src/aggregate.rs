//! Group per-tier and addon expectations into display rows per item

use crate::addon::AddonItemExpectation;
use crate::expectation::{finite_or_zero, ItemExpectation};
use crate::naming::capitalize;
use std::collections::BTreeMap;
use tables_core::{PerTier, Tier};

/// Label of the single row shown when tier rows are combined
pub const COMBINED_LABEL: &str = "All";

/// Where a breakdown row's expectation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownSource {
    /// Drawn from a tier pool
    Regular { tier: Tier },
    /// Granted by an addon group, outside the tier pools
    Addon { group: String },
    /// Every row of the item folded into one
    Combined,
}

/// One sub-row of a grouped item
#[derive(Debug, Clone, PartialEq)]
pub struct TierBreakdown {
    pub source: BreakdownSource,
    /// Display label for the tier column ("Common", "Unmodified", ...)
    pub label: String,
    /// Expected amount per X openings
    pub expected_per_x: f64,
}

impl TierBreakdown {
    /// The tier of a regular row, `None` for addon and combined rows
    pub fn tier(&self) -> Option<Tier> {
        match self.source {
            BreakdownSource::Regular { tier } => Some(tier),
            BreakdownSource::Addon { .. } | BreakdownSource::Combined => None,
        }
    }
}

/// All rows for one item within a container
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedItem {
    pub item_id: String,
    /// Lowest tier with a positive regular contribution; `None` for addon-only items
    pub lowest_tier: Option<Tier>,
    /// Tier rows in canonical order, then addon rows
    pub breakdowns: Vec<TierBreakdown>,
    /// Sum of every breakdown row
    pub total_expected: f64,
}

impl GroupedItem {
    /// Collapse the breakdown into a single row carrying the total
    pub fn combined(mut self) -> Self {
        if self.breakdowns.len() > 1 {
            self.breakdowns = vec![TierBreakdown {
                source: BreakdownSource::Combined,
                label: COMBINED_LABEL.to_string(),
                expected_per_x: self.total_expected,
            }];
        }
        self
    }
}

#[derive(Default)]
struct ItemAccumulator {
    tiers: PerTier<f64>,
    /// Addon totals per group, in first-seen order
    addons: Vec<(String, f64)>,
}

impl ItemAccumulator {
    fn add_addon(&mut self, group: &str, expected: f64) {
        match self.addons.iter_mut().find(|(g, _)| g == group) {
            Some((_, total)) => *total += expected,
            None => self.addons.push((group.to_string(), expected)),
        }
    }

    fn into_grouped(self, item_id: String, per_x: f64) -> GroupedItem {
        let mut breakdowns: Vec<TierBreakdown> = self
            .tiers
            .iter()
            .filter(|&(_, &value)| value > 0.0)
            .map(|(tier, &value)| TierBreakdown {
                source: BreakdownSource::Regular { tier },
                label: tier.label().to_string(),
                expected_per_x: finite_or_zero(value * per_x),
            })
            .collect();

        let lowest_tier = breakdowns.first().and_then(TierBreakdown::tier);

        breakdowns.extend(
            self.addons
                .into_iter()
                .filter(|(_, value)| *value > 0.0)
                .map(|(group, value)| TierBreakdown {
                    label: capitalize(&group),
                    source: BreakdownSource::Addon { group },
                    expected_per_x: finite_or_zero(value * per_x),
                }),
        );

        let total_expected = breakdowns.iter().map(|b| b.expected_per_x).sum();

        GroupedItem {
            item_id,
            lowest_tier,
            breakdowns,
            total_expected,
        }
    }
}

/// Merge tier and addon expectations by item id.
///
/// Duplicate entries for the same item and tier are summed. Values are
/// scaled by `per_x`. Items whose every row is zero are dropped. The result
/// is sorted by ascending item id regardless of input order.
pub fn aggregate(
    expectations: &[ItemExpectation],
    addon_expectations: &[AddonItemExpectation],
    per_x: f64,
) -> Vec<GroupedItem> {
    let mut items: BTreeMap<&str, ItemAccumulator> = BTreeMap::new();

    for exp in expectations {
        let acc = items.entry(exp.item_id.as_str()).or_default();
        *acc.tiers.get_mut(exp.tier) += exp.expected_per_opening;
    }

    for exp in addon_expectations {
        items
            .entry(exp.item_id.as_str())
            .or_default()
            .add_addon(&exp.group, exp.expected_per_opening);
    }

    items
        .into_iter()
        .map(|(item_id, acc)| acc.into_grouped(item_id.to_string(), per_x))
        .filter(|item| !item.breakdowns.is_empty())
        .collect()
}
