//! Item Quantity modifier
//!
//! For a quantity of q% the multiplier is m = 1 + q/100. Roll bounds are
//! scaled and capped at the container's slot count; count bounds are scaled
//! without a cap. Results stay continuous: the game rounds stochastically,
//! so the expectation equals the unrounded product.

use crate::rarity::percent_multiplier;
use tables_core::CountRange;

/// Maximum draws per opening (one per container slot)
pub const ROLL_CAP: f64 = 54.0;

/// A range after percentage scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRange {
    pub min: f64,
    pub max: f64,
}

impl ScaledRange {
    /// Expected value of a uniform draw over the range
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl From<CountRange> for ScaledRange {
    fn from(range: CountRange) -> Self {
        ScaledRange {
            min: f64::from(range.min),
            max: f64::from(range.max),
        }
    }
}

/// Scale the draws-per-opening range, capped at [`ROLL_CAP`]
pub fn scale_roll_range(range: CountRange, quantity_pct: f64) -> ScaledRange {
    let mult = percent_multiplier(quantity_pct);
    ScaledRange {
        min: (f64::from(range.min) * mult).min(ROLL_CAP),
        max: (f64::from(range.max) * mult).min(ROLL_CAP),
    }
}

/// Scale an item's stack size range
pub fn scale_count_range(range: CountRange, quantity_pct: f64) -> ScaledRange {
    let mult = percent_multiplier(quantity_pct);
    ScaledRange {
        min: f64::from(range.min) * mult,
        max: f64::from(range.max) * mult,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quantity_is_identity() {
        let range = CountRange::new(3, 7);
        assert_eq!(scale_roll_range(range, 0.0), ScaledRange::from(range));
        assert_eq!(scale_count_range(range, 0.0), ScaledRange::from(range));
    }

    #[test]
    fn test_doubling_before_midpoint() {
        let scaled = scale_roll_range(CountRange::fixed(1), 100.0);
        assert_eq!(scaled, ScaledRange { min: 2.0, max: 2.0 });
        assert!((scaled.midpoint() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_flooring() {
        // 3 * 1.5 = 4.5, kept fractional
        let scaled = scale_count_range(CountRange::new(3, 5), 50.0);
        assert!((scaled.min - 4.5).abs() < 1e-12);
        assert!((scaled.max - 7.5).abs() < 1e-12);
        assert!((scaled.midpoint() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_roll_cap_only_when_exceeded() {
        let under = scale_roll_range(CountRange::new(10, 27), 100.0);
        assert_eq!(under, ScaledRange { min: 20.0, max: 54.0 });

        let over = scale_roll_range(CountRange::new(20, 40), 300.0);
        assert_eq!(over, ScaledRange { min: 54.0, max: 54.0 });
    }

    #[test]
    fn test_count_range_uncapped() {
        let scaled = scale_count_range(CountRange::new(40, 64), 300.0);
        assert_eq!(scaled, ScaledRange { min: 160.0, max: 256.0 });
    }
}
