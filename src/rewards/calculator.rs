use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::rewards::error::{RewardError, RewardResult};

/// Points earned per transaction amount
///
/// Tiers, in currency units:
/// - above 100: 2 points per unit over 100, plus 50 for the 50..100 band
/// - above 50 up to 100: 1 point per unit over 50
/// - 50 and below: nothing
///
/// Fractional results are truncated toward zero.
pub struct PointsCalculator;

impl PointsCalculator {
    const SINGLE_TIER_BAND_POINTS: i64 = 50;

    /// Calculate points for one transaction amount
    ///
    /// # Errors
    /// - `RewardError::InvalidAmount` when `amount` is missing, zero or negative
    /// - `RewardError::PointsOverflow` when the result does not fit in `i64`
    pub fn calculate_points(amount: Option<Decimal>) -> RewardResult<i64> {
        let amount = match amount {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return Err(RewardError::InvalidAmount),
        };

        let double_tier_floor = Decimal::ONE_HUNDRED;
        let single_tier_floor = Decimal::from(50);

        if amount > double_tier_floor {
            let doubled = (amount - double_tier_floor)
                .checked_mul(Decimal::TWO)
                .ok_or(RewardError::PointsOverflow(amount))?;
            Self::truncate(doubled, amount)?
                .checked_add(Self::SINGLE_TIER_BAND_POINTS)
                .ok_or(RewardError::PointsOverflow(amount))
        } else if amount > single_tier_floor {
            Self::truncate(amount - single_tier_floor, amount)
        } else {
            Ok(0)
        }
    }

    fn truncate(points: Decimal, amount: Decimal) -> RewardResult<i64> {
        points
            .trunc()
            .to_i64()
            .ok_or(RewardError::PointsOverflow(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn points(amount: Decimal) -> i64 {
        PointsCalculator::calculate_points(Some(amount)).expect("amount should be valid")
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        let result = PointsCalculator::calculate_points(Some(dec!(0)));
        assert!(matches!(result, Err(RewardError::InvalidAmount)));
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let result = PointsCalculator::calculate_points(Some(dec!(-5)));
        assert!(matches!(result, Err(RewardError::InvalidAmount)));
    }

    #[test]
    fn test_missing_amount_is_invalid() {
        let result = PointsCalculator::calculate_points(None);
        assert!(matches!(result, Err(RewardError::InvalidAmount)));
    }

    #[test]
    fn test_double_tier() {
        assert_eq!(points(dec!(120)), 90);
        assert_eq!(points(dec!(200)), 250);
    }

    #[test]
    fn test_single_tier() {
        assert_eq!(points(dec!(80)), 30);
        assert_eq!(points(dec!(75)), 25);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(points(dec!(50)), 0);
        assert_eq!(points(dec!(100)), 50);
        assert_eq!(points(dec!(1)), 0);
    }

    #[test]
    fn test_fractional_amounts_truncate() {
        assert_eq!(points(dec!(50.5)), 0);
        assert_eq!(points(dec!(51.99)), 1);
        assert_eq!(points(dec!(100.99)), 51);
        assert_eq!(points(dec!(100.49)), 50);
        assert_eq!(points(dec!(101.5)), 53);
    }

    #[test]
    fn test_smallest_positive_amount() {
        assert_eq!(points(dec!(0.01)), 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = PointsCalculator::calculate_points(Some(Decimal::MAX));
        assert!(matches!(result, Err(RewardError::PointsOverflow(_))));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Whole-unit amounts follow the tier formula exactly
    #[test]
    fn prop_whole_amounts_follow_tiers() {
        proptest!(|(units in 1i64..=100_000)| {
            let expected = if units > 100 {
                (units - 100) * 2 + 50
            } else if units > 50 {
                units - 50
            } else {
                0
            };
            let points = PointsCalculator::calculate_points(Some(Decimal::from(units))).unwrap();
            prop_assert_eq!(points, expected);
        });
    }

    /// Spending more never earns fewer points
    #[test]
    fn prop_points_are_monotonic() {
        proptest!(|(cents in 1i64..=10_000_000, extra in 0i64..=100_000)| {
            let lower = Decimal::new(cents, 2);
            let higher = Decimal::new(cents + extra, 2);
            let low_points = PointsCalculator::calculate_points(Some(lower)).unwrap();
            let high_points = PointsCalculator::calculate_points(Some(higher)).unwrap();
            prop_assert!(low_points <= high_points);
        });
    }

    /// Non-positive amounts are always rejected
    #[test]
    fn prop_non_positive_amounts_rejected() {
        proptest!(|(cents in -10_000_000i64..=0)| {
            let result = PointsCalculator::calculate_points(Some(Decimal::new(cents, 2)));
            prop_assert!(matches!(result, Err(RewardError::InvalidAmount)));
        });
    }
}
