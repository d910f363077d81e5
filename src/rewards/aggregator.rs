use chrono::{Months, NaiveDate};

use crate::customers::Customer;
use crate::rewards::calculator::PointsCalculator;
use crate::rewards::error::{RewardError, RewardResult};
use crate::rewards::models::RewardSummary;

/// Length of the trailing reward window in calendar months
pub const REWARD_WINDOW_MONTHS: u32 = 3;

/// Groups a customer's points by month name over the trailing window
pub struct RewardAggregator;

impl RewardAggregator {
    /// First date inside the window ending at `today`
    ///
    /// Calendar-month subtraction: a day that does not exist in the target
    /// month is clamped to that month's last day (May 31 -> Feb 29/28).
    pub fn window_start(today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(REWARD_WINDOW_MONTHS))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Build the reward summary of `customer` as of `today`
    ///
    /// Transactions are visited in stored order. Those dated before the
    /// window start are skipped; any other transaction with an invalid
    /// amount fails the whole summary.
    pub fn aggregate(customer: &Customer, today: NaiveDate) -> RewardResult<RewardSummary> {
        let threshold = Self::window_start(today);
        let mut summary = RewardSummary::empty(customer.customer_id, customer.name.clone());

        for transaction in &customer.transactions {
            if transaction.transaction_date < threshold {
                continue;
            }

            let points = PointsCalculator::calculate_points(transaction.amount)?;
            let overflow = || RewardError::PointsOverflow(transaction.amount.unwrap_or_default());

            let month = transaction.transaction_date.format("%B").to_string();
            let bucket = summary.monthly_points.entry(month).or_insert(0);
            *bucket = bucket.checked_add(points).ok_or_else(overflow)?;
            summary.total_points = summary.total_points.checked_add(points).ok_or_else(overflow)?;
        }

        tracing::debug!(
            "Customer {} earned {} points since {}",
            customer.customer_id,
            summary.total_points,
            threshold
        );
        Ok(summary)
    }
}
