use chrono::{Local, NaiveDate};

use crate::customers::CustomerService;
use crate::rewards::aggregator::RewardAggregator;
use crate::rewards::error::RewardResult;
use crate::rewards::models::RewardSummary;

/// Source of the current calendar date
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Service answering reward queries
///
/// Read only: customers are looked up on every call and summaries are
/// computed on demand.
#[derive(Clone)]
pub struct RewardService {
    customers: CustomerService,
    clock: Clock,
}

impl RewardService {
    /// Create a new RewardService using the local date
    pub fn new(customers: CustomerService) -> Self {
        Self::with_clock(customers, local_today)
    }

    /// Create a new RewardService with a fixed source of "today"
    pub fn with_clock(customers: CustomerService, clock: Clock) -> Self {
        Self { customers, clock }
    }

    /// Reward summaries of every customer, in repository order
    ///
    /// The first customer that fails to aggregate fails the whole call.
    pub async fn get_all(&self) -> RewardResult<Vec<RewardSummary>> {
        let today = (self.clock)();
        let customers = self.customers.get_all_customers().await?;

        let summaries = customers
            .iter()
            .map(|customer| RewardAggregator::aggregate(customer, today))
            .collect::<RewardResult<Vec<_>>>()?;

        tracing::debug!("Computed rewards for {} customers", summaries.len());
        Ok(summaries)
    }

    /// Reward summary of one customer
    ///
    /// # Errors
    /// - `RewardError::CustomerNotFound` when the id is unknown
    /// - `RewardError::InvalidAmount` when a transaction in the window has a bad amount
    pub async fn get_by_id(&self, customer_id: i32) -> RewardResult<RewardSummary> {
        let today = (self.clock)();
        let customer = self.customers.get_customer_details(customer_id).await?;

        RewardAggregator::aggregate(&customer, today)
    }
}
