use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Reward points of one customer over the trailing window
///
/// Computed per request and never stored. Months are keyed by their full
/// English name without a year, so the same month of two different years
/// shares one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    #[schema(example = 1)]
    pub customer_id: i32,
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = json!({"June": 115}))]
    pub monthly_points: BTreeMap<String, i64>,
    #[schema(example = 115)]
    pub total_points: i64,
}

impl RewardSummary {
    /// Summary with no points yet
    pub fn empty(customer_id: i32, customer_name: impl Into<String>) -> Self {
        Self {
            customer_id,
            customer_name: customer_name.into(),
            monthly_points: BTreeMap::new(),
            total_points: 0,
        }
    }
}

/// Query parameters for GET /api/rewards/customers
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RewardQuery {
    /// Restrict the result to this customer
    ///
    /// Any integer is accepted; an id with no stored customer is a 404.
    #[param(example = 1)]
    pub id: Option<i32>,
}
