// Rewards module
//
// Points calculation, monthly aggregation over the trailing window, and the
// query service and handlers built on top of them.

pub mod aggregator;
pub mod calculator;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use aggregator::{RewardAggregator, REWARD_WINDOW_MONTHS};
pub use calculator::PointsCalculator;
pub use error::{RewardError, RewardResult};
pub use handlers::get_customer_rewards_handler;
pub use models::{RewardQuery, RewardSummary};
pub use service::{Clock, RewardService};
