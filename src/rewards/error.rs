use rust_decimal::Decimal;

use crate::customers::{CustomerError, RepositoryError};

/// Error types for reward computation and reward queries
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    /// No customer with the requested id
    #[error("Customer not found with id: {0}")]
    CustomerNotFound(i32),

    /// A transaction inside the reward window has a missing or non-positive amount
    #[error("Transaction amount must be greater than 0")]
    InvalidAmount,

    /// Points for a transaction, or their sum, do not fit the point type
    #[error("Reward points overflow for amount {0}")]
    PointsOverflow(Decimal),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<CustomerError> for RewardError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => RewardError::CustomerNotFound(id),
            CustomerError::Repository(e) => RewardError::Repository(e),
        }
    }
}

/// Result type alias for reward operations
pub type RewardResult<T> = Result<T, RewardError>;
