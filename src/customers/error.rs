/// Storage failures raised by a customer repository
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Error types for customer lookups
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer not found with id: {0}")]
    NotFound(i32),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
