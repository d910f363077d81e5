use crate::customers::{Customer, CustomerError, DynCustomerRepository};

/// Service for looking up stored customers and their transactions
#[derive(Clone)]
pub struct CustomerService {
    repository: DynCustomerRepository,
}

impl CustomerService {
    /// Create a new CustomerService
    pub fn new(repository: DynCustomerRepository) -> Self {
        Self { repository }
    }

    /// Get one customer with its transactions
    ///
    /// # Errors
    /// `CustomerError::NotFound` when no customer has the given id
    pub async fn get_customer_details(&self, customer_id: i32) -> Result<Customer, CustomerError> {
        tracing::debug!("Fetching customer details for id: {}", customer_id);

        self.repository
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound(customer_id))
    }

    /// Get every customer in repository order
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        let customers = self.repository.find_all().await?;
        tracing::debug!("Retrieved {} customers", customers.len());
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::{InMemoryCustomerRepository, Transaction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn service_with(customers: Vec<Customer>) -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerRepository::new(customers)))
    }

    #[tokio::test]
    async fn test_get_customer_details_returns_transactions() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let service = service_with(vec![Customer::new(1, "Alice").with_transactions(vec![
            Transaction::new(1, 1, dec!(120), date),
            Transaction::new(2, 1, dec!(75), date),
        ])]);

        let customer = service.get_customer_details(1).await.unwrap();

        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_get_customer_details_not_found() {
        let service = service_with(vec![]);

        let err = service.get_customer_details(99).await.unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(99)));
        assert!(err.to_string().contains("99"));
    }

    #[tokio::test]
    async fn test_get_all_customers_empty() {
        let service = service_with(vec![]);

        let customers = service.get_all_customers().await.unwrap();

        assert!(customers.is_empty());
    }
}
