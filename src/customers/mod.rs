// Customers module
// Stored customers, their transactions, and the repository that loads them

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{CustomerError, RepositoryError};
pub use handlers::{get_all_customers_handler, get_customer_handler};
pub use models::{Customer, Transaction};
pub use repository::{
    CustomerRepository, DynCustomerRepository, InMemoryCustomerRepository, PgCustomerRepository,
};
pub use service::CustomerService;
