use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A purchase made by a customer
///
/// Transactions are owned by their customer and are read-only input to the
/// reward computation. `amount` mirrors a nullable column: a missing amount is
/// kept as `None` and rejected when rewards are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[schema(example = 1)]
    pub id: i64,
    /// Owning customer; not part of the JSON representation
    #[serde(skip)]
    pub customer_id: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 120.0)]
    pub amount: Option<Decimal>,
    #[schema(example = "2024-06-01")]
    pub transaction_date: NaiveDate,
}

impl Transaction {
    pub fn new(id: i64, customer_id: i32, amount: Decimal, transaction_date: NaiveDate) -> Self {
        Self {
            id,
            customer_id,
            amount: Some(amount),
            transaction_date,
        }
    }
}

/// A customer together with every transaction it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = 1)]
    pub customer_id: i32,
    #[schema(example = "Alice")]
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl Customer {
    pub fn new(customer_id: i32, name: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Replace the transaction list, keeping the given order
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }
}

/// Row shape of the `customers` table
#[derive(Debug, Clone, FromRow)]
pub(crate) struct CustomerRow {
    pub customer_id: i32,
    pub name: String,
}

impl CustomerRow {
    pub(crate) fn into_customer(self, transactions: Vec<Transaction>) -> Customer {
        Customer {
            customer_id: self.customer_id,
            name: self.name,
            transactions,
        }
    }
}
