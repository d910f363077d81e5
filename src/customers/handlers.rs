// HTTP handlers for customer endpoints

use axum::{
    extract::{OriginalUri, Path, State},
    Json,
};

use crate::customers::Customer;
use crate::error::{ApiError, ErrorDetails, ErrorResponse};
use crate::AppState;

/// Handler for GET /api/customers
/// Lists every customer with its transactions
#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 500, description = "Internal server error", body = ErrorDetails)
    ),
    tag = "customers"
)]
pub async fn get_all_customers_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Customer>>, ErrorResponse> {
    let customers = state
        .customer_service
        .get_all_customers()
        .await
        .map_err(|e| ApiError::from(e).at(&uri))?;

    Ok(Json(customers))
}

/// Handler for GET /api/customers/:id
/// Retrieves one customer with its transactions
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorDetails),
        (status = 500, description = "Internal server error", body = ErrorDetails)
    ),
    tag = "customers"
)]
pub async fn get_customer_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(customer_id): Path<i32>,
) -> Result<Json<Customer>, ErrorResponse> {
    let customer = state
        .customer_service
        .get_customer_details(customer_id)
        .await
        .map_err(|e| ApiError::from(e).at(&uri))?;

    tracing::debug!("Successfully retrieved customer: {}", customer.name);
    Ok(Json(customer))
}
