//! Reward API
//!
//! Computes loyalty reward points for retail customers from their purchase
//! transactions and serves them over HTTP.

pub mod config;
pub mod customers;
pub mod db;
pub mod error;
pub mod rewards;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use customers::{Customer, CustomerService, DynCustomerRepository, Transaction};
use error::ErrorDetails;
use rewards::{RewardService, RewardSummary};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        rewards::handlers::get_customer_rewards_handler,
        customers::handlers::get_all_customers_handler,
        customers::handlers::get_customer_handler,
    ),
    components(
        schemas(RewardSummary, Customer, Transaction, ErrorDetails)
    ),
    tags(
        (name = "rewards", description = "Customer reward points over the last three months"),
        (name = "customers", description = "Stored customers and their transactions")
    ),
    info(
        title = "Reward API",
        version = "1.0.0",
        description = "RESTful API computing retail loyalty reward points"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub reward_service: RewardService,
    pub customer_service: CustomerService,
}

impl AppState {
    /// Wire the services on top of one customer repository
    pub fn new(repository: DynCustomerRepository) -> Self {
        let customer_service = CustomerService::new(repository);
        Self {
            reward_service: RewardService::new(customer_service.clone()),
            customer_service,
        }
    }
}

/// API routes without documentation or middleware
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/rewards/customers",
            get(rewards::handlers::get_customer_rewards_handler),
        )
        .route(
            "/api/customers",
            get(customers::handlers::get_all_customers_handler),
        )
        .route(
            "/api/customers/:id",
            get(customers::handlers::get_customer_handler),
        )
}

/// Creates and configures the application router
/// Mounts the API, Swagger UI, CORS and request tracing
pub fn create_router(state: AppState) -> Router {
    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
