// HTTP handlers for reward endpoints

use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    Json,
};

use crate::error::{ApiError, ErrorDetails, ErrorResponse};
use crate::rewards::models::{RewardQuery, RewardSummary};
use crate::AppState;

/// Handler for GET /api/rewards/customers
/// Returns the reward summary of one customer (`?id=`) or of every customer
#[utoipa::path(
    get,
    path = "/api/rewards/customers",
    params(RewardQuery),
    responses(
        (status = 200, description = "Reward summaries, one element when an id is given", body = Vec<RewardSummary>),
        (status = 400, description = "Non-numeric id or invalid transaction amount", body = ErrorDetails),
        (status = 404, description = "Customer not found", body = ErrorDetails),
        (status = 500, description = "Internal server error", body = ErrorDetails)
    ),
    tag = "rewards"
)]
pub async fn get_customer_rewards_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<RewardQuery>, QueryRejection>,
) -> Result<Json<Vec<RewardSummary>>, ErrorResponse> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()).at(&uri))?;

    let summaries = match query.id {
        Some(customer_id) => {
            tracing::debug!("Fetching rewards for customer {}", customer_id);
            state
                .reward_service
                .get_by_id(customer_id)
                .await
                .map(|summary| vec![summary])
        }
        None => {
            tracing::debug!("Fetching rewards for all customers");
            state.reward_service.get_all().await
        }
    }
    .map_err(|e| ApiError::from(e).at(&uri))?;

    Ok(Json(summaries))
}
