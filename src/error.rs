// Error handling module for the Reward API
// Provides the HTTP-facing error type and the JSON error body

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use crate::customers::{CustomerError, RepositoryError};
use crate::rewards::RewardError;

/// Main error type for the API
///
/// Each variant maps to one HTTP status code. Handlers attach the request
/// path with [`ApiError::at`] before returning.
#[derive(Debug)]
pub enum ApiError {
    /// Query parameters that could not be parsed
    /// Maps to HTTP 400 Bad Request
    BadRequest(String),

    /// Maps to HTTP 404 Not Found
    CustomerNotFound { id: i32 },

    /// Missing or non-positive transaction amount inside the reward window
    /// Maps to HTTP 400 Bad Request
    InvalidAmount,

    /// Database operation errors
    /// Maps to HTTP 500, details are only logged
    DatabaseError(RepositoryError),

    /// Any other failure
    /// Maps to HTTP 500 with the propagated message
    InternalError(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Local time the error was produced
    #[schema(value_type = String, example = "2024-06-01T10:15:30.123")]
    pub date_time: NaiveDateTime,

    /// Request that failed, as `uri=<path>`
    #[schema(example = "uri=/api/rewards/customers")]
    pub description: String,

    /// Human-readable error message
    #[schema(example = "Customer not found with id: 99")]
    pub message: String,
}

/// An [`ApiError`] bound to the request it failed
#[derive(Debug)]
pub struct ErrorResponse {
    error: ApiError,
    description: String,
}

impl ApiError {
    /// Bind this error to the request URI for the response body
    pub fn at(self, uri: &Uri) -> ErrorResponse {
        ErrorResponse {
            error: self,
            description: format!("uri={}", uri.path()),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::CustomerNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidAmount => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message, logged at a level matching the severity
    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => {
                debug!("Bad request: {}", message);
                message.clone()
            }
            ApiError::CustomerNotFound { id } => {
                debug!("Customer with id {} not found", id);
                RewardError::CustomerNotFound(*id).to_string()
            }
            ApiError::InvalidAmount => {
                warn!("Rejected reward computation: invalid transaction amount");
                RewardError::InvalidAmount.to_string()
            }
            ApiError::DatabaseError(db_error) => {
                error!("Database error: {:?}", db_error);
                "A database error occurred".to_string()
            }
            ApiError::InternalError(internal_msg) => {
                error!("Internal error: {}", internal_msg);
                internal_msg.clone()
            }
        }
    }
}

impl ErrorResponse {
    /// Build the status code and body for this error
    pub fn to_error_details(&self) -> (StatusCode, ErrorDetails) {
        (
            self.error.status_code(),
            ErrorDetails {
                date_time: Local::now().naive_local(),
                description: self.description.clone(),
                message: self.error.message(),
            },
        )
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let (status, details) = self.to_error_details();
        (status, Json(details)).into_response()
    }
}

impl From<RewardError> for ApiError {
    fn from(err: RewardError) -> Self {
        match err {
            RewardError::CustomerNotFound(id) => ApiError::CustomerNotFound { id },
            RewardError::InvalidAmount => ApiError::InvalidAmount,
            RewardError::Repository(e) => ApiError::DatabaseError(e),
            other @ RewardError::PointsOverflow(_) => ApiError::InternalError(other.to_string()),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => ApiError::CustomerNotFound { id },
            CustomerError::Repository(e) => ApiError::DatabaseError(e),
        }
    }
}
