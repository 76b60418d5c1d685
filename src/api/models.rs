use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitbaseError;
use crate::core::models::ExpenseCategory;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
    pub address: String,
    pub avatar: Option<String>,
    pub created_by_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub member_ids: Vec<String>,
    pub currency: Option<String>,
    pub created_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub group_id: String,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub paid_by_id: String,
    pub split_between_ids: Vec<String>,
    pub created_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GetGroupExpensesRequest {
    pub group_id: String,
    pub queried_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GroupSummaryRequest {
    pub group_id: String,
    pub user_id: String,
    /// Count expenses flagged settled. Defaults to true.
    pub include_settled: Option<bool>,
}

#[derive(Deserialize, ToSchema)]
pub struct MemberBalancesRequest {
    pub group_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateSettlementRequest {
    pub group_id: String,
    pub from_id: String,
    pub to_id: String,
    pub amount: f64,
    pub created_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ExecuteSettlementRequest {
    pub settlement_id: String,
    pub requested_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GetPendingSettlementsRequest {
    pub group_id: String,
    pub user_id: String,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitbaseError to implement IntoResponse
pub struct ApiError(pub SplitbaseError);

impl From<SplitbaseError> for ApiError {
    fn from(err: SplitbaseError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            SplitbaseError::UserNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("User {} not found", id))
            }
            SplitbaseError::UserAlreadyRegistered(id) => (
                StatusCode::CONFLICT,
                format!("User {} already registered", id),
            ),
            SplitbaseError::GroupNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Group {} not found", id))
            }
            SplitbaseError::NotGroupMember(id) => (
                StatusCode::FORBIDDEN,
                format!("User {} is not a group member", id),
            ),
            SplitbaseError::InvalidSplitUser(id) => (
                StatusCode::BAD_REQUEST,
                format!("User {} is not a group member for split", id),
            ),
            SplitbaseError::InvalidSplit => {
                (StatusCode::BAD_REQUEST, "Invalid split".to_string())
            }
            SplitbaseError::SettlementNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Settlement {} not found", id))
            }
            SplitbaseError::SettlementAlreadyResolved(id) => (
                StatusCode::CONFLICT,
                format!("Settlement {} already resolved", id),
            ),
            SplitbaseError::SelfSettlement => (
                StatusCode::BAD_REQUEST,
                "Cannot create settlement to self".to_string(),
            ),
            SplitbaseError::InvalidInput(field, msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {:?}", field, msg),
            ),
            SplitbaseError::StorageError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", msg),
            ),
            SplitbaseError::LoggingError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Logging error: {}", msg),
            ),
            SplitbaseError::CacheError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Cache error: {}", msg),
            ),
            SplitbaseError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
