use crate::{
    api::models::*,
    core::{
        errors::SplitbaseError,
        models::{AppLog, Balance, Expense, Group, GroupAudit, GroupSummary, Settlement, User},
        services::SplitbaseService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, executor::mock::MockSettlementExecutor,
        logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
    visualization::Visualization,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

pub type AppService =
    SplitbaseService<InMemoryLogging, InMemoryStorage, InMemoryCache, MockSettlementExecutor>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/users", axum::routing::post(create_user))
        .route("/users/{user_id}", axum::routing::get(get_user))
        .route("/users/{user_id}/groups", axum::routing::get(get_user_groups))
        .route("/groups", axum::routing::post(create_group))
        .route("/groups", axum::routing::get(list_groups))
        .route("/groups/{group_id}", axum::routing::get(get_group))
        .route("/groups/{group_id}/chart", axum::routing::get(get_balance_chart))
        .route("/groups/{group_id}/audits", axum::routing::get(get_group_audits))
        .route("/expenses", axum::routing::post(add_expense))
        .route("/expenses/list", axum::routing::post(get_group_expenses))
        .route("/summary", axum::routing::post(get_group_summary))
        .route("/balances", axum::routing::post(get_member_balances))
        .route("/settlements", axum::routing::post(create_settlement))
        .route("/settlements/execute", axum::routing::post(execute_settlement))
        .route("/settlements/pending", axum::routing::post(get_pending_settlements))
        .route("/logs", axum::routing::get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "User ID already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    let user = User {
        id: req.id,
        name: req.name,
        address: req.address,
        avatar: req.avatar,
    };
    let created_by_user = if let Some(ref id) = req.created_by_id {
        Some(
            service
                .get_user(id)
                .await?
                .ok_or_else(|| SplitbaseError::UserNotFound(id.clone()))?,
        )
    } else {
        None
    };
    service.add_user(user, created_by_user.as_ref()).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(service): State<Arc<AppService>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user(&user_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(user_id))?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/groups",
    params(
        ("user_id" = String, Path, description = "ID of the user whose groups to list")
    ),
    responses(
        (status = 200, description = "Groups retrieved successfully", body = Vec<Group>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user_groups(
    State(service): State<Arc<AppService>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = service.get_user_groups(&user_id).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created successfully", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_group(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Json<Group>, ApiError> {
    let created_by = service
        .get_user(&req.created_by_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.created_by_id))?;
    let members = req
        .member_ids
        .into_iter()
        .map(|id| async {
            service
                .get_user(&id)
                .await?
                .ok_or_else(|| SplitbaseError::UserNotFound(id))
        })
        .collect::<Vec<_>>();
    let members = futures::future::try_join_all(members).await?;
    let group = service
        .create_group(req.name, req.description, members, req.currency, &created_by)
        .await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "Groups retrieved successfully", body = Vec<Group>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_groups(
    State(service): State<Arc<AppService>>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = service.list_groups().await?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group to retrieve")
    ),
    responses(
        (status = 200, description = "Group retrieved successfully", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    let group = service
        .get_group(&group_id)
        .await?
        .ok_or_else(|| SplitbaseError::GroupNotFound(group_id))?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = AddExpenseRequest,
    responses(
        (status = 200, description = "Expense added successfully", body = Expense),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn add_expense(
    State(service): State<Arc<AppService>>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let created_by = service
        .get_user(&req.created_by_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.created_by_id))?;
    let expense = service
        .add_expense(
            &req.group_id,
            req.title,
            req.description,
            req.amount,
            req.category,
            &req.paid_by_id,
            &req.split_between_ids,
            &created_by,
        )
        .await?;
    Ok(Json(expense))
}

#[utoipa::path(
    post,
    path = "/api/expenses/list",
    request_body = GetGroupExpensesRequest,
    responses(
        (status = 200, description = "Expenses retrieved successfully", body = Vec<Expense>),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_expenses(
    State(service): State<Arc<AppService>>,
    Json(req): Json<GetGroupExpensesRequest>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let queried_by = service
        .get_user(&req.queried_by_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.queried_by_id))?;
    let expenses = service.group_expenses(&req.group_id, &queried_by).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    post,
    path = "/api/summary",
    request_body = GroupSummaryRequest,
    responses(
        (status = 200, description = "Summary computed successfully", body = GroupSummary),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_summary(
    State(service): State<Arc<AppService>>,
    Json(req): Json<GroupSummaryRequest>,
) -> Result<Json<GroupSummary>, ApiError> {
    let summary = service
        .group_summary(&req.group_id, &req.user_id, req.include_settled)
        .await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/balances",
    request_body = MemberBalancesRequest,
    responses(
        (status = 200, description = "Balances computed successfully", body = Vec<Balance>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_member_balances(
    State(service): State<Arc<AppService>>,
    Json(req): Json<MemberBalancesRequest>,
) -> Result<Json<Vec<Balance>>, ApiError> {
    let balances = service.member_balances(&req.group_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/chart",
    params(
        ("group_id" = String, Path, description = "ID of the group to chart")
    ),
    responses(
        (status = 200, description = "Chart configuration generated"),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_balance_chart(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let group = service
        .get_group(&group_id)
        .await?
        .ok_or_else(|| SplitbaseError::GroupNotFound(group_id.clone()))?;
    let balances = service.member_balances(&group_id).await?;
    Ok(Json(Visualization::balance_chart(&group, &balances)))
}

#[utoipa::path(
    post,
    path = "/api/settlements",
    request_body = CreateSettlementRequest,
    responses(
        (status = 200, description = "Settlement requested successfully", body = Settlement),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_settlement(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateSettlementRequest>,
) -> Result<Json<Settlement>, ApiError> {
    let created_by = service
        .get_user(&req.created_by_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.created_by_id))?;
    let settlement = service
        .create_settlement(&req.group_id, &req.from_id, &req.to_id, req.amount, &created_by)
        .await?;
    Ok(Json(settlement))
}

#[utoipa::path(
    post,
    path = "/api/settlements/execute",
    request_body = ExecuteSettlementRequest,
    responses(
        (status = 200, description = "Settlement resolved", body = Settlement),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Settlement or user not found", body = ErrorResponse),
        (status = 409, description = "Settlement already resolved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn execute_settlement(
    State(service): State<Arc<AppService>>,
    Json(req): Json<ExecuteSettlementRequest>,
) -> Result<Json<Settlement>, ApiError> {
    let requested_by = service
        .get_user(&req.requested_by_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.requested_by_id))?;
    let settlement = service
        .execute_settlement(&req.settlement_id, &requested_by)
        .await?;
    Ok(Json(settlement))
}

#[utoipa::path(
    post,
    path = "/api/settlements/pending",
    request_body = GetPendingSettlementsRequest,
    responses(
        (status = 200, description = "Pending settlements retrieved", body = Vec<Settlement>),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Group or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_pending_settlements(
    State(service): State<Arc<AppService>>,
    Json(req): Json<GetPendingSettlementsRequest>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    let user = service
        .get_user(&req.user_id)
        .await?
        .ok_or_else(|| SplitbaseError::UserNotFound(req.user_id))?;
    let settlements = service.pending_settlements(&req.group_id, &user).await?;
    Ok(Json(settlements))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_app_logs(
    State(service): State<Arc<AppService>>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/audits",
    params(
        ("group_id" = String, Path, description = "ID of the group whose audit trail to list")
    ),
    responses(
        (status = 200, description = "Group audits retrieved", body = Vec<GroupAudit>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_audits(
    State(service): State<Arc<AppService>>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<GroupAudit>>, ApiError> {
    let audits = service.get_group_audits(&group_id).await?;
    Ok(Json(audits))
}
