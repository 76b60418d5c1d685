use utoipa::OpenApi;

use crate::{
    api::models::{
        AddExpenseRequest, CreateGroupRequest, CreateSettlementRequest, CreateUserRequest,
        ErrorResponse, ExecuteSettlementRequest, GetGroupExpensesRequest,
        GetPendingSettlementsRequest, GroupSummaryRequest, MemberBalancesRequest,
    },
    core::models::{
        AppLog, Balance, Expense, ExpenseCategory, Group, GroupAudit, GroupSummary, Settlement,
        SettlementStatus, User,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::get_user,
        super::handlers::get_user_groups,
        super::handlers::create_group,
        super::handlers::list_groups,
        super::handlers::get_group,
        super::handlers::add_expense,
        super::handlers::get_group_expenses,
        super::handlers::get_group_summary,
        super::handlers::get_member_balances,
        super::handlers::get_balance_chart,
        super::handlers::create_settlement,
        super::handlers::execute_settlement,
        super::handlers::get_pending_settlements,
        super::handlers::get_app_logs,
        super::handlers::get_group_audits
    ),
    components(schemas(
        CreateUserRequest,
        CreateGroupRequest,
        AddExpenseRequest,
        GetGroupExpensesRequest,
        GroupSummaryRequest,
        MemberBalancesRequest,
        CreateSettlementRequest,
        ExecuteSettlementRequest,
        GetPendingSettlementsRequest,
        ErrorResponse,
        User,
        Group,
        Expense,
        ExpenseCategory,
        Settlement,
        SettlementStatus,
        Balance,
        GroupSummary,
        AppLog,
        GroupAudit
    )),
    info(
        title = "Splitbase API",
        description = "API for splitting group expenses and settling balances on-chain",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
