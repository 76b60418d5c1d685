/// Tolerance for floating-point balance comparisons. Equal splits are plain
/// f64 division, so per-member shares of an expense may drift from the
/// expense total by less than this.
pub const BALANCE_EPSILON: f64 = 1e-9;

/// Number of expenses surfaced in a group summary, newest first.
pub const RECENT_EXPENSE_COUNT: usize = 3;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_AMOUNT: f64 = 1_000_000.0;

// Audit action names.
pub const USER_ADDED: &str = "USER_ADDED";
pub const GROUP_CREATED: &str = "GROUP_CREATED";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
pub const EXPENSES_QUERIED: &str = "EXPENSES_QUERIED";
pub const SETTLEMENT_REQUESTED: &str = "SETTLEMENT_REQUESTED";
pub const SETTLEMENT_COMPLETED: &str = "SETTLEMENT_COMPLETED";
pub const SETTLEMENT_FAILED: &str = "SETTLEMENT_FAILED";
pub const PENDING_SETTLEMENTS_QUERIED: &str = "PENDING_SETTLEMENTS_QUERIED";
pub const SUMMARY_QUERIED: &str = "SUMMARY_QUERIED";
pub const BALANCES_QUERIED: &str = "BALANCES_QUERIED";
