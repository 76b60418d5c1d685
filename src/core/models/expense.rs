use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Accommodation,
    Entertainment,
    Shopping,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food & Drinks",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "🍽️",
            ExpenseCategory::Transport => "🚗",
            ExpenseCategory::Accommodation => "🏠",
            ExpenseCategory::Entertainment => "🎬",
            ExpenseCategory::Shopping => "🛍️",
            ExpenseCategory::Utilities => "💡",
            ExpenseCategory::Other => "📝",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One shared cost, paid up front by `paid_by` and owed in equal parts by
/// everyone in `split_between` (which may or may not include the payer).
///
/// `split_between` is never empty on a stored expense; the service rejects
/// empty splits at creation. `settled` is an informational flag; whether it
/// excludes the expense from balance math is the caller's choice via
/// `BalancePolicy`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub paid_by: User,
    pub split_between: Vec<User>,
    pub category: ExpenseCategory,
    pub date: DateTime<Utc>,
    pub settled: bool,
}

impl Expense {
    /// Equal share owed by each split participant.
    pub fn share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }

    pub fn splits_to(&self, user_id: &str) -> bool {
        self.split_between.iter().any(|u| u.id == user_id)
    }
}
