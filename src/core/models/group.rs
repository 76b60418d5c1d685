use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named roster sharing one expense ledger in a single currency.
///
/// `members` is a value-copy snapshot taken when the group is created or a
/// member is added; later edits to a user elsewhere do not reach the group.
/// `total_expenses` is a denormalized running total and must always equal the
/// sum of the group's expense amounts; it is only ever updated together with
/// the expense log in one storage transition.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub members: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub total_expenses: f64,
    pub currency: String,
}

impl Group {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    pub fn member_name(&self, user_id: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.id == user_id)
            .map(|m| m.name.as_str())
    }
}
