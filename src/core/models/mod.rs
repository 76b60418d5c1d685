pub mod audit;
pub mod balance;
pub mod expense;
pub mod group;
pub mod settlement;
pub mod user;

pub use audit::{AppLog, GroupAudit};
pub use balance::{Balance, GroupSummary};
pub use expense::{Expense, ExpenseCategory};
pub use group::Group;
pub use settlement::{Settlement, SettlementStatus};
pub use user::User;
