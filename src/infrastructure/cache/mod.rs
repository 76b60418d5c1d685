pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::SplitbaseError;
use crate::core::models::GroupSummary;
use async_trait::async_trait;

/// Read-side cache for computed group summaries. Writes to a group's
/// expenses or settlements must invalidate the whole group.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Option<GroupSummary>, SplitbaseError>;
    async fn save_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        summary: &GroupSummary,
        ttl: std::time::Duration,
    ) -> Result<(), SplitbaseError>;
    async fn invalidate_group(&self, group_id: &str) -> Result<(), SplitbaseError>;
}
