use crate::core::errors::SplitbaseError;
use crate::core::models::GroupSummary;
use crate::infrastructure::cache::{Cache, cache_keys};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, (GroupSummary, chrono::DateTime<chrono::Utc>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<Option<GroupSummary>, SplitbaseError> {
        let cache = self.cache.read().await;
        let key = cache_keys::group_summary_key(group_id, user_id);
        Ok(cache
            .get(&key)
            .filter(|(_, expiry)| *expiry > chrono::Utc::now())
            .map(|(summary, _)| summary.clone()))
    }

    async fn save_group_summary(
        &self,
        group_id: &str,
        user_id: &str,
        summary: &GroupSummary,
        ttl: std::time::Duration,
    ) -> Result<(), SplitbaseError> {
        let mut cache = self.cache.write().await;
        let key = cache_keys::group_summary_key(group_id, user_id);
        let expiry = chrono::Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| SplitbaseError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        cache.insert(key, (summary.clone(), expiry));
        Ok(())
    }

    async fn invalidate_group(&self, group_id: &str) -> Result<(), SplitbaseError> {
        let mut cache = self.cache.write().await;
        let prefix = cache_keys::group_prefix(group_id);
        cache.retain(|key, (_, expiry)| {
            !key.starts_with(&prefix) && *expiry > chrono::Utc::now()
        });
        Ok(())
    }
}
