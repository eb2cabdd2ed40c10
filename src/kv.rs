use crate::config::QueryConfig;
use crate::error::AppError;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::RwLock;

/// Identifies a cached fetch, e.g. `["gym", "1"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(scope: &str) -> Self {
        QueryKey(vec![scope.to_string()])
    }

    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

struct CachedEntry {
    value: Value,
    updated_at: Instant,
    last_used: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// In-memory response cache for the mock data functions.
///
/// Entries are stored as JSON values and decoded on the way out, so one cache
/// serves every record type. Fresh entries (written less than `stale_time`
/// ago) are answered without calling the fetcher; entries not read or written
/// for `gc_time` are dropped. Failed fetches are never stored.
pub struct QueryCache {
    config: QueryConfig,
    entries: RwLock<HashMap<QueryKey, CachedEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        self.collect_garbage().await;

        if let Some(value) = self.fresh_value(&key).await {
            match serde_json::from_value(value) {
                Ok(data) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!("query cache hit for {}", key);
                    return Ok(data);
                }
                Err(e) => warn!("discarding unreadable cache entry for {}: {}", key, e),
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("query cache miss for {}", key);
        let data = fetcher().await?;
        let value = serde_json::to_value(&data)?;
        let now = Instant::now();
        self.entries.write().await.insert(
            key,
            CachedEntry {
                value,
                updated_at: now,
                last_used: now,
            },
        );
        Ok(data)
    }

    /// Cached data for `key` regardless of staleness, as long as it has not
    /// been garbage-collected. Counts as a use of the entry.
    #[cfg(test)]
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .get_mut(key)
            .filter(|entry| entry.last_used.elapsed() < self.config.gc_time)?;
        entry.last_used = Instant::now();
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().await.len(),
        }
    }

    async fn fresh_value(&self, key: &QueryKey) -> Option<Value> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .get_mut(key)
            .filter(|entry| entry.updated_at.elapsed() < self.config.stale_time)?;
        entry.last_used = Instant::now();
        Some(entry.value.clone())
    }

    async fn collect_garbage(&self) {
        let gc_time = self.config.gc_time;
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.last_used.elapsed() < gc_time);
    }
}
