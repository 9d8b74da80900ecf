//! Expiring Cache Module
//!
//! Thread-safe handle combining a locked `CacheStore` with its reaper task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_reap_task, ReaperHandle};

// == Expiring Cache ==
/// Shared response cache whose entries are evicted once they grow too old.
///
/// Cloning yields another handle to the same entries and the same reaper.
/// The reaper is aborted when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    reaper: Arc<ReaperHandle>,
    reap_interval: Duration,
    max_age: Duration,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Entries are reaped once older than `reap_interval`, so each one lives
    /// between one and two intervals. Must be called within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `reap_interval` is zero.
    pub fn new(reap_interval: Duration) -> Self {
        Self::with_max_age(reap_interval, reap_interval)
    }

    /// Creates an empty cache whose eviction age is independent of the reap
    /// period. An entry then lives at most `max_age + reap_interval`.
    ///
    /// # Panics
    /// Panics if `reap_interval` is zero.
    pub fn with_max_age(reap_interval: Duration, max_age: Duration) -> Self {
        assert!(!reap_interval.is_zero(), "reap interval must be non-zero");
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(Arc::clone(&store), reap_interval, max_age);

        Self {
            store,
            reaper: Arc::new(reaper),
            reap_interval,
            max_age,
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) {
        let key = key.into();
        debug!(key = %key, "cache insert");
        self.store.write().await.insert(key, value.into());
    }

    // == Lookup ==
    /// Returns the value stored under `key`, if any.
    ///
    /// Only takes the read lock, so concurrent lookups proceed in parallel.
    pub async fn lookup(&self, key: &str) -> Option<Arc<[u8]>> {
        self.store.read().await.lookup(key)
    }

    // == Stats ==
    /// Returns a snapshot of cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub fn reap_interval(&self) -> Duration {
        self.reap_interval
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    // == Shutdown ==
    /// Stops the background reaper. Entries stay readable but are no longer
    /// evicted.
    pub fn shutdown(&self) {
        self.reaper.shutdown();
    }

    /// Returns true while the background reaper is running.
    pub fn is_reaping(&self) -> bool {
        self.reaper.is_running()
    }
}
