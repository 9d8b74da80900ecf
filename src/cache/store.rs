//! Cache Store Module
//!
//! Map of request identities to response bodies, with age-based reaping.
//! The store itself is not synchronized; `ExpiringCache` wraps it in a lock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheCounters, CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage for cached response bodies.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    counters: CacheCounters,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with the current instant.
    ///
    /// If the key already exists the value is replaced and its age reset.
    pub fn insert(&mut self, key: String, value: Arc<[u8]>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Lookup ==
    /// Returns the stored value for `key`, regardless of its age.
    ///
    /// Staleness is only acted on by `reap_stale`; a read never evicts.
    pub fn lookup(&self, key: &str) -> Option<Arc<[u8]>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.counters.record_hit();
                Some(Arc::clone(&entry.value))
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Reap Stale ==
    /// Removes every entry older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_stale(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(max_age, now));

        let removed = before - self.entries.len();
        self.counters.record_reaped(removed);
        removed
    }

    // == Entry Age ==
    /// Returns the age of the entry under `key` as of `now`, if present.
    pub fn age_of(&self, key: &str, now: Instant) -> Option<Duration> {
        self.entries.get(key).map(|entry| entry.age(now))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
