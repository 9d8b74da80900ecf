//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached response body with its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, shared immutably with callers
    pub value: Arc<[u8]>,
    /// Monotonic insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: Arc<[u8]>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, measured at `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks if the entry has outlived `max_age`.
    ///
    /// Boundary condition: an entry whose age is exactly `max_age` is still
    /// fresh. Only a strictly greater age makes it stale.
    pub fn is_stale(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn payload(bytes: &[u8]) -> Arc<[u8]> {
        Arc::from(bytes)
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(payload(b"test_value"));

        assert_eq!(&*entry.value, b"test_value");
        assert!(!entry.is_stale(Duration::from_secs(60), Instant::now()));
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(payload(b"v"));
        let later = entry.created_at + Duration::from_millis(250);

        assert_eq!(entry.age(later), Duration::from_millis(250));
    }

    #[test]
    fn test_entry_age_saturates_before_creation() {
        let earlier = Instant::now();
        let entry = CacheEntry::new(payload(b"v"));

        assert_eq!(entry.age(earlier), Duration::ZERO);
    }

    #[test]
    fn test_staleness_boundary_condition() {
        let entry = CacheEntry::new(payload(b"v"));
        let max_age = Duration::from_millis(50);

        assert!(
            !entry.is_stale(max_age, entry.created_at + max_age),
            "Entry should still be fresh at exactly max_age"
        );
        assert!(
            entry.is_stale(max_age, entry.created_at + max_age + Duration::from_millis(1)),
            "Entry should be stale once max_age is exceeded"
        );
    }
}
