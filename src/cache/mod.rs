//! Cache Module
//!
//! Provides an in-memory response cache with periodic age-based reaping.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;
