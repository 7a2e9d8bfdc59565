//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and
//! cache-aside helpers for asynchronous producers.

mod aside;
mod entry;
mod handle;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use aside::DEFAULT_PREFETCH_THRESHOLD;
pub use entry::CacheEntry;
pub use handle::Cache;
pub use lru::{least_recently_used, RecencyClock};
pub use stats::CacheStats;
pub use store::CacheStore;
