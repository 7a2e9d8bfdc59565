//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access tracking.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time of insertion or last overwrite
    pub created_at: Instant,
    /// Time-to-live measured from `created_at`
    pub ttl: Duration,
    /// Number of successful reads since insertion
    pub access_count: u64,
    /// Time of insertion or last successful read
    pub last_accessed: Instant,
    /// Recency sequence assigned together with `last_accessed`
    pub access_tick: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time-to-live for this entry
    /// * `now` - Insertion time
    /// * `tick` - Recency sequence for LRU ordering
    pub fn new(value: V, ttl: Duration, now: Instant, tick: u64) -> Self {
        Self {
            value,
            created_at: now,
            ttl,
            access_count: 0,
            last_accessed: now,
            access_tick: tick,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was created.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired only once its age is strictly
    /// greater than its TTL, so an entry read exactly at `created_at + ttl`
    /// is still live.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.age(now) > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or zero once the TTL has elapsed.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        self.ttl.saturating_sub(self.age(now))
    }

    // == Touch ==
    /// Records a successful read.
    pub fn touch(&mut self, now: Instant, tick: u64) {
        self.access_count += 1;
        self.last_accessed = now;
        self.access_tick = tick;
    }
}
