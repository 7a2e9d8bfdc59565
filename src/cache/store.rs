//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{least_recently_used, CacheEntry, CacheStats, RecencyClock};

// == Cache Store ==
/// Bounded cache storage with LRU eviction and per-entry TTL.
///
/// Every operation is total: a missing or expired key is reported as `None`
/// or `false`, never as an error.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency sequence for LRU tie-breaking
    recency: RecencyClock,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL for entries stored without an explicit TTL
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries stored without an explicit TTL
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyClock::new(),
            capacity,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Overwriting an existing key replaces the entry entirely, resetting its
    /// age and access count. Inserting a new key into a full cache first
    /// evicts the least recently used entry.
    ///
    /// Returns the key that was evicted to make room, if any.
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>) -> Option<String> {
        let now = Instant::now();

        let mut evicted = None;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(victim) = least_recently_used(&self.entries).map(str::to_owned) {
                self.entries.remove(&victim);
                debug!(key = %victim, "evicted least recently used entry");
                evicted = Some(victim);
            }
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, ttl, now, self.recency.next());
        self.entries.insert(key, entry);

        evicted
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed and reported as absent. A successful read
    /// bumps the entry's access count and recency.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_with_age(key).map(|(value, _)| value)
    }

    // == Get With Age ==
    /// Same as [`get`](Self::get), also returning the entry's age.
    pub fn get_with_age(&mut self, key: &str) -> Option<(V, Duration)> {
        let now = Instant::now();
        let entry = self.entries.get_mut(key)?;

        if entry.is_expired(now) {
            self.entries.remove(key);
            return None;
        }

        entry.touch(now, self.recency.next());
        Some((entry.value.clone(), entry.age(now)))
    }

    // == Has ==
    /// Returns true if `key` holds a live entry.
    ///
    /// Performs the same expiry check and access bookkeeping as `get`.
    pub fn has(&mut self, key: &str) -> bool {
        self.get_with_age(key).is_some()
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Keys ==
    /// Returns the stored keys in unspecified order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_access_counts(
            self.capacity,
            self.entries.values().map(|entry| entry.access_count),
        )
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
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

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// TTL applied when `set` is called without one.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }
}
