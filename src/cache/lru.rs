//! LRU Module
//!
//! Recency tracking for least-recently-used eviction.
//!
//! Entries carry their own `last_accessed` stamp, so reads stay O(1). The
//! victim is only searched for when an insert would overflow capacity.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Recency Clock ==
/// Monotonic sequence used to order entries stamped at the same instant.
#[derive(Debug, Default)]
pub struct RecencyClock {
    next: u64,
}

impl RecencyClock {
    // == Constructor ==
    /// Creates a new clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Next ==
    /// Returns a tick strictly greater than every previously returned tick.
    pub fn next(&mut self) -> u64 {
        let tick = self.next;
        self.next += 1;
        tick
    }
}

// == Least Recently Used ==
/// Returns the key whose entry has the smallest `last_accessed`.
///
/// Ties on `last_accessed` are broken by `access_tick`, i.e. by the order in
/// which entries were inserted or read. Returns None for an empty map.
pub fn least_recently_used<V>(entries: &HashMap<String, CacheEntry<V>>) -> Option<&str> {
    entries
        .iter()
        .min_by_key(|(_, entry)| (entry.last_accessed, entry.access_tick))
        .map(|(key, _)| key.as_str())
}
