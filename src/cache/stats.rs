//! Cache Statistics Module
//!
//! Point-in-time snapshot of cache occupancy and reuse.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of a cache's size and entry reuse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Maximum number of entries allowed
    pub capacity: usize,
    /// Mean access count over current entries
    ///
    /// Not a hit/miss ratio: it reports the same value as
    /// `average_access_count`.
    pub hit_rate: f64,
    /// Mean access count over current entries
    pub average_access_count: f64,
}

impl CacheStats {
    // == From Access Counts ==
    /// Builds a snapshot from the access counts of the current entries.
    ///
    /// Returns 0.0 for both averages when the cache is empty.
    pub fn from_access_counts<I>(capacity: usize, counts: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let (size, total) = counts
            .into_iter()
            .fold((0usize, 0u64), |(n, sum), count| (n + 1, sum + count));

        let average = if size == 0 {
            0.0
        } else {
            total as f64 / size as f64
        };

        Self {
            size,
            capacity,
            hit_rate: average,
            average_access_count: average,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty() {
        let stats = CacheStats::from_access_counts(10, std::iter::empty());
        assert_eq!(stats.size, 0);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hit_rate, 0.0);
        assert_eq!(stats.average_access_count, 0.0);
    }

    #[test]
    fn test_stats_average() {
        let stats = CacheStats::from_access_counts(10, [0, 2, 4]);
        assert_eq!(stats.size, 3);
        assert_eq!(stats.average_access_count, 2.0);
    }

    #[test]
    fn test_hit_rate_matches_average_access_count() {
        let stats = CacheStats::from_access_counts(10, [1, 2]);
        assert_eq!(stats.hit_rate, 1.5);
        assert_eq!(stats.hit_rate, stats.average_access_count);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats::from_access_counts(5, [3]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["size"], 1);
        assert_eq!(json["capacity"], 5);
        assert_eq!(json["hit_rate"], 3.0);
        assert_eq!(json["average_access_count"], 3.0);
    }
}
