//! Cache-Aside Helpers
//!
//! Wraps asynchronous producers (database-backed queries and the like) with
//! a lookaside [`Cache`].
//!
//! Neither helper de-duplicates in-flight producers: concurrent misses on the
//! same key each run their own producer, and the last completed `set` wins.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::Cache;

/// Fraction of the TTL after which a hit schedules a background refresh.
pub const DEFAULT_PREFETCH_THRESHOLD: f64 = 0.8;

impl<V: Clone + Send + 'static> Cache<V> {
    // == With Cache ==
    /// Returns the cached value for `key`, or runs `producer` and caches its
    /// result.
    ///
    /// A producer error is returned unchanged and nothing is cached, so the
    /// next call runs the producer again.
    pub async fn with_cache<F, Fut, E>(
        &self,
        key: &str,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = producer().await?;
        self.set(key, value.clone(), ttl);
        Ok(value)
    }

    // == With Prefetch Cache ==
    /// Like [`with_cache`](Self::with_cache), but refreshes entries that are
    /// close to expiring.
    ///
    /// On a hit whose age exceeds `ttl * threshold`, `producer` is spawned as
    /// a detached task and the current value is returned without waiting.
    /// The refresh result overwrites the entry on success and is dropped on
    /// failure. `ttl` of `None` means the cache's default TTL.
    pub async fn with_prefetch_cache<F, Fut, E>(
        &self,
        key: &str,
        producer: F,
        ttl: Option<Duration>,
        threshold: f64,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: Send + 'static,
    {
        let Some((value, age)) = self.get_with_age(key) else {
            let value = producer().await?;
            self.set(key, value.clone(), ttl);
            return Ok(value);
        };

        let effective_ttl = ttl.unwrap_or_else(|| self.default_ttl());
        let refresh_after =
            Duration::try_from_secs_f64(effective_ttl.as_secs_f64() * threshold)
                .unwrap_or(Duration::MAX);
        if age > refresh_after {
            debug!(key, "scheduling background refresh");
            self.spawn_refresh(key.to_string(), producer(), ttl);
        }

        Ok(value)
    }

    fn spawn_refresh<Fut, E>(&self, key: String, refresh: Fut, ttl: Option<Duration>)
    where
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: Send + 'static,
    {
        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            if let Ok(value) = refresh.await {
                if let Some(inner) = weak.upgrade() {
                    Cache { inner }.set(key, value, ttl);
                }
            }
        });
    }
}
