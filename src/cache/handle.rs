//! Shared Cache Handle
//!
//! Cloneable, thread-safe handle around a [`CacheStore`] that owns the
//! background expiry sweep.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;

pub(super) struct Inner<V> {
    store: Mutex<CacheStore<V>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
    cleanup_interval: Duration,
}

impl<V> Drop for Inner<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.get_mut().take() {
            handle.abort();
        }
    }
}

// == Cache ==
/// A bounded, expiring key/value cache.
///
/// Clones share the same storage. The background sweep is not running after
/// construction; call [`start`](Cache::start) to enable it and
/// [`stop`](Cache::stop) or [`destroy`](Cache::destroy) to cancel it.
pub struct Cache<V> {
    pub(super) inner: Arc<Inner<V>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> std::fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("cleanup_interval", &self.inner.cleanup_interval)
            .field(
                "running",
                &self
                    .inner
                    .sweeper
                    .lock()
                    .as_ref()
                    .is_some_and(|handle| !handle.is_finished()),
            )
            .finish_non_exhaustive()
    }
}

impl<V: Clone + Send + 'static> Cache<V> {
    // == Constructor ==
    /// Creates a cache from a validated configuration.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            inner: Arc::new(Inner {
                store: Mutex::new(CacheStore::new(config.max_size, config.ttl)),
                sweeper: Mutex::new(None),
                cleanup_interval: config.cleanup_interval,
            }),
        })
    }

    // == Store Operations ==
    /// Stores `value` under `key`; `None` uses the configured default TTL.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        self.inner.store.lock().set(key.into(), value, ttl);
    }

    /// Returns the live value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.store.lock().get(key)
    }

    pub(crate) fn get_with_age(&self, key: &str) -> Option<(V, Duration)> {
        self.inner.store.lock().get_with_age(key)
    }

    /// Returns true if `key` holds a live entry.
    pub fn has(&self, key: &str) -> bool {
        self.inner.store.lock().has(key)
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.store.lock().delete(key)
    }

    pub fn clear(&self) {
        self.inner.store.lock().clear();
    }

    pub fn size(&self) -> usize {
        self.inner.store.lock().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.store.lock().keys()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.store.lock().stats()
    }

    /// TTL applied when none is given.
    pub fn default_ttl(&self) -> Duration {
        self.inner.store.lock().default_ttl()
    }

    // == Sweeper Lifecycle ==
    /// Starts the periodic expiry sweep on the current tokio runtime.
    ///
    /// Does nothing if the sweep is already running. The task only holds a
    /// weak reference and ends on its own once every handle is dropped.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn start(&self) {
        let mut slot = self.inner.sweeper.lock();
        if slot.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let interval = self.inner.cleanup_interval;
        info!(
            "Starting cache sweep with interval of {} ms",
            interval.as_millis()
        );
        *slot = Some(tokio::spawn(sweep(Arc::downgrade(&self.inner), interval)));
    }

    /// Cancels the expiry sweep, keeping all entries.
    pub fn stop(&self) {
        if let Some(handle) = self.inner.sweeper.lock().take() {
            handle.abort();
            info!("Cache sweep stopped");
        }
    }

    /// Returns true while the expiry sweep is scheduled.
    pub fn is_running(&self) -> bool {
        self.inner
            .sweeper
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancels the sweep and drops every entry.
    ///
    /// The cache stays usable afterwards, but expired entries are then only
    /// removed lazily on read.
    pub fn destroy(&self) {
        self.stop();
        self.clear();
        info!("Cache destroyed");
    }
}

async fn sweep<V: Clone>(weak: Weak<Inner<V>>, interval: Duration) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);

    loop {
        ticker.tick().await;

        let Some(inner) = weak.upgrade() else {
            debug!("Cache dropped, sweep exiting");
            return;
        };

        let removed = inner.store.lock().cleanup_expired();
        if removed > 0 {
            debug!("Cache sweep: removed {} expired entries", removed);
        }
    }
}
