//! Cache Sweep Lifecycle
//!
//! Starts and tears down the background expiry sweeps of the hosted caches.

use tracing::info;

use crate::api::AppState;

/// Starts the background expiry sweep of every hosted cache.
///
/// Must be called from within a tokio runtime.
pub fn start_sweepers(state: &AppState) {
    for (name, cache) in state.caches() {
        cache.start();
        info!("Background sweep started for '{}' cache", name);
    }
}

/// Stops every sweep and drops all cached entries.
pub fn shutdown(state: &AppState) {
    for (name, cache) in state.caches() {
        cache.destroy();
        info!("'{}' cache destroyed", name);
    }
}
