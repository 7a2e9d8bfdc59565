//! Lookaside - An expiring LRU cache for asynchronous producers
//!
//! Provides a bounded, TTL-expiring key/value cache with cache-aside helpers,
//! plus a small HTTP surface for inspecting hosted cache instances.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheStats, DEFAULT_PREFETCH_THRESHOLD};
pub use config::{CacheConfig, ServerConfig};
pub use error::CacheError;
pub use tasks::{shutdown, start_sweepers};
