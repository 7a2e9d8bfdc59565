//! Configuration Module
//!
//! Cache instance configuration and server configuration loaded from
//! environment variables.

use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Configuration for a single [`Cache`](crate::cache::Cache) instance.
///
/// Durations deserialize from integer milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    #[serde(alias = "maxSize", alias = "capacity")]
    pub max_size: usize,
    /// Default time-to-live for entries
    #[serde(with = "millis")]
    pub ttl: Duration,
    /// Period of the background expiry sweep
    #[serde(alias = "cleanupInterval", with = "millis")]
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Preset for cached API responses.
    pub fn api_responses() -> Self {
        Self {
            max_size: 500,
            ttl: Duration::from_secs(10 * 60),
            cleanup_interval: Duration::from_secs(2 * 60),
        }
    }

    /// Preset for cached UI state.
    pub fn ui_state() -> Self {
        Self {
            max_size: 100,
            ttl: Duration::from_secs(30 * 60),
            cleanup_interval: Duration::from_secs(5 * 60),
        }
    }

    /// Rejects configurations the cache cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }
        if self.cleanup_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "cleanup_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Overrides fields from `{prefix}_MAX_SIZE`, `{prefix}_TTL_MS` and
    /// `{prefix}_CLEANUP_MS`, keeping current values for missing or
    /// unparseable variables.
    fn with_env_overrides(mut self, prefix: &str) -> Self {
        if let Some(max_size) = env_parse(&format!("{prefix}_MAX_SIZE")) {
            self.max_size = max_size;
        }
        if let Some(ms) = env_parse(&format!("{prefix}_TTL_MS")) {
            self.ttl = Duration::from_millis(ms);
        }
        if let Some(ms) = env_parse(&format!("{prefix}_CLEANUP_MS")) {
            self.cleanup_interval = Duration::from_millis(ms);
        }
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            ttl: Duration::from_secs(5 * 60),
            cleanup_interval: Duration::from_secs(60),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port
    pub server_port: u16,
    /// Cache holding API responses
    pub api_cache: CacheConfig,
    /// Cache holding UI state
    pub ui_cache: CacheConfig,
}

impl ServerConfig {
    /// Creates a new ServerConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_CACHE_MAX_SIZE`, `API_CACHE_TTL_MS`, `API_CACHE_CLEANUP_MS`
    ///   (defaults: 500, 10 min, 2 min)
    /// - `UI_CACHE_MAX_SIZE`, `UI_CACHE_TTL_MS`, `UI_CACHE_CLEANUP_MS`
    ///   (defaults: 100, 30 min, 5 min)
    pub fn from_env() -> Self {
        Self {
            server_port: env_parse("SERVER_PORT").unwrap_or(3000),
            api_cache: CacheConfig::api_responses().with_env_overrides("API_CACHE"),
            ui_cache: CacheConfig::ui_state().with_env_overrides("UI_CACHE"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_cache: CacheConfig::api_responses(),
            ui_cache: CacheConfig::ui_state(),
        }
    }
}
