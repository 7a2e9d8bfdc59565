//! Response DTOs for the cache HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for the GET operation (GET /:cache/get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Generic acknowledgement for mutating operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    /// Acknowledges a stored key
    pub fn stored(key: &str) -> Self {
        Self {
            message: format!("Key '{}' stored successfully", key),
        }
    }

    /// Acknowledges a deleted key
    pub fn deleted(key: &str) -> Self {
        Self {
            message: format!("Key '{}' deleted successfully", key),
        }
    }

    /// Acknowledges a cleared cache
    pub fn cleared(cache: &str) -> Self {
        Self {
            message: format!("Cache '{}' cleared", cache),
        }
    }
}

/// Response body for GET /:cache/keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Stored keys, sorted
    pub keys: Vec<String>,
}

impl KeysResponse {
    /// Creates a new KeysResponse with keys in sorted order
    pub fn new(mut keys: Vec<String>) -> Self {
        keys.sort();
        Self { keys }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
