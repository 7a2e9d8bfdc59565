//! API Handlers
//!
//! HTTP request handlers for inspecting and administering the hosted caches.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{Cache, CacheStats};
use crate::config::ServerConfig;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, KeysResponse, MessageResponse, SetRequest};

/// Application state shared across all handlers.
///
/// Owns the two cache instances served by this process.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Cached API responses
    pub api: Cache<Value>,
    /// Cached UI state
    pub ui: Cache<Value>,
}

impl AppState {
    /// Creates a new AppState with the given caches.
    pub fn new(api: Cache<Value>, ui: Cache<Value>) -> Self {
        Self { api, ui }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The background sweeps are not started here.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self::new(
            Cache::new(config.api_cache.clone())?,
            Cache::new(config.ui_cache.clone())?,
        ))
    }

    /// Looks up a hosted cache by name (`api` or `ui`).
    pub fn cache(&self, name: &str) -> Result<&Cache<Value>> {
        match name {
            "api" => Ok(&self.api),
            "ui" => Ok(&self.ui),
            other => Err(CacheError::NotFound(format!("cache '{}'", other))),
        }
    }

    /// Iterates over every hosted cache with its name.
    pub fn caches(&self) -> [(&'static str, &Cache<Value>); 2] {
        [("api", &self.api), ("ui", &self.ui)]
    }
}

/// Handler for PUT /:cache/set
pub async fn set_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    state.cache(&cache)?.set(req.key.clone(), req.value, ttl);

    Ok(Json(MessageResponse::stored(&req.key)))
}

/// Handler for GET /:cache/get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache(&cache)?
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(format!("key '{}'", key)))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /:cache/del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<MessageResponse>> {
    if !state.cache(&cache)?.delete(&key) {
        return Err(CacheError::NotFound(format!("key '{}'", key)));
    }

    Ok(Json(MessageResponse::deleted(&key)))
}

/// Handler for GET /:cache/keys
pub async fn keys_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
) -> Result<Json<KeysResponse>> {
    Ok(Json(KeysResponse::new(state.cache(&cache)?.keys())))
}

/// Handler for DELETE /:cache/clear
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.cache(&cache)?.clear();
    Ok(Json(MessageResponse::cleared(&cache)))
}

/// Handler for GET /:cache/stats
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
) -> Result<Json<CacheStats>> {
    Ok(Json(state.cache(&cache)?.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
