//! API Routes
//!
//! Configures the Axum router with all cache endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_handler, get_handler, health_handler, keys_handler, set_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /:cache/set` - Store a key-value pair
/// - `GET /:cache/get/:key` - Retrieve a value by key
/// - `DELETE /:cache/del/:key` - Delete a key
/// - `GET /:cache/keys` - List stored keys
/// - `DELETE /:cache/clear` - Drop every entry
/// - `GET /:cache/stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// `:cache` is `api` or `ui`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/:cache/set", put(set_handler))
        .route("/:cache/get/:key", get(get_handler))
        .route("/:cache/del/:key", delete(delete_handler))
        .route("/:cache/keys", get(keys_handler))
        .route("/:cache/clear", delete(clear_handler))
        .route("/:cache/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
