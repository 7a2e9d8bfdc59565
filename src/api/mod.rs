//! API Module
//!
//! HTTP handlers and routing for inspecting the hosted caches.
//!
//! # Endpoints
//! - `PUT /:cache/set` - Store a key-value pair
//! - `GET /:cache/get/:key` - Retrieve a value by key
//! - `DELETE /:cache/del/:key` - Delete a key
//! - `GET /:cache/keys` - List stored keys
//! - `DELETE /:cache/clear` - Drop every entry
//! - `GET /:cache/stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
