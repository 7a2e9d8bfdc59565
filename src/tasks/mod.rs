//! Background Tasks Module
//!
//! Lifecycle of the background work attached to the hosted caches.
//!
//! # Tasks
//! - Expiry sweep: removes expired entries at each cache's configured interval

mod cleanup;

pub use cleanup::{shutdown, start_sweepers};
