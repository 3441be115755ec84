//! HTTP API layer.
//!
//! Exposes the conversation store and chat pipeline as JSON endpoints.
//! The router is composable; `build_router` returns a `Router` that can
//! be mounted on any axum server instance, and `server` wraps it with
//! bind/run/shutdown plumbing.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::build_router;
pub use server::{serve, start_server, ApiServer};
pub use types::ApiContext;
