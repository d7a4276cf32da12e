//! HTTP server layer
//!
//! Axum server with:
//! - Registration and user listing routes
//! - Static file fallback
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
