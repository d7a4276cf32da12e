//! regdesk-server: HTTP server for user registration
//!
//! Accepts registration form submissions, stores them in PostgreSQL and
//! renders the stored users through an HTML template. Everything else is
//! served from a static file directory.

pub mod db;
pub mod http;
pub mod models;
pub mod view;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
