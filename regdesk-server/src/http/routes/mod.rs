//! Route handlers
//!
//! - register: POST /register (GET is an alias for the user list)
//! - users: GET /userList
//! - static_files: everything else, from the static root

pub mod register;
pub mod static_files;
pub mod users;

use axum::http::StatusCode;

/// Fallback for unsupported methods on a known path
pub(crate) async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
