//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One shared PgPool, handed to handlers through router state
//! - Every repository call is a single parameterized statement
//! - No transactions, no retries

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, UserRepo};
pub use schema::ensure_schema;
