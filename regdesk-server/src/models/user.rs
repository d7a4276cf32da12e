//! Stored user as shown on the listing page

use serde::Serialize;
use sqlx::FromRow;

/// Username and password of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserListing {
    pub username: String,
    pub password: String,
}
