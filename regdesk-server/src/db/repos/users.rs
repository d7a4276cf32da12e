//! User repository
//!
//! - insert: one parameterized INSERT per registration
//! - list: username and password of every row, in whatever order
//!   PostgreSQL returns them

use sqlx::PgPool;

use crate::models::{NewUser, UserListing};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a validated user.
    pub async fn insert(&self, user: &NewUser) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO user_table (name, email, username, password)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.username())
        .bind(user.password())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List every stored user. No ORDER BY: callers must not rely on order.
    pub async fn list(&self) -> Result<Vec<UserListing>, DbError> {
        let users = sqlx::query_as::<_, UserListing>(
            r#"SELECT username, password FROM user_table"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Number of stored users.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_table")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, ensure_schema};
    use crate::models::RegistrationRequest;

    // Run with: DATABASE_URL=... cargo test -p regdesk-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema failed");
        pool
    }

    async fn rows_named(pool: &PgPool, username: &str) -> i64 {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user_table WHERE username = $1")
                .bind(username)
                .fetch_one(pool)
                .await
                .expect("count failed");
        count
    }

    fn new_user(username: &str, password: &str) -> NewUser {
        RegistrationRequest {
            name: "Repo Test".into(),
            email: "repo@example.com".into(),
            username: username.into(),
            password: password.into(),
            confirm_password: password.into(),
        }
        .validate()
        .expect("passwords match")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_adds_exactly_one_row() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let before = rows_named(&pool, "repo-insert").await;
        repo.insert(&new_user("repo-insert", "pw-insert")).await.unwrap();
        let after = rows_named(&pool, "repo-insert").await;

        assert_eq!(after, before + 1);
        assert!(repo.count().await.unwrap() >= after);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_returns_inserted_credentials() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        repo.insert(&new_user("repo-list", "pw-list")).await.unwrap();
        let users = repo.list().await.unwrap();

        assert!(users.contains(&UserListing {
            username: "repo-list".into(),
            password: "pw-list".into(),
        }));
    }
}
