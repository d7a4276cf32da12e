//! Schema bootstrap for the user table

use sqlx::PgPool;

use super::repos::DbError;

const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS user_table (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255),
        email VARCHAR(255),
        username VARCHAR(255),
        password VARCHAR(255)
    )
"#;

/// Create the user table if it does not exist yet.
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!(table = "user_table", "Ensuring schema");
    sqlx::query(CREATE_USER_TABLE).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run failed");
        ensure_schema(&pool).await.expect("second run failed");

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = $1",
        )
        .bind("user_table")
        .fetch_one(&pool)
        .await
        .expect("catalog query failed");

        assert_eq!(tables, 1);
    }
}
