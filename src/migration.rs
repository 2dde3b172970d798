//! Schema setup for the `customer` table. Idempotent; run once at startup.

use crate::error::AppError;
use sqlx::PgPool;

const CREATE_CUSTOMER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customer (
        id SERIAL PRIMARY KEY,
        first_name TEXT,
        last_name TEXT,
        email TEXT
    )
"#;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    tracing::debug!(sql = CREATE_CUSTOMER_TABLE, "migration");
    sqlx::query(CREATE_CUSTOMER_TABLE).execute(pool).await?;
    tracing::info!("customer table ready");
    Ok(())
}
