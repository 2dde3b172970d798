//! PostgreSQL-backed store. Each operation runs in its own transaction;
//! an uncommitted transaction rolls back when dropped.

use super::CustomerStore;
use crate::config::DatabaseConfig;
use crate::error::{AppError, ConfigError};
use crate::model::Customer;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;

const SELECT_ALL: &str = "SELECT id, first_name, last_name, email FROM customer";
const SELECT_BY_ID: &str = "SELECT id, first_name, last_name, email FROM customer WHERE id = $1";
const UPDATE: &str = "UPDATE customer SET first_name = $2, last_name = $3, email = $4 WHERE id = $1";
const INSERT: &str = "INSERT INTO customer (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id";
const DELETE: &str = "DELETE FROM customer WHERE id = $1";

#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerStore { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        tracing::debug!(sql = SELECT_ALL, "query");
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, Customer>(SELECT_ALL)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError> {
        tracing::debug!(sql = SELECT_BY_ID, id, "query");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Customer>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;
        if !customer.is_new() {
            tracing::debug!(sql = UPDATE, id = customer.id, "query (tx)");
            let updated = sqlx::query(UPDATE)
                .bind(customer.id)
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.email)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            if updated > 0 {
                tx.commit().await?;
                return Ok(customer);
            }
        }
        tracing::debug!(sql = INSERT, "query (tx)");
        let id: i32 = sqlx::query_scalar(INSERT)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Customer { id, ..customer })
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = DELETE, id, "query");
        let mut tx = self.pool.begin().await?;
        sqlx::query(DELETE).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Connection options from config: URL plus optional credential overrides.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, AppError> {
    let mut opts = PgConnectOptions::from_str(&config.url).map_err(|e| {
        AppError::Config(ConfigError::Invalid {
            key: crate::config::loader::DATABASE_URL,
            value: "<redacted>".into(),
            reason: e.to_string(),
        })
    })?;
    if let Some(user) = &config.user {
        opts = opts.username(user);
    }
    if let Some(password) = &config.password {
        opts = opts.password(password);
    }
    Ok(opts)
}

/// Build the connection pool and open `initial_size` connections up front.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let opts = connect_options(config)?;
    tracing::info!(
        host = opts.get_host(),
        port = opts.get_port(),
        database = opts.get_database().unwrap_or_default(),
        "connecting to database"
    );
    if config.create_database {
        ensure_database_exists(&opts).await?;
    }
    let pool = PgPoolOptions::new()
        .min_connections(config.pool.min_size)
        .max_connections(config.pool.max_size)
        .idle_timeout(Duration::from_secs(config.pool.max_idle_secs))
        .connect_with(opts)
        .await?;

    let mut warm = Vec::with_capacity(config.pool.initial_size as usize);
    for _ in 0..config.pool.initial_size {
        warm.push(pool.acquire().await?);
    }
    drop(warm);
    tracing::info!(size = pool.size(), "connection pool ready");
    Ok(pool)
}

/// Ensure the database named in `opts` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = opts.get_database().unwrap_or_default().to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
