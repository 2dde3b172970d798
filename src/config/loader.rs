//! Load configuration from environment variables (after `.env`, if present).

use crate::config::types::{AppConfig, DatabaseConfig, LoggingConfig, PoolConfig, ServerConfig};
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

pub const BIND_ADDR: &str = "CRM_BIND_ADDR";
pub const BODY_LIMIT_BYTES: &str = "CRM_BODY_LIMIT_BYTES";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_USER: &str = "CRM_DATABASE_USER";
pub const DATABASE_PASSWORD: &str = "CRM_DATABASE_PASSWORD";
pub const CREATE_DATABASE: &str = "CRM_CREATE_DATABASE";
pub const POOL_INITIAL_SIZE: &str = "CRM_POOL_INITIAL_SIZE";
pub const POOL_MIN_SIZE: &str = "CRM_POOL_MIN_SIZE";
pub const POOL_MAX_SIZE: &str = "CRM_POOL_MAX_SIZE";
pub const POOL_MAX_IDLE_SECS: &str = "CRM_POOL_MAX_IDLE_SECS";
pub const LOG_FILTER: &str = "CRM_LOG";
pub const SHOW_SQL: &str = "CRM_SHOW_SQL";

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys take defaults;
    /// present but unparseable keys are an error. The result is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let server = ServerConfig {
            bind_addr: get(BIND_ADDR).unwrap_or(defaults.server.bind_addr),
            body_limit_bytes: parse_or(get(BODY_LIMIT_BYTES), BODY_LIMIT_BYTES, defaults.server.body_limit_bytes)?,
        };

        let pool_defaults = defaults.database.pool;
        let database = DatabaseConfig {
            url: get(DATABASE_URL).unwrap_or(defaults.database.url),
            user: get(DATABASE_USER),
            password: lookup(DATABASE_PASSWORD).filter(|p| !p.is_empty()),
            create_database: parse_bool_or(get(CREATE_DATABASE), CREATE_DATABASE, defaults.database.create_database)?,
            pool: PoolConfig {
                initial_size: parse_or(get(POOL_INITIAL_SIZE), POOL_INITIAL_SIZE, pool_defaults.initial_size)?,
                min_size: parse_or(get(POOL_MIN_SIZE), POOL_MIN_SIZE, pool_defaults.min_size)?,
                max_size: parse_or(get(POOL_MAX_SIZE), POOL_MAX_SIZE, pool_defaults.max_size)?,
                max_idle_secs: parse_or(get(POOL_MAX_IDLE_SECS), POOL_MAX_IDLE_SECS, pool_defaults.max_idle_secs)?,
            },
        };

        let logging = LoggingConfig {
            filter: get(LOG_FILTER).unwrap_or(defaults.logging.filter),
            show_sql: parse_bool_or(get(SHOW_SQL), SHOW_SQL, defaults.logging.show_sql)?,
        };

        let config = AppConfig {
            server,
            database,
            logging,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool_or(raw: Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}
