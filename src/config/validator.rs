//! Validate configuration: pool bounds, database URL scheme, server settings.

use crate::config::types::AppConfig;
use crate::error::ConfigError;

/// Validate a loaded configuration. Returns the first problem found.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.bind_addr.trim().is_empty() {
        return Err(ConfigError::Validation("bind address must not be empty".into()));
    }
    if config.server.body_limit_bytes == 0 {
        return Err(ConfigError::Validation("body limit must be greater than zero".into()));
    }

    let url = config.database.url.as_str();
    if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        return Err(ConfigError::Validation(
            "database url must start with postgres:// or postgresql://".into(),
        ));
    }

    let pool = &config.database.pool;
    if pool.max_size == 0 {
        return Err(ConfigError::Validation("pool max size must be greater than zero".into()));
    }
    if pool.min_size > pool.max_size {
        return Err(ConfigError::Validation(format!(
            "pool min size {} exceeds max size {}",
            pool.min_size, pool.max_size
        )));
    }
    if pool.initial_size < pool.min_size || pool.initial_size > pool.max_size {
        return Err(ConfigError::Validation(format!(
            "pool initial size {} must be between {} and {}",
            pool.initial_size, pool.min_size, pool.max_size
        )));
    }
    Ok(())
}
