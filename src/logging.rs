//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use crate::error::ConfigError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Directive that turns on per-statement SQL logging in the store.
pub const SHOW_SQL_DIRECTIVE: &str = "customer_crm::store=debug";

/// Build the filter: `RUST_LOG` wins when set, otherwise the configured directives.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| ConfigError::Invalid {
            key: crate::config::loader::LOG_FILTER,
            value: config.filter.clone(),
            reason: e.to_string(),
        })?,
    };
    if !config.show_sql {
        return Ok(filter);
    }
    let directive = SHOW_SQL_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;
    Ok(filter.add_directive(directive))
}

/// Install the global `fmt` subscriber. Call once, before anything logs.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
