//! Startup configuration types. Built once, then passed by reference.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// Largest request body accepted by the JSON extractor.
    pub body_limit_bytes: usize,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the user embedded in `url`.
    pub user: Option<String>,
    /// Overrides the password embedded in `url`.
    pub password: Option<String>,
    /// Create the target database on startup if it does not exist.
    pub create_database: bool,
    pub pool: PoolConfig,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("create_database", &self.create_database)
            .field("pool", &self.pool)
            .finish()
    }
}

/// Connection pool bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Connections opened eagerly at startup.
    pub initial_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    /// Idle connections above `min_size` are closed after this many seconds.
    pub max_idle_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Log every SQL statement issued by the store.
    pub show_sql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: "0.0.0.0:8080".into(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: "postgres://localhost/customer_tracker".into(),
            user: None,
            password: None,
            create_database: true,
            pool: PoolConfig::default(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            initial_size: 5,
            min_size: 5,
            max_size: 20,
            max_idle_secs: 30_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "customer_crm=info,tower_http=info".into(),
            show_sql: false,
        }
    }
}
