//! Customer CRM: REST CRUD service for customer records backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, LoggingConfig, PoolConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use logging::init_tracing;
pub use migration::apply_migrations;
pub use model::Customer;
pub use response::{error_body, ErrorBody};
pub use routes::{app, common_routes, common_routes_with_ready, customer_routes, docs_routes, ApiDoc};
pub use service::CustomerService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, CustomerStore, InMemoryCustomerStore, PgCustomerStore};
