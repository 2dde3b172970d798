//! Customer persistence. `CustomerStore` is the only owner of durable state;
//! callers get value copies.

mod memory;
mod postgres;

pub use memory::InMemoryCustomerStore;
pub use postgres::{connect, ensure_database_exists, PgCustomerStore};

use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers, in storage order.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// Lookup by primary key. A missing row is `Ok(None)`, not an error.
    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError>;

    /// Replace the row with `customer.id` if it exists, otherwise insert a new
    /// row with a store-assigned id. Returns the persisted copy.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Remove the row. Deleting an id that does not exist succeeds.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
