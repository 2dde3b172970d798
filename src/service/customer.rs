//! Customer operations exposed to the web layer. Pure delegation to the store.

use crate::error::AppError;
use crate::model::Customer;
use crate::store::CustomerStore;
use std::sync::Arc;

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        CustomerService { store }
    }

    pub async fn customers(&self) -> Result<Vec<Customer>, AppError> {
        tracing::debug!("list customers");
        self.store.list().await
    }

    pub async fn get_customer(&self, id: i32) -> Result<Option<Customer>, AppError> {
        tracing::debug!(id, "get customer");
        self.store.get(id).await
    }

    pub async fn save_customer(&self, customer: Customer) -> Result<Customer, AppError> {
        tracing::debug!(id = customer.id, "save customer");
        self.store.save(customer).await
    }

    pub async fn delete_customer(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "delete customer");
        self.store.delete(id).await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
